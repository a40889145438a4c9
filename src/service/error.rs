//! Error type for request handlers.

use std::error::Error;
use std::fmt;

use serde_json::{json, Value};

use crate::error::StoreError;
use crate::validate::FieldError;

pub const NOT_FOUND_MESSAGE: &str = "Country not found.";
pub const DUPLICATE_MESSAGE: &str = "Country already exists.";
pub const INTERNAL_MESSAGE: &str = "Internal server error.";

#[derive(Debug)]
pub enum ApiError {
    /// One or more required fields were missing or empty.
    Validation(Vec<FieldError>),
    /// The store refused or failed the operation.
    Store(StoreError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                write!(f, "validation failed: {}", fields.join(", "))
            }
            ApiError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Store(e) => Some(e),
            ApiError::Validation(_) => None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl ApiError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Store(StoreError::Duplicate { .. }) => 400,
            ApiError::Store(StoreError::NotFound(_)) => 404,
            ApiError::Store(StoreError::IdsExhausted) => 500,
            ApiError::Store(StoreError::LockPoisoned(_)) => 500,
            ApiError::Store(StoreError::Persistence(_)) => 500,
        }
    }

    /// JSON body sent back to the client. Server-side failures carry only
    /// a generic message; the detail goes to the log.
    pub fn body(&self) -> Value {
        match self {
            ApiError::Validation(errors) => json!({ "errors": errors }),
            ApiError::Store(StoreError::Duplicate { .. }) => json!({ "message": DUPLICATE_MESSAGE }),
            ApiError::Store(StoreError::NotFound(_)) => json!({ "message": NOT_FOUND_MESSAGE }),
            ApiError::Store(_) => json!({ "message": INTERNAL_MESSAGE }),
        }
    }
}
