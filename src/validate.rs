//! Presence checks for candidate records.
//!
//! The validator only looks at the fields of a single candidate. Key
//! uniqueness is checked by the store when the record is admitted.

use serde::{Deserialize, Serialize};

use crate::config::ValidationMode;
use crate::country::CountryInput;

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Check `input` under `mode`.
///
/// Every check runs; the returned vector lists the failures in field
/// order and is empty when the candidate is acceptable. A field counts as
/// missing only when it is the empty string; whitespace is content.
pub fn validate(input: &CountryInput, mode: ValidationMode) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if input.name.is_empty() {
        errors.push(FieldError::new("name", "Name field cannot be empty."));
    }

    if mode == ValidationMode::Strict {
        if input.alpha2_code.is_empty() {
            errors.push(FieldError::new(
                "alpha2Code",
                "Alpha-2 code field cannot be empty.",
            ));
        }
        if input.alpha3_code.is_empty() {
            errors.push(FieldError::new(
                "alpha3Code",
                "Alpha-3 code field cannot be empty.",
            ));
        }
    }

    errors
}
