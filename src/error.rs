use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to read or write the persisted country list.
#[derive(Debug)]
pub enum PersistenceError {
    Io { path: PathBuf, source: io::Error },
    Serde { path: PathBuf, source: serde_json::Error },
    /// Raised by test doubles to simulate a failed write.
    Unavailable(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io { path, source } => {
                write!(f, "i/o error on {}: {}", path.display(), source)
            }
            PersistenceError::Serde { path, source } => {
                write!(f, "malformed country data in {}: {}", path.display(), source)
            }
            PersistenceError::Unavailable(message) => {
                write!(f, "persistence unavailable: {}", message)
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PersistenceError::Io { source, .. } => Some(source),
            PersistenceError::Serde { source, .. } => Some(source),
            PersistenceError::Unavailable(_) => None,
        }
    }
}

/// Error type for country store operations.
#[derive(Debug)]
pub enum StoreError {
    /// No record matches the given code or id.
    NotFound(String),
    /// A record already holds the candidate's alpha-2 or alpha-3 code.
    Duplicate {
        alpha2_code: String,
        alpha3_code: String,
    },
    /// Every id up to `u64::MAX` has been handed out.
    IdsExhausted,
    LockPoisoned(&'static str),
    Persistence(PersistenceError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(key) => write!(f, "country not found: {}", key),
            StoreError::Duplicate {
                alpha2_code,
                alpha3_code,
            } => write!(
                f,
                "country already exists with code {} or {}",
                alpha2_code, alpha3_code
            ),
            StoreError::IdsExhausted => write!(f, "no country ids left to assign"),
            StoreError::LockPoisoned(operation) => {
                write!(f, "country store lock poisoned during {}", operation)
            }
            StoreError::Persistence(e) => write!(f, "persistence error: {}", e),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Persistence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        StoreError::Persistence(err)
    }
}
