use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BookstoreError {
    AccessDenied {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // Raised when shared in-memory state can no longer be trusted, e.g. a lock
    // was poisoned by a panicking writer.
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookstoreError {
    pub fn access_denied(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::AccessDenied { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> BookstoreError {
        BookstoreError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> BookstoreError {
        BookstoreError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> BookstoreError {
        BookstoreError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> BookstoreError {
        BookstoreError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn poisoned(what: &str) -> BookstoreError {
        BookstoreError::runtime(
            format!("{} lock poisoned", what).as_str(), Some("poisoned".to_string()))
    }

    // message without the reason code, used for client facing bodies
    pub fn message(&self) -> &str {
        match self {
            BookstoreError::AccessDenied { message, .. } => message,
            BookstoreError::DuplicateKey { message } => message,
            BookstoreError::NotFound { message } => message,
            BookstoreError::Validation { message, .. } => message,
            BookstoreError::Serialization { message } => message,
            BookstoreError::Runtime { message, .. } => message,
        }
    }
}

impl From<std::io::Error> for BookstoreError {
    fn from(err: std::io::Error) -> Self {
        BookstoreError::runtime(
            format!("io error {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for BookstoreError {
    fn from(err: serde_json::Error) -> Self {
        BookstoreError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for BookstoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookstoreError::AccessDenied { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookstoreError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::NotFound { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookstoreError::Serialization { message } => {
                write!(f, "{}", message)
            }
            BookstoreError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for BookstoreError {}

/// A specialized Result type for bookstore services and repositories.
pub type BookstoreResult<T> = Result<T, BookstoreError>;
