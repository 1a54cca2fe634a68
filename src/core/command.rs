use async_trait::async_trait;
use crate::core::bookstore::BookstoreError;

#[derive(Debug)]
pub enum CommandError {
    Access {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn message(&self) -> &str {
        match self {
            CommandError::Access { message, .. } => message,
            CommandError::DuplicateKey { message } => message,
            CommandError::NotFound { message } => message,
            CommandError::Runtime { message, .. } => message,
            CommandError::Serialization { message } => message,
            CommandError::Validation { message, .. } => message,
        }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<BookstoreError> for CommandError {
    fn from(other: BookstoreError) -> Self {
        match other {
            BookstoreError::AccessDenied { message, reason_code } => {
                CommandError::Access { message, reason_code }
            }
            BookstoreError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            BookstoreError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            BookstoreError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            BookstoreError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            BookstoreError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
