use thiserror::Error;

use domain::error::DomainError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid purchase parameters: {message}")]
    InvalidArgument { message: String },

    /// Carries the remote backend's own message unchanged.
    #[error("{message}")]
    RemoteOperationFailed { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidArgument { message } => AppError::InvalidArgument { message },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
