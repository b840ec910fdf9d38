pub mod repository;
pub mod session;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
    #[error("Session invalid or expired")]
    SessionError,
}

pub type CoreResult<T> = Result<T, CoreError>;
