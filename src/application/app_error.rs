use axum::extract::rejection::JsonRejection;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Database session is already committed")]
    SessionAlreadyCommitted,
}

pub type AppResult<T> = Result<T, AppError>;
