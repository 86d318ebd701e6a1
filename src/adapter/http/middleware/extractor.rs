use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::AuthResult;

/// Identity resolved by `auth_middleware` for the current request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthResult);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> AppResult<Self> {
        match parts.extensions.remove::<AuthUser>() {
            Some(user) => Ok(user),
            None => Err(AppError::InvalidCredentials),
        }
    }
}
