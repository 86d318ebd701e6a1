use thiserror::Error;

use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

#[derive(Debug, Clone)]
pub struct ResolveAuthDTO {
    /// Raw `Authorization` header value, `None` when the header is absent.
    pub authorization: Option<String>,
}

/// Identity proven by one request's bearer token. Built per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResult {
    pub user: User,
    pub session: Session,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("authorization header is not a bearer credential")]
    MalformedCredential,
    #[error("no session matches the bearer token")]
    SessionNotFound,
    #[error("session refers to a missing user")]
    UserNotFound,
    #[error("credential store is unavailable")]
    StoreUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    NoCredential,
    Failure(AuthFailure),
    Resolved(AuthResult),
}
