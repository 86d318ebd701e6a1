use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::{
        app_error::{AppError, AppResult},
        dto::auth::{AuthOutcome, ResolveAuthDTO},
        interactors::auth::Authenticator,
    },
};
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Requires a resolvable bearer credential. A missing credential and a failed resolution
/// are both answered with 401 before the handler runs.
pub async fn auth_middleware(
    authenticator: Authenticator,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let dto = ResolveAuthDTO {
        authorization: extract_authorization(request.headers()),
    };
    match authenticator.resolve(dto).await {
        AuthOutcome::Resolved(auth) => {
            request.extensions_mut().insert(AuthUser(auth));
        }
        AuthOutcome::NoCredential => {
            debug!("Request to protected route without credentials");
            return Err(AppError::InvalidCredentials);
        }
        AuthOutcome::Failure(reason) => {
            debug!("Authentication failed: {}", reason);
            return Err(AppError::InvalidCredentials);
        }
    }

    Ok(next.run(request).await)
}

/// Raw `Authorization` value. Bytes that are not valid UTF-8 are replaced, so a garbled
/// header is still seen as present instead of looking absent.
pub fn extract_authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
