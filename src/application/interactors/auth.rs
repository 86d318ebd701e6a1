use std::sync::Arc;

use tracing::{debug, error};

use crate::application::dto::auth::{AuthFailure, AuthOutcome, AuthResult, ResolveAuthDTO};
use crate::application::interface::gateway::session::SessionReader;
use crate::application::interface::gateway::user::UserReader;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Resolves a bearer credential into the user and session it proves.
///
/// Resolution only reads: one session lookup by token, then one user lookup by the
/// session's owner. Nothing is cached between calls.
#[derive(Clone)]
pub struct Authenticator {
    session_reader: Arc<dyn SessionReader>,
    user_reader: Arc<dyn UserReader>,
}

impl Authenticator {
    pub fn new(session_reader: Arc<dyn SessionReader>, user_reader: Arc<dyn UserReader>) -> Self {
        Self {
            session_reader,
            user_reader,
        }
    }

    pub async fn resolve(&self, dto: ResolveAuthDTO) -> AuthOutcome {
        let header = match dto.authorization.as_deref() {
            None | Some("") => return AuthOutcome::NoCredential,
            Some(header) => header,
        };

        let token = match extract_bearer_token(header) {
            Some(token) => token,
            None => {
                debug!("Rejected malformed authorization header");
                return AuthOutcome::Failure(AuthFailure::MalformedCredential);
            }
        };

        let session = match self.session_reader.find_by_token(token).await {
            Ok(Some(session)) => session,
            Ok(None) => {
                debug!("No session matches the presented bearer token");
                return AuthOutcome::Failure(AuthFailure::SessionNotFound);
            }
            Err(e) => {
                error!("Session lookup failed: {}", e);
                return AuthOutcome::Failure(AuthFailure::StoreUnavailable);
            }
        };

        let user = match self.user_reader.find_by_id(&session.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                error!(
                    "Session {} refers to missing user {}",
                    session.id, session.user_id
                );
                return AuthOutcome::Failure(AuthFailure::UserNotFound);
            }
            Err(e) => {
                error!("User lookup failed: {}", e);
                return AuthOutcome::Failure(AuthFailure::StoreUnavailable);
            }
        };

        debug!("Resolved session {} for user {}", session.id, user.id);
        AuthOutcome::Resolved(AuthResult { user, session })
    }
}

/// Returns everything after a literal `Bearer ` prefix, or `None` when the header is too
/// short or does not start with it. The remainder is an opaque token, possibly empty.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix(BEARER_PREFIX)
}
