use crate::{
    application::app_error::AppResult,
    domain::entities::session::Session
};
use async_trait::async_trait;

#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Point lookup by bearer token. At most one session matches.
    async fn find_by_token(&self, session_token: &str) -> AppResult<Option<Session>>;
}
