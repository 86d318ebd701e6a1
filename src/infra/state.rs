use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Sqlite};

use crate::adapter::db::gateway::post::PostGateway;
use crate::adapter::db::gateway::session::SessionGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::auth::Authenticator;
use crate::application::interactors::post::{
    CreatePostInteractor, GetPostListInteractor, GetUserPostListInteractor,
};
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Sqlite>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// Authenticator
#[async_trait]
impl FromAppState for Authenticator {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let session_gateway = SessionGateway::new(session.clone());
        let user_gateway = UserGateway::new(session);

        Ok(Authenticator::new(
            Arc::new(session_gateway),
            Arc::new(user_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for Authenticator
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Authenticator::from_app_state(&app_state).await
    }
}

// CreatePostInteractor
#[async_trait]
impl FromAppState for CreatePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(CreatePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for CreatePostInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        CreatePostInteractor::from_app_state(&app_state).await
    }
}

// GetPostListInteractor
#[async_trait]
impl FromAppState for GetPostListInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(GetPostListInteractor::new(Arc::new(post_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetPostListInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetPostListInteractor::from_app_state(&app_state).await
    }
}

// GetUserPostListInteractor
#[async_trait]
impl FromAppState for GetUserPostListInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(GetUserPostListInteractor::new(Arc::new(post_gateway)))
    }
}

impl<S> FromRequestParts<S> for GetUserPostListInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
        let app_state = AppState::from_ref(state);
        GetUserPostListInteractor::from_app_state(&app_state).await
    }
}
