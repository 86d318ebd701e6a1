use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{NewPost, Post};
use crate::domain::entities::user::User;

#[async_trait]
pub trait PostWriter: Send + Sync {
    async fn insert(&self, post: NewPost) -> AppResult<Post>;
}

#[async_trait]
pub trait PostReader: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Post>>;
    async fn get_by_user(&self, user_id: &Id<User>) -> AppResult<Vec<Post>>;
}
