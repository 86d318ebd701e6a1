use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::dto::post::PostDTO;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "Hello",
    "content": "My first post"
}))]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(example = "Hello")]
    pub title: String,
    #[validate(length(min = 1, message = "Content must not be empty"))]
    #[schema(example = "My first post")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 42)]
    pub user_id: i64,
    #[schema(example = "Hello")]
    pub title: String,
    #[schema(example = "My first post")]
    pub content: String,
    #[schema(example = "2025-01-01 12:00:00")]
    pub created_at: String,
}

impl From<PostDTO> for PostResponse {
    fn from(post: PostDTO) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}
