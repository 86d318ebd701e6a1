#[derive(Debug, Clone)]
pub struct CreatePostDTO {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct GetUserPostListDTO {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostDTO {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}
