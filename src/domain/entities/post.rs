use crate::domain::entities::{
    id::Id,
    user::User
};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Id<Post>,
    pub user_id: Id<User>,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// A post that has not been stored yet; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: Id<User>,
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(user_id: Id<User>, title: String, content: String) -> Self {
        Self {
            user_id,
            title,
            content,
        }
    }
}
