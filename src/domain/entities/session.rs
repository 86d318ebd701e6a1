use crate::domain::entities::{
    id::Id,
    user::User
};

/// A bearer session. `expires_at` is carried as stored and is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Id<Session>,
    pub user_id: Id<User>,
    pub session_token: String,
    pub expires_at: String,
}
