use crate::domain::entities::id::Id;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Id<User>,
    pub username: String,
    pub email: String,
    pub created_at: String,
}
