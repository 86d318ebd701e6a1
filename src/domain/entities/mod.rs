pub mod id;
pub mod post;
pub mod session;
pub mod user;
