pub mod fixtures;
pub mod helpers;
