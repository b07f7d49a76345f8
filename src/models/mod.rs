// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod comment;
pub mod user;

pub use comment::Comment;
pub use user::{Address, Company, Geo, User};
