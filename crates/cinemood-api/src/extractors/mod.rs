//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path parameters.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::{CommentIdPath, DiaryIdPath, ReviewIdPath};
pub use validated::ValidatedJson;
