//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod comment;
pub mod context;
pub mod diary;
pub mod error;
pub mod movie;
pub mod review;
pub mod sync;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use diary::DiaryService;
pub use error::{ServiceError, ServiceResult};
pub use movie::MovieService;
pub use review::ReviewService;
pub use sync::{CatalogSyncService, DEFAULT_SYNC_PAGES};
pub use user::UserService;
