//! # cinemood-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CatalogSyncService, CommentService, DiaryService, MovieService, ReviewService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
    DEFAULT_SYNC_PAGES,
};
