//! PostgreSQL repository implementations

pub mod error;

mod comment;
mod diary;
mod movie;
mod review;
mod user;

pub use comment::PgCommentRepository;
pub use diary::PgDiaryRepository;
pub use movie::PgMovieRepository;
pub use review::PgReviewRepository;
pub use user::PgUserRepository;
