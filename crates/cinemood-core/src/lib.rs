//! # cinemood-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentWithAuthor, DiaryEntry, EmotionMovieCount, Genre, Movie, Review,
    ReviewWithMeta, User, MAX_RATING, MIN_RATING,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, DiaryRepository, MovieRepository, RepoResult, ReviewRepository,
    UserRepository,
};
pub use value_objects::{
    Emotion, EmotionParseError, RankingOrder, RankingOrderParseError, Snowflake,
    SnowflakeGenerator, SnowflakeParseError,
};
