//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Comment, CommentWithAuthor, DiaryEntry, EmotionMovieCount, Movie, Review, ReviewWithMeta, User,
};
use crate::error::DomainError;
use crate::value_objects::{Emotion, RankingOrder, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields (nickname, genres, actors, countries, image)
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Hard delete a user and all owned content
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;

    /// List catalog movie IDs the user has marked as favorites
    async fn favorite_movie_ids(&self, user_id: Snowflake) -> RepoResult<Vec<i64>>;

    /// Add a movie to favorites. Returns false if it was already present.
    async fn add_favorite(&self, user_id: Snowflake, movie_id: i64) -> RepoResult<bool>;

    /// Remove a movie from favorites. Returns false if it was not present.
    async fn remove_favorite(&self, user_id: Snowflake, movie_id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Review>>;

    /// Find review by ID with author, like count, comment count, and the
    /// viewer's like state
    async fn find_with_meta(
        &self,
        id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Option<ReviewWithMeta>>;

    /// List reviews for a movie, newest first
    async fn find_by_movie(
        &self,
        movie_id: i64,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<ReviewWithMeta>>;

    /// List reviews written by a user, newest first
    async fn find_by_author(
        &self,
        author_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> RepoResult<Vec<ReviewWithMeta>>;

    /// Create a new review
    async fn create(&self, review: &Review) -> RepoResult<()>;

    /// Update title, content, rating, and emotion tags
    async fn update(&self, review: &Review) -> RepoResult<()>;

    /// Delete a review along with its likes and comments
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Record a like. Returns false if the user already liked the review.
    async fn add_like(&self, review_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Remove a like. Returns false if no like existed.
    async fn remove_like(&self, review_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Count likes on a review
    async fn count_likes(&self, review_id: Snowflake) -> RepoResult<i64>;

    /// Count reviews per movie carrying the given emotion tag, ordered and
    /// truncated in the database
    async fn count_by_emotion(
        &self,
        emotion: Emotion,
        order: RankingOrder,
        limit: i64,
    ) -> RepoResult<Vec<EmotionMovieCount>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments on a review, oldest first
    async fn find_by_review(&self, review_id: Snowflake) -> RepoResult<Vec<CommentWithAuthor>>;

    /// List comments written by a user, newest first
    async fn find_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<CommentWithAuthor>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Update comment content
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Movie Repository
// ============================================================================

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find a cached movie by catalog ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Movie>>;

    /// List cached movies by descending popularity
    async fn list(&self, limit: i64, offset: i64) -> RepoResult<Vec<Movie>>;

    /// Insert or refresh a cached movie record
    async fn upsert(&self, movie: &Movie) -> RepoResult<()>;

    /// Count cached movies
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Diary Repository
// ============================================================================

#[async_trait]
pub trait DiaryRepository: Send + Sync {
    /// Find diary entry by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<DiaryEntry>>;

    /// List a user's diary entries, newest first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<DiaryEntry>>;

    /// Create a new diary entry
    async fn create(&self, entry: &DiaryEntry) -> RepoResult<()>;

    /// Update emotion, content, and linked movie
    async fn update(&self, entry: &DiaryEntry) -> RepoResult<()>;

    /// Delete a diary entry
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
