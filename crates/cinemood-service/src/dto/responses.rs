//! Response DTOs for API endpoints
//!
//! Snowflake identifiers serialize as strings so JavaScript clients never
//! lose precision. Emotion tags serialize as `{ code, label }` pairs so
//! clients get the Korean display label alongside the wire code.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use cinemood_core::{Emotion, Genre, RankingOrder, Snowflake};

// ============================================================================
// Generic Responses
// ============================================================================

/// Simple acknowledgement response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with token pair
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Minimal identity of the authenticated user
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: Snowflake,
    pub username: String,
    pub nickname: Option<String>,
}

// ============================================================================
// User Responses
// ============================================================================

/// Full taste profile of a user
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Snowflake,
    pub username: String,
    pub nickname: Option<String>,
    pub favorite_genres: Vec<String>,
    pub favorite_actors: Option<String>,
    pub preferred_countries: Vec<String>,
    pub profile_image: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a favorite-movie toggle
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteToggleResponse {
    pub movie_id: i64,
    /// Whether the movie is favorited after the toggle
    pub favorited: bool,
}

/// A user's favorite movies: all ids, plus metadata for cached ones
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteMoviesResponse {
    pub movie_ids: Vec<i64>,
    pub movies: Vec<CachedMovieResponse>,
}

// ============================================================================
// Review Responses
// ============================================================================

/// An emotion tag with its display label
#[derive(Debug, Clone, Serialize)]
pub struct EmotionTagResponse {
    pub code: &'static str,
    pub label: &'static str,
}

impl From<Emotion> for EmotionTagResponse {
    fn from(emotion: Emotion) -> Self {
        Self {
            code: emotion.as_str(),
            label: emotion.display_name(),
        }
    }
}

/// Author identity embedded in reviews and comments
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: Snowflake,
    pub username: String,
}

/// Review with its display metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: Snowflake,
    pub movie_id: i64,
    pub author: AuthorResponse,
    pub title: String,
    pub content: String,
    pub rating: f64,
    pub emotion_tags: Vec<EmotionTagResponse>,
    pub like_count: i64,
    pub comment_count: i64,
    /// Whether the requesting viewer has liked this review
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a review like toggle
#[derive(Debug, Clone, Serialize)]
pub struct LikeToggleResponse {
    /// Whether the review is liked by the viewer after the toggle
    pub liked: bool,
    pub like_count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with its author resolved
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: Snowflake,
    pub review_id: Snowflake,
    pub author: AuthorResponse,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Movie Responses
// ============================================================================

/// Movie as delivered straight from the external catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogMovieResponse {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<i32>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub popularity: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<Genre>,
    pub original_language: String,
}

/// A page of catalog movies
#[derive(Debug, Clone, Serialize)]
pub struct MovieListResponse {
    pub results: Vec<CatalogMovieResponse>,
}

/// Recommendation response: the requested emotion echoed back with the
/// current popular list
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub emotion: Option<String>,
    pub results: Vec<CatalogMovieResponse>,
}

/// Movie from the local metadata cache
#[derive(Debug, Clone, Serialize)]
pub struct CachedMovieResponse {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub popularity: f64,
    pub genres: Vec<Genre>,
    pub original_language: String,
}

/// A page of cached movies
#[derive(Debug, Clone, Serialize)]
pub struct CachedMovieListResponse {
    pub results: Vec<CachedMovieResponse>,
    pub total: i64,
}

/// One entry of the emotion ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankedMovieResponse {
    /// Number of reviews tagged with the requested emotion
    pub review_count: i64,
    #[serde(flatten)]
    pub movie: CatalogMovieResponse,
}

/// Emotion ranking response
#[derive(Debug, Clone, Serialize)]
pub struct EmotionRankingResponse {
    pub emotion: EmotionTagResponse,
    pub order: RankingOrder,
    /// Number of ranked movies returned
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub results: Vec<RankedMovieResponse>,
}

// ============================================================================
// Diary Responses
// ============================================================================

/// Diary entry response
#[derive(Debug, Clone, Serialize)]
pub struct DiaryResponse {
    pub id: Snowflake,
    pub emotion: EmotionTagResponse,
    pub content: String,
    pub movie_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Sync Responses
// ============================================================================

/// Outcome of one catalog sync run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Pages of the popular listing requested
    pub pages_requested: u32,
    /// Movies seen across all fetched pages
    pub fetched: u64,
    /// Movies written to the local cache
    pub upserted: u64,
    /// Movies skipped because the detail lookup failed
    pub failed: u64,
    /// Total rows in the local cache after the run
    pub total_cached: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
