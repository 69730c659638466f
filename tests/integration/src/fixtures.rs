//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub password2: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("moviefan{suffix}"),
            password: "filmbuff123".to_string(),
            password2: "filmbuff123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Minimal user identity
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub nickname: Option<String>,
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub nickname: Option<String>,
    pub favorite_genres: Vec<String>,
    pub favorite_actors: Option<String>,
    pub preferred_countries: Vec<String>,
    pub profile_image: Option<String>,
    pub is_admin: bool,
}

/// Profile update request (partial)
#[derive(Debug, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_actors: Option<String>,
}

/// Create review request
#[derive(Debug, Serialize)]
pub struct CreateReviewRequest {
    pub title: String,
    pub content: String,
    pub rating: f64,
    pub emotion_tags: Vec<String>,
}

impl CreateReviewRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Review {suffix}"),
            content: "Worth a rewatch".to_string(),
            rating: 4.5,
            emotion_tags: vec!["joy".to_string(), "excitement".to_string()],
        }
    }
}

/// Emotion tag with display label
#[derive(Debug, Deserialize)]
pub struct EmotionTag {
    pub code: String,
    pub label: String,
}

/// Review response
#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: String,
    pub movie_id: i64,
    pub author: AuthorResponse,
    pub title: String,
    pub content: String,
    pub rating: f64,
    pub emotion_tags: Vec<EmotionTag>,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_liked: bool,
}

/// Author identity
#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
}

/// Like toggle response
#[derive(Debug, Deserialize)]
pub struct LikeToggleResponse {
    pub liked: bool,
    pub like_count: i64,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub review_id: String,
    pub author: AuthorResponse,
    pub content: String,
}

/// Favorite toggle request
#[derive(Debug, Serialize)]
pub struct FavoriteToggleRequest {
    pub movie_id: i64,
}

/// Favorite toggle response
#[derive(Debug, Deserialize)]
pub struct FavoriteToggleResponse {
    pub movie_id: i64,
    pub favorited: bool,
}

/// Favorite movies response
#[derive(Debug, Deserialize)]
pub struct FavoriteMoviesResponse {
    pub movie_ids: Vec<i64>,
    pub movies: Vec<serde_json::Value>,
}

/// Create diary entry request
#[derive(Debug, Serialize)]
pub struct CreateDiaryRequest {
    pub emotion: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,
}

impl CreateDiaryRequest {
    pub fn calm() -> Self {
        Self {
            emotion: "calm".to_string(),
            content: "In the mood for something quiet".to_string(),
            movie_id: None,
        }
    }
}

/// Diary entry response
#[derive(Debug, Deserialize)]
pub struct DiaryResponse {
    pub id: String,
    pub emotion: EmotionTag,
    pub content: String,
    pub movie_id: Option<i64>,
}

/// Emotion ranking response
#[derive(Debug, Deserialize)]
pub struct EmotionRankingResponse {
    pub emotion: EmotionTag,
    pub order: String,
    pub count: usize,
    pub message: Option<String>,
    pub results: Vec<serde_json::Value>,
}

/// Message acknowledgement response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
