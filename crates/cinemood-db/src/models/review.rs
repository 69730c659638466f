//! Review database models

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub title: String,
    pub content: String,
    pub rating: f64,
    pub emotion_tags: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review row joined with author and engagement counts
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithMetaModel {
    pub id: i64,
    pub user_id: i64,
    pub movie_id: i64,
    pub title: String,
    pub content: String,
    pub rating: f64,
    pub emotion_tags: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub like_count: i64,
    pub comment_count: i64,
    pub liked_by_viewer: bool,
}

/// Per-movie review count for one emotion (GROUP BY result)
#[derive(Debug, Clone, FromRow)]
pub struct EmotionCountModel {
    pub movie_id: i64,
    pub review_count: i64,
}
