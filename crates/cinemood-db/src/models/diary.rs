//! Diary entry database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for diary_entries table
#[derive(Debug, Clone, FromRow)]
pub struct DiaryEntryModel {
    pub id: i64,
    pub user_id: i64,
    pub emotion: String,
    pub content: String,
    pub movie_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}
