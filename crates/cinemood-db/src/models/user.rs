//! User database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub nickname: Option<String>,
    pub favorite_genres: Json<Vec<String>>,
    pub favorite_actors: Option<String>,
    pub preferred_countries: Json<Vec<String>>,
    pub profile_image: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
