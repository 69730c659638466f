//! Movie database model

use chrono::{DateTime, NaiveDate, Utc};
use cinemood_core::Genre;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for movies table (cached catalog metadata)
#[derive(Debug, Clone, FromRow)]
pub struct MovieModel {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub popularity: f64,
    pub genres: Json<Vec<Genre>>,
    pub original_language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
