//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.
//! Snowflakes travel as strings on the wire; catalog movie ids are plain
//! integers and use `Path<i64>` directly.

use cinemood_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with review_id
#[derive(Debug, serde::Deserialize)]
pub struct ReviewIdPath {
    pub review_id: String,
}

impl ReviewIdPath {
    /// Parse review_id as Snowflake
    pub fn review_id(&self) -> Result<Snowflake, ApiError> {
        self.review_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid review_id format"))
    }
}

/// Path parameters with comment_id
#[derive(Debug, serde::Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}

/// Path parameters with diary_id
#[derive(Debug, serde::Deserialize)]
pub struct DiaryIdPath {
    pub diary_id: String,
}

impl DiaryIdPath {
    /// Parse diary_id as Snowflake
    pub fn diary_id(&self) -> Result<Snowflake, ApiError> {
        self.diary_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid diary_id format"))
    }
}
