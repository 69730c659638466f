//! Review entity - a user's review of a catalog movie

use chrono::{DateTime, Utc};

use crate::value_objects::{Emotion, Snowflake};

/// Lowest accepted rating
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating
pub const MAX_RATING: f64 = 5.0;

/// Review entity
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Snowflake,
    pub user_id: Snowflake,
    /// External catalog movie identifier
    pub movie_id: i64,
    pub title: String,
    pub content: String,
    pub rating: f64,
    pub emotion_tags: Vec<Emotion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Create a new Review
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        movie_id: i64,
        title: String,
        content: String,
        rating: f64,
        emotion_tags: Vec<Emotion>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            movie_id,
            title,
            content,
            rating,
            emotion_tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a rating value is within the accepted range
    pub fn rating_in_range(rating: f64) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }
}

/// Review with display metadata resolved by the storage layer
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWithMeta {
    pub review: Review,
    pub author_username: String,
    pub like_count: i64,
    pub comment_count: i64,
    /// Whether the requesting viewer (if any) has liked this review
    pub liked_by_viewer: bool,
}

/// Per-movie review count for one emotion tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionMovieCount {
    pub movie_id: i64,
    pub review_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review(tags: Vec<Emotion>) -> Review {
        Review::new(
            Snowflake::new(1),
            Snowflake::new(100),
            603,
            "인생 영화".to_string(),
            "다시 봐도 좋다".to_string(),
            4.5,
            tags,
        )
    }

    #[test]
    fn test_new_review_keeps_tags() {
        let review = sample_review(vec![Emotion::Joy, Emotion::Excitement]);
        assert_eq!(review.emotion_tags, vec![Emotion::Joy, Emotion::Excitement]);
    }

    #[test]
    fn test_rating_in_range() {
        assert!(Review::rating_in_range(0.0));
        assert!(Review::rating_in_range(5.0));
        assert!(!Review::rating_in_range(-0.5));
        assert!(!Review::rating_in_range(5.5));
    }
}
