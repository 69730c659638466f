//! Diary entry entity - a dated emotion journal record

use chrono::{DateTime, Utc};

use crate::value_objects::{Emotion, Snowflake};

/// Emotion diary entry, optionally linked to a catalog movie
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryEntry {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub emotion: Emotion,
    pub content: String,
    pub movie_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl DiaryEntry {
    /// Create a new DiaryEntry
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        emotion: Emotion,
        content: String,
        movie_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            user_id,
            emotion,
            content,
            movie_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diary_entry_creation() {
        let entry = DiaryEntry::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Emotion::Calm,
            "오늘은 잔잔한 영화가 보고 싶다".to_string(),
            Some(603),
        );
        assert_eq!(entry.emotion, Emotion::Calm);
        assert_eq!(entry.movie_id, Some(603));
    }
}
