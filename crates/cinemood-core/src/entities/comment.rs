//! Comment entity - a reply attached to a review

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub review_id: Snowflake,
    pub user_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(id: Snowflake, review_id: Snowflake, user_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            review_id,
            user_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Comment with the author's username resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "완전 공감합니다".to_string(),
        );
        assert_eq!(comment.review_id, Snowflake::new(10));
        assert_eq!(comment.user_id, Snowflake::new(100));
    }
}
