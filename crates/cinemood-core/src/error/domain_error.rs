//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Review not found: {0}")]
    ReviewNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Movie not found in local cache: {0}")]
    MovieNotFound(i64),

    #[error("Diary entry not found: {0}")]
    DiaryEntryNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unrecognized emotion tag: {0}")]
    InvalidEmotion(String),

    #[error("Rating out of range: {0} (expected 0.0-5.0)")]
    InvalidRating(f64),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the review author")]
    NotReviewAuthor,

    #[error("Not the comment author")]
    NotCommentAuthor,

    #[error("Not the diary entry author")]
    NotDiaryEntryAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already in use")]
    UsernameAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::MovieNotFound(_) => "UNKNOWN_MOVIE",
            Self::DiaryEntryNotFound(_) => "UNKNOWN_DIARY_ENTRY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmotion(_) => "INVALID_EMOTION",
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authorization
            Self::NotReviewAuthor => "NOT_REVIEW_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotDiaryEntryAuthor => "NOT_DIARY_ENTRY_AUTHOR",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::CommentNotFound(_)
                | Self::MovieNotFound(_)
                | Self::DiaryEntryNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmotion(_)
                | Self::InvalidRating(_)
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotReviewAuthor | Self::NotCommentAuthor | Self::NotDiaryEntryAuthor
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::InvalidEmotion("boredom".to_string());
        assert_eq!(err.code(), "INVALID_EMOTION");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ReviewNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::MovieNotFound(603).is_not_found());
        assert!(!DomainError::UsernameAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotReviewAuthor.is_authorization());
        assert!(DomainError::NotCommentAuthor.is_authorization());
        assert!(!DomainError::UserNotFound(Snowflake::new(1)).is_authorization());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::InvalidEmotion("x".to_string()).is_validation());
        assert!(DomainError::InvalidRating(9.0).is_validation());
        assert!(!DomainError::NotReviewAuthor.is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ReviewNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Review not found: 123");

        let err = DomainError::InvalidRating(7.5);
        assert_eq!(err.to_string(), "Rating out of range: 7.5 (expected 0.0-5.0)");
    }
}
