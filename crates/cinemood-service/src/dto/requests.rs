//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and most implement `Validate`
//! for input validation. Emotion fields deserialize straight into the
//! closed `Emotion` enum, so unknown labels are rejected at the boundary.

use cinemood_core::Emotion;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 150, message = "Username must be 3-150 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Password confirmation, must match `password`
    pub password2: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub old_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: String,

    /// New password confirmation, must match `new_password`
    pub new_password2: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Profile update request (partial; absent fields are left unchanged)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "Nickname must be at most 100 characters"))]
    pub nickname: Option<String>,

    pub favorite_genres: Option<Vec<String>>,

    /// Comma-separated free text
    pub favorite_actors: Option<String>,

    pub preferred_countries: Option<Vec<String>>,

    pub profile_image: Option<String>,
}

/// Favorite movie toggle request
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteToggleRequest {
    pub movie_id: i64,
}

// ============================================================================
// Review Requests
// ============================================================================

/// Create review request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0.0 and 5.0"))]
    pub rating: f64,

    #[serde(default)]
    pub emotion_tags: Vec<Emotion>,
}

/// Update review request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: Option<String>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0.0 and 5.0"))]
    pub rating: Option<f64>,

    pub emotion_tags: Option<Vec<Emotion>>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Movie Requests
// ============================================================================

/// Recommendation request (placeholder behavior: echoes the emotion back
/// alongside the popular list)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendRequest {
    pub emotion: Option<String>,
}

// ============================================================================
// Diary Requests
// ============================================================================

/// Create diary entry request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDiaryRequest {
    pub emotion: Emotion,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    pub movie_id: Option<i64>,
}

/// Update diary entry request (partial; `movie_id` absent = unchanged)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDiaryRequest {
    pub emotion: Option<Emotion>,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: Option<String>,

    pub movie_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_signup_request_validation() {
        let request = SignupRequest {
            username: "ab".to_string(),
            password: "moviefan123".to_string(),
            password2: "moviefan123".to_string(),
        };
        assert!(request.validate().is_err());

        let request = SignupRequest {
            username: "moviefan".to_string(),
            password: "moviefan123".to_string(),
            password2: "moviefan123".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_review_rating_range() {
        let request = CreateReviewRequest {
            title: "인생 영화".to_string(),
            content: "최고".to_string(),
            rating: 5.5,
            emotion_tags: vec![],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_emotion_tags_reject_unknown_label() {
        let json = r#"{"title": "t", "content": "c", "rating": 4.0, "emotion_tags": ["boredom"]}"#;
        let result: Result<CreateReviewRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_emotion_tags_accept_known_labels() {
        let json = r#"{"title": "t", "content": "c", "rating": 4.0, "emotion_tags": ["joy", "calm"]}"#;
        let request: CreateReviewRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.emotion_tags, vec![Emotion::Joy, Emotion::Calm]);
    }
}
