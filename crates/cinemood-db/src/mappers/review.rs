//! Review entity <-> model mappers

use cinemood_core::entities::{EmotionMovieCount, Review, ReviewWithMeta};
use cinemood_core::value_objects::{Emotion, Snowflake};

use crate::models::{EmotionCountModel, ReviewModel, ReviewWithMetaModel};

/// Parse stored emotion codes. The write path only accepts the closed
/// vocabulary, so anything unparseable here is stale data and is dropped.
fn parse_emotion_tags(tags: Vec<String>) -> Vec<Emotion> {
    tags.into_iter().filter_map(|s| s.parse().ok()).collect()
}

/// Convert ReviewModel to Review entity
impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            movie_id: model.movie_id,
            title: model.title,
            content: model.content,
            rating: model.rating,
            emotion_tags: parse_emotion_tags(model.emotion_tags.0),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert ReviewWithMetaModel to ReviewWithMeta entity
impl From<ReviewWithMetaModel> for ReviewWithMeta {
    fn from(model: ReviewWithMetaModel) -> Self {
        ReviewWithMeta {
            review: Review {
                id: Snowflake::new(model.id),
                user_id: Snowflake::new(model.user_id),
                movie_id: model.movie_id,
                title: model.title,
                content: model.content,
                rating: model.rating,
                emotion_tags: parse_emotion_tags(model.emotion_tags.0),
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            author_username: model.author_username,
            like_count: model.like_count,
            comment_count: model.comment_count,
            liked_by_viewer: model.liked_by_viewer,
        }
    }
}

/// Convert EmotionCountModel to EmotionMovieCount entity
impl From<EmotionCountModel> for EmotionMovieCount {
    fn from(model: EmotionCountModel) -> Self {
        EmotionMovieCount {
            movie_id: model.movie_id,
            review_count: model.review_count,
        }
    }
}

/// Serialize emotion tags for JSONB storage
pub fn emotion_tags_to_json(tags: &[Emotion]) -> serde_json::Value {
    serde_json::Value::Array(
        tags.iter()
            .map(|e| serde_json::Value::String(e.as_str().to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_emotion_tags_drops_unknown() {
        let tags = vec![
            "joy".to_string(),
            "what".to_string(),
            "calm".to_string(),
        ];
        let parsed = parse_emotion_tags(tags);
        assert_eq!(parsed, vec![Emotion::Joy, Emotion::Calm]);
    }

    #[test]
    fn test_emotion_tags_to_json() {
        let json = emotion_tags_to_json(&[Emotion::Joy, Emotion::Sadness]);
        assert_eq!(json, serde_json::json!(["joy", "sadness"]));
    }
}
