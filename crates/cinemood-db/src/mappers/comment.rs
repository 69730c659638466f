//! Comment entity <-> model mappers

use cinemood_core::entities::{Comment, CommentWithAuthor};
use cinemood_core::value_objects::Snowflake;

use crate::models::{CommentModel, CommentWithAuthorModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            review_id: Snowflake::new(model.review_id),
            user_id: Snowflake::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert CommentWithAuthorModel to CommentWithAuthor entity
impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentWithAuthor {
            comment: Comment {
                id: Snowflake::new(model.id),
                review_id: Snowflake::new(model.review_id),
                user_id: Snowflake::new(model.user_id),
                content: model.content,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            author_username: model.author_username,
        }
    }
}
