//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use cinemood_core::entities::{Comment, CommentWithAuthor};
use cinemood_core::traits::{CommentRepository, RepoResult};
use cinemood_core::value_objects::Snowflake;

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::{comment_not_found, map_db_error};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, review_id, user_id, content, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_review(&self, review_id: Snowflake) -> RepoResult<Vec<CommentWithAuthor>> {
        let results = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.review_id, c.user_id, c.content, c.created_at, c.updated_at,
                   u.username AS author_username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.review_id = $1
            ORDER BY c.created_at
            ",
        )
        .bind(review_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<CommentWithAuthor>> {
        let results = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.review_id, c.user_id, c.content, c.created_at, c.updated_at,
                   u.username AS author_username
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.user_id = $1
            ORDER BY c.created_at DESC
            ",
        )
        .bind(author_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO comments (id, review_id, user_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.review_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments SET content = $2, updated_at = NOW() WHERE id = $1
            ",
        )
        .bind(comment.id.into_inner())
        .bind(&comment.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM comments WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
