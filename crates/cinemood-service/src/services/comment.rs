//! Comment service
//!
//! Comments on reviews, with author/admin permission checks.

use chrono::Utc;
use cinemood_core::{Comment, CommentWithAuthor, DomainError, Snowflake, User};
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments under a review, oldest first
    #[instrument(skip(self))]
    pub async fn list_for_review(
        &self,
        review_id: Snowflake,
    ) -> ServiceResult<Vec<CommentResponse>> {
        // Surface 404 for comments on a deleted review
        if self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Review", review_id.to_string()));
        }

        let comments = self.ctx.comment_repo().find_by_review(review_id).await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Create a comment under a review
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author: &User,
        review_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Review", review_id.to_string()));
        }

        let comment_id = self.ctx.generate_id();
        let comment = Comment::new(comment_id, review_id, author.id, request.content);

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment_id, review_id = %review_id, "Comment created");

        Ok(CommentResponse::from(CommentWithAuthor {
            comment,
            author_username: author.username.clone(),
        }))
    }

    /// Update a comment; only the author may edit
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        author: &User,
        comment_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if comment.user_id != author.id {
            return Err(DomainError::NotCommentAuthor.into());
        }

        comment.content = request.content;
        comment.updated_at = Utc::now();

        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment updated");

        Ok(CommentResponse::from(CommentWithAuthor {
            comment,
            author_username: author.username.clone(),
        }))
    }

    /// Delete a comment; the author or an admin may delete
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn delete(&self, actor: &User, comment_id: Snowflake) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if comment.user_id != actor.id && !actor.is_admin() {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }
}
