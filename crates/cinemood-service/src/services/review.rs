//! Review service
//!
//! Review CRUD with author/admin permission checks and the like toggle.

use chrono::Utc;
use cinemood_core::{DomainError, Review, Snowflake, User};
use tracing::{info, instrument};

use crate::dto::{CreateReviewRequest, LikeToggleResponse, ReviewResponse, UpdateReviewRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List reviews for a movie, newest first
    #[instrument(skip(self))]
    pub async fn list_for_movie(
        &self,
        movie_id: i64,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<ReviewResponse>> {
        let reviews = self
            .ctx
            .review_repo()
            .find_by_movie(movie_id, viewer_id)
            .await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    /// Get a single review
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        review_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<ReviewResponse> {
        let review = self
            .ctx
            .review_repo()
            .find_with_meta(review_id, viewer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        Ok(ReviewResponse::from(review))
    }

    /// Create a review for a movie
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        movie_id: i64,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        if !Review::rating_in_range(request.rating) {
            return Err(DomainError::InvalidRating(request.rating).into());
        }

        let review_id = self.ctx.generate_id();
        let review = Review::new(
            review_id,
            author_id,
            movie_id,
            request.title,
            request.content,
            request.rating,
            request.emotion_tags,
        );

        self.ctx.review_repo().create(&review).await?;

        info!(review_id = %review_id, movie_id, "Review created");

        // Re-read through the meta query so counts and author come back resolved
        self.get(review_id, Some(author_id)).await
    }

    /// Update a review; only the author may edit
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: Snowflake,
        review_id: Snowflake,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let mut review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        if review.user_id != user_id {
            return Err(DomainError::NotReviewAuthor.into());
        }

        if let Some(rating) = request.rating {
            if !Review::rating_in_range(rating) {
                return Err(DomainError::InvalidRating(rating).into());
            }
            review.rating = rating;
        }
        if let Some(title) = request.title {
            review.title = title;
        }
        if let Some(content) = request.content {
            review.content = content;
        }
        if let Some(tags) = request.emotion_tags {
            review.emotion_tags = tags;
        }
        review.updated_at = Utc::now();

        self.ctx.review_repo().update(&review).await?;

        info!(review_id = %review_id, "Review updated");

        self.get(review_id, Some(user_id)).await
    }

    /// Delete a review; the author or an admin may delete
    #[instrument(skip(self, actor), fields(user_id = %actor.id))]
    pub async fn delete(&self, actor: &User, review_id: Snowflake) -> ServiceResult<()> {
        let review = self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", review_id.to_string()))?;

        if review.user_id != actor.id && !actor.is_admin() {
            return Err(DomainError::NotReviewAuthor.into());
        }

        self.ctx.review_repo().delete(review_id).await?;

        info!(review_id = %review_id, "Review deleted");

        Ok(())
    }

    /// Toggle the viewer's like on a review
    #[instrument(skip(self))]
    pub async fn toggle_like(
        &self,
        user_id: Snowflake,
        review_id: Snowflake,
    ) -> ServiceResult<LikeToggleResponse> {
        // Surface 404 before touching the likes table
        if self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Review", review_id.to_string()));
        }

        let inserted = self.ctx.review_repo().add_like(review_id, user_id).await?;
        let liked = if inserted {
            true
        } else {
            self.ctx
                .review_repo()
                .remove_like(review_id, user_id)
                .await?;
            false
        };

        let like_count = self.ctx.review_repo().count_likes(review_id).await?;

        info!(review_id = %review_id, liked, like_count, "Like toggled");

        Ok(LikeToggleResponse { liked, like_count })
    }
}
