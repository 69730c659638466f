//! User service
//!
//! Profile reads and partial updates, the user's own content listings,
//! and the favorite-movie toggle.

use chrono::Utc;
use cinemood_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CachedMovieResponse, CommentResponse, CurrentUserResponse, FavoriteMoviesResponse,
    FavoriteToggleRequest, FavoriteToggleResponse, ProfileResponse, ReviewResponse,
    UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the user entity behind an authenticated id
    ///
    /// Used by callers that need the entity itself, e.g. for admin checks.
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<cinemood_core::User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Get the authenticated user's identity
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Get the authenticated user's full taste profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Snowflake) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(ProfileResponse::from(&user))
    }

    /// Partially update the authenticated user's profile
    ///
    /// Absent fields are left unchanged.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(nickname) = request.nickname {
            user.nickname = if nickname.is_empty() {
                None
            } else {
                Some(nickname)
            };
        }
        if let Some(genres) = request.favorite_genres {
            user.favorite_genres = genres;
        }
        if let Some(actors) = request.favorite_actors {
            user.favorite_actors = if actors.is_empty() {
                None
            } else {
                Some(actors)
            };
        }
        if let Some(countries) = request.preferred_countries {
            user.preferred_countries = countries;
        }
        if let Some(image) = request.profile_image {
            user.profile_image = if image.is_empty() { None } else { Some(image) };
        }
        user.updated_at = Utc::now();

        self.ctx.user_repo().update_profile(&user).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(ProfileResponse::from(&user))
    }

    /// List the authenticated user's reviews, newest first
    #[instrument(skip(self))]
    pub async fn my_reviews(&self, user_id: Snowflake) -> ServiceResult<Vec<ReviewResponse>> {
        let reviews = self
            .ctx
            .review_repo()
            .find_by_author(user_id, Some(user_id))
            .await?;

        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    /// List the authenticated user's comments, newest first
    #[instrument(skip(self))]
    pub async fn my_comments(&self, user_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_author(user_id).await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// List the authenticated user's favorite movies
    ///
    /// Returns every favorited id; metadata is attached only for movies
    /// present in the local cache.
    #[instrument(skip(self))]
    pub async fn favorite_movies(&self, user_id: Snowflake) -> ServiceResult<FavoriteMoviesResponse> {
        let movie_ids = self.ctx.user_repo().favorite_movie_ids(user_id).await?;

        let mut movies = Vec::with_capacity(movie_ids.len());
        for movie_id in &movie_ids {
            if let Some(movie) = self.ctx.movie_repo().find_by_id(*movie_id).await? {
                movies.push(CachedMovieResponse::from(movie));
            }
        }

        Ok(FavoriteMoviesResponse { movie_ids, movies })
    }

    /// Toggle a movie in the authenticated user's favorites
    #[instrument(skip(self, request), fields(movie_id = request.movie_id))]
    pub async fn toggle_favorite(
        &self,
        user_id: Snowflake,
        request: FavoriteToggleRequest,
    ) -> ServiceResult<FavoriteToggleResponse> {
        let movie_id = request.movie_id;

        let inserted = self.ctx.user_repo().add_favorite(user_id, movie_id).await?;
        let favorited = if inserted {
            true
        } else {
            // Already present, so this toggle removes it
            self.ctx
                .user_repo()
                .remove_favorite(user_id, movie_id)
                .await?;
            false
        };

        info!(user_id = %user_id, movie_id, favorited, "Favorite toggled");

        Ok(FavoriteToggleResponse {
            movie_id,
            favorited,
        })
    }
}
