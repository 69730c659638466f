//! Current-user handlers
//!
//! Everything under /users/@me: identity, profile, own content listings,
//! and the favorite-movie toggle.

use axum::{extract::State, Json};
use cinemood_service::dto::{
    CommentResponse, CurrentUserResponse, FavoriteMoviesResponse, FavoriteToggleRequest,
    FavoriteToggleResponse, ProfileResponse, ReviewResponse, UpdateProfileRequest,
};
use cinemood_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated user's identity
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
///
/// GET /users/@me/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Partially update the authenticated user's profile
///
/// PUT /users/@me/profile
/// PATCH /users/@me/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// List the authenticated user's reviews
///
/// GET /users/@me/reviews
pub async fn get_my_reviews(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.my_reviews(auth.user_id).await?;
    Ok(Json(response))
}

/// List the authenticated user's comments
///
/// GET /users/@me/comments
pub async fn get_my_comments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.my_comments(auth.user_id).await?;
    Ok(Json(response))
}

/// List the authenticated user's favorite movies
///
/// GET /users/@me/favorite-movies
pub async fn get_favorite_movies(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<FavoriteMoviesResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.favorite_movies(auth.user_id).await?;
    Ok(Json(response))
}

/// Toggle a movie in the authenticated user's favorites
///
/// POST /users/@me/favorite-movies/toggle
pub async fn toggle_favorite_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<FavoriteToggleRequest>,
) -> ApiResult<Json<FavoriteToggleResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.toggle_favorite(auth.user_id, request).await?;
    Ok(Json(response))
}
