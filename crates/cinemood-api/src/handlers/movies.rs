//! Movie handlers
//!
//! Catalog passthrough endpoints, the local metadata cache, the emotion
//! ranking, and per-movie review listings.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cinemood_service::dto::{
    CachedMovieListResponse, CachedMovieResponse, CatalogMovieResponse, CreateReviewRequest,
    EmotionRankingResponse, MovieListResponse, RecommendRequest, RecommendResponse,
    ReviewResponse,
};
use cinemood_service::{MovieService, ReviewService};
use serde::Deserialize;

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Current popular movies from the external catalog
///
/// GET /movies/popular
pub async fn get_popular(State(state): State<AppState>) -> ApiResult<Json<MovieListResponse>> {
    let service = MovieService::new(state.service_context());
    let response = service.popular().await?;
    Ok(Json(response))
}

/// Placeholder recommendation
///
/// POST /movies/recommend
pub async fn recommend(
    State(state): State<AppState>,
    request: Option<Json<RecommendRequest>>,
) -> ApiResult<Json<RecommendResponse>> {
    let service = MovieService::new(state.service_context());
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let response = service.recommend(request).await?;
    Ok(Json(response))
}

/// Query parameters for the cached movie listing
#[derive(Debug, Deserialize)]
pub struct CachedListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// List cached movies by popularity
///
/// GET /movies/db
pub async fn get_cached_movies(
    State(state): State<AppState>,
    Query(query): Query<CachedListQuery>,
) -> ApiResult<Json<CachedMovieListResponse>> {
    let service = MovieService::new(state.service_context());
    let response = service
        .cached_list(query.limit.unwrap_or(20), query.offset.unwrap_or(0))
        .await?;
    Ok(Json(response))
}

/// Get one movie from the local cache
///
/// GET /movies/db/:movie_id
pub async fn get_cached_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> ApiResult<Json<CachedMovieResponse>> {
    let service = MovieService::new(state.service_context());
    let response = service.cached_detail(movie_id).await?;
    Ok(Json(response))
}

/// Query parameters for the emotion ranking
#[derive(Debug, Deserialize)]
pub struct EmotionRankingQuery {
    pub emotion: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
}

/// Rank movies by emotion-tagged review counts
///
/// GET /movies/emotion-ranking
pub async fn get_emotion_ranking(
    State(state): State<AppState>,
    Query(query): Query<EmotionRankingQuery>,
) -> ApiResult<Json<EmotionRankingResponse>> {
    let emotion = query
        .emotion
        .ok_or_else(|| ApiError::invalid_query("emotion query parameter is required"))?;

    let service = MovieService::new(state.service_context());
    let response = service
        .emotion_ranking(&emotion, query.order.as_deref(), query.limit)
        .await?;
    Ok(Json(response))
}

/// Full detail for one movie from the external catalog
///
/// GET /movies/:movie_id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> ApiResult<Json<CatalogMovieResponse>> {
    let service = MovieService::new(state.service_context());
    let response = service.detail(movie_id).await?;
    Ok(Json(response))
}

/// List reviews for a movie
///
/// GET /movies/:movie_id/reviews
pub async fn get_movie_reviews(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(movie_id): Path<i64>,
) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let response = service.list_for_movie(movie_id, viewer.user_id()).await?;
    Ok(Json(response))
}

/// Create a review for a movie
///
/// POST /movies/:movie_id/reviews
pub async fn create_movie_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(movie_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Json<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let response = service.create(auth.user_id, movie_id, request).await?;
    Ok(Created(Json(response)))
}
