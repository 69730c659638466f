//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, comments, diaries, health, movies, reviews, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(movie_routes())
        .merge(review_routes())
        .merge(comment_routes())
        .merge(diary_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/token/refresh", post(auth::refresh_token))
        .route("/auth/change-password", post(auth::change_password))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/delete", post(auth::delete_account))
}

/// Current-user routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/profile", get(users::get_profile))
        .route("/users/@me/profile", put(users::update_profile))
        .route("/users/@me/profile", patch(users::update_profile))
        .route("/users/@me/reviews", get(users::get_my_reviews))
        .route("/users/@me/comments", get(users::get_my_comments))
        .route("/users/@me/favorite-movies", get(users::get_favorite_movies))
        .route(
            "/users/@me/favorite-movies/toggle",
            post(users::toggle_favorite_movie),
        )
}

/// Movie routes
fn movie_routes() -> Router<AppState> {
    Router::new()
        // Catalog passthrough
        .route("/movies/popular", get(movies::get_popular))
        .route("/movies/recommend", post(movies::recommend))
        // Local metadata cache
        .route("/movies/db", get(movies::get_cached_movies))
        .route("/movies/db/:movie_id", get(movies::get_cached_movie))
        // Emotion ranking
        .route("/movies/emotion-ranking", get(movies::get_emotion_ranking))
        // Catalog detail (after the static segments above)
        .route("/movies/:movie_id", get(movies::get_movie))
        // Per-movie reviews
        .route("/movies/:movie_id/reviews", get(movies::get_movie_reviews))
        .route(
            "/movies/:movie_id/reviews",
            post(movies::create_movie_review),
        )
}

/// Review routes
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews/:review_id", put(reviews::update_review))
        .route("/reviews/:review_id", patch(reviews::update_review))
        .route("/reviews/:review_id", delete(reviews::delete_review))
        .route("/reviews/:review_id/like", post(reviews::toggle_like))
        .route(
            "/reviews/:review_id/comments",
            get(reviews::get_review_comments),
        )
        .route(
            "/reviews/:review_id/comments",
            post(reviews::create_review_comment),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/:comment_id", put(comments::update_comment))
        .route("/comments/:comment_id", patch(comments::update_comment))
        .route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Diary routes
fn diary_routes() -> Router<AppState> {
    Router::new()
        .route("/diaries", get(diaries::get_diaries))
        .route("/diaries", post(diaries::create_diary))
        .route("/diaries/:diary_id", put(diaries::update_diary))
        .route("/diaries/:diary_id", patch(diaries::update_diary))
        .route("/diaries/:diary_id", delete(diaries::delete_diary))
}
