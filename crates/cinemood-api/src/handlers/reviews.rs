//! Review handlers
//!
//! Review edits, deletion, the like toggle, and comment listings under
//! a review.

use axum::{
    extract::{Path, State},
    Json,
};
use cinemood_service::dto::{
    CommentResponse, CreateCommentRequest, LikeToggleResponse, ReviewResponse,
    UpdateReviewRequest,
};
use cinemood_service::{CommentService, ReviewService, UserService};

use crate::extractors::{AuthUser, ReviewIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Update a review (author only)
///
/// PUT /reviews/:review_id
/// PATCH /reviews/:review_id
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReviewIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let review_id = path.review_id()?;
    let service = ReviewService::new(state.service_context());
    let response = service.update(auth.user_id, review_id, request).await?;
    Ok(Json(response))
}

/// Delete a review (author or admin)
///
/// DELETE /reviews/:review_id
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReviewIdPath>,
) -> ApiResult<NoContent> {
    let review_id = path.review_id()?;
    let actor = UserService::new(state.service_context())
        .get_user(auth.user_id)
        .await?;
    let service = ReviewService::new(state.service_context());
    service.delete(&actor, review_id).await?;
    Ok(NoContent)
}

/// Toggle the viewer's like on a review
///
/// POST /reviews/:review_id/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReviewIdPath>,
) -> ApiResult<Json<LikeToggleResponse>> {
    let review_id = path.review_id()?;
    let service = ReviewService::new(state.service_context());
    let response = service.toggle_like(auth.user_id, review_id).await?;
    Ok(Json(response))
}

/// List comments under a review, oldest first
///
/// GET /reviews/:review_id/comments
pub async fn get_review_comments(
    State(state): State<AppState>,
    Path(path): Path<ReviewIdPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let review_id = path.review_id()?;
    let service = CommentService::new(state.service_context());
    let response = service.list_for_review(review_id).await?;
    Ok(Json(response))
}

/// Create a comment under a review
///
/// POST /reviews/:review_id/comments
pub async fn create_review_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ReviewIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let review_id = path.review_id()?;
    let author = UserService::new(state.service_context())
        .get_user(auth.user_id)
        .await?;
    let service = CommentService::new(state.service_context());
    let response = service.create(&author, review_id, request).await?;
    Ok(Created(Json(response)))
}
