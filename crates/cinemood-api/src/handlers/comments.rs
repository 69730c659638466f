//! Comment handlers
//!
//! Edits and deletion of individual comments.

use axum::{
    extract::{Path, State},
    Json,
};
use cinemood_service::dto::{CommentResponse, UpdateCommentRequest};
use cinemood_service::{CommentService, UserService};

use crate::extractors::{AuthUser, CommentIdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Update a comment (author only)
///
/// PUT /comments/:comment_id
/// PATCH /comments/:comment_id
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let comment_id = path.comment_id()?;
    let author = UserService::new(state.service_context())
        .get_user(auth.user_id)
        .await?;
    let service = CommentService::new(state.service_context());
    let response = service.update(&author, comment_id, request).await?;
    Ok(Json(response))
}

/// Delete a comment (author or admin)
///
/// DELETE /comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;
    let actor = UserService::new(state.service_context())
        .get_user(auth.user_id)
        .await?;
    let service = CommentService::new(state.service_context());
    service.delete(&actor, comment_id).await?;
    Ok(NoContent)
}
