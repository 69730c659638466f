//! Diary handlers
//!
//! Emotion diary CRUD, always scoped to the authenticated user.

use axum::{
    extract::{Path, State},
    Json,
};
use cinemood_service::dto::{CreateDiaryRequest, DiaryResponse, UpdateDiaryRequest};
use cinemood_service::DiaryService;

use crate::extractors::{AuthUser, DiaryIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the authenticated user's diary entries
///
/// GET /diaries
pub async fn get_diaries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<DiaryResponse>>> {
    let service = DiaryService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}

/// Create a diary entry
///
/// POST /diaries
pub async fn create_diary(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateDiaryRequest>,
) -> ApiResult<Created<Json<DiaryResponse>>> {
    let service = DiaryService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a diary entry (author only)
///
/// PUT /diaries/:diary_id
/// PATCH /diaries/:diary_id
pub async fn update_diary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<DiaryIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateDiaryRequest>,
) -> ApiResult<Json<DiaryResponse>> {
    let diary_id = path.diary_id()?;
    let service = DiaryService::new(state.service_context());
    let response = service.update(auth.user_id, diary_id, request).await?;
    Ok(Json(response))
}

/// Delete a diary entry (author only)
///
/// DELETE /diaries/:diary_id
pub async fn delete_diary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<DiaryIdPath>,
) -> ApiResult<NoContent> {
    let diary_id = path.diary_id()?;
    let service = DiaryService::new(state.service_context());
    service.delete(auth.user_id, diary_id).await?;
    Ok(NoContent)
}
