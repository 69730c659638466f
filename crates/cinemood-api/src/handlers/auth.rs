//! Authentication handlers
//!
//! Endpoints for signup, login, token refresh, password change, logout,
//! and account deletion.

use axum::{extract::State, Json};
use cinemood_service::dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, MessageResponse, RefreshTokenRequest,
    SignupRequest,
};
use cinemood_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/token/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Change the authenticated user's password
///
/// POST /auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.change_password(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Logout acknowledgement
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.logout(auth.user_id);
    Ok(Json(response))
}

/// Delete the authenticated user's account
///
/// POST /auth/delete
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.delete_account(auth.user_id).await?;
    Ok(Json(response))
}
