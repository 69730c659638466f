//! Authentication service
//!
//! Handles signup, login, token refresh, password change, and account
//! deletion. Tokens are stateless JWTs, so logout is an acknowledgement
//! only and clients discard their tokens.

use cinemood_common::auth::{hash_password, validate_password_strength, verify_password};
use cinemood_common::AppError;
use cinemood_core::{Snowflake, User};
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, ChangePasswordRequest, CurrentUserResponse, LoginRequest, MessageResponse,
    RefreshTokenRequest, SignupRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        if request.password != request.password2 {
            return Err(ServiceError::validation("Passwords do not match"));
        }

        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let user = User::new(user_id, request.username);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered successfully");

        self.issue_tokens(&user)
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.verify_credentials(&user, &request.password).await?;

        info!(user_id = %user.id, "User logged in");

        self.issue_tokens(&user)
    }

    /// Exchange a refresh token for a fresh token pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        // Token may outlive the account; re-check the user still exists
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        self.issue_tokens(&user)
    }

    /// Change the authenticated user's password
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: Snowflake,
        request: ChangePasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        if request.new_password != request.new_password2 {
            return Err(ServiceError::validation("Passwords do not match"));
        }

        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let valid = verify_password(&request.old_password, &current_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !valid {
            warn!(user_id = %user_id, "Password change failed: wrong old password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        self.ctx
            .user_repo()
            .update_password(user_id, &new_hash)
            .await?;

        info!(user_id = %user_id, "Password changed");

        Ok(MessageResponse::new("Password changed successfully"))
    }

    /// Logout acknowledgement; clients discard their tokens
    #[instrument(skip(self))]
    pub fn logout(&self, user_id: Snowflake) -> MessageResponse {
        info!(user_id = %user_id, "User logged out");
        MessageResponse::new("Logged out")
    }

    /// Delete the authenticated user's account (owned content cascades)
    #[instrument(skip(self))]
    pub async fn delete_account(&self, user_id: Snowflake) -> ServiceResult<MessageResponse> {
        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, "Account deleted");

        Ok(MessageResponse::new("Account deleted"))
    }

    async fn verify_credentials(&self, user: &User, password: &str) -> ServiceResult<()> {
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let valid = verify_password(password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;
        if !valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        Ok(())
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            token_type: token_pair.token_type,
            expires_in: token_pair.expires_in,
            user: CurrentUserResponse::from(user),
        })
    }
}
