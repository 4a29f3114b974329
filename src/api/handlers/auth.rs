//! Login handler

use axum::{extract::State, Json};

use crate::api::dto::{LoginRequest, LoginResponse, UserInfo};
use crate::auth::{create_token, verify_password};
use crate::shared::ApiError;

use super::ApiState;

/// Log in with username or email
///
/// Returns a JWT token valid for the configured lifetime (24 hours by
/// default). Pass it as `Authorization: Bearer <token>` on protected routes.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Unknown user, wrong password or disabled account")
    )
)]
pub async fn login(
    State(state): State<ApiState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let account = state
        .repos
        .accounts()
        .find_by_login(&request.username)
        .await?;

    let Some(account) = account else {
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    };

    if !account.is_active {
        return Err(ApiError::Unauthorized("Account is disabled".into()));
    }

    let password_valid =
        verify_password(&request.password, &account.password_hash).unwrap_or(false);
    if !password_valid {
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    // Best effort; a failed stamp must not block the login
    if let Err(err) = state.repos.accounts().touch_last_login(account.id).await {
        tracing::warn!(account_id = account.id, error = %err, "failed to stamp last login");
    }

    let token = create_token(
        account.id,
        &account.username,
        &account.email,
        &state.jwt_config,
    )
    .map_err(|e| ApiError::internal(format!("token signing failed: {e}")))?;

    metrics::counter!("logins_total").increment(1);
    tracing::info!(account_id = account.id, username = %account.username, "account logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: account.id,
            username: account.username,
            email: account.email,
        },
    }))
}
