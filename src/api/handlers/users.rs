//! Account profile handler

use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::UserProfile;
use crate::domain::DomainError;
use crate::shared::ApiError;

use super::ApiState;

/// Fetch an account profile by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account profile", body = UserProfile),
        (status = 404, description = "No account with that id")
    )
)]
pub async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<UserProfile>, ApiError> {
    let account = state
        .repos
        .accounts()
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound { entity: "User" })?;

    Ok(Json(UserProfile::from(account)))
}
