//! Device listing and balance handlers

use axum::extract::{Path, State};
use axum::{Extension, Json};
use rust_decimal::prelude::ToPrimitive;

use crate::api::dto::{BalanceResponse, DeviceDto};
use crate::auth::AuthenticatedAccount;
use crate::shared::ApiError;

use super::ApiState;

/// List the caller's devices with balances
///
/// Each device carries `balance`, the sum of all transaction amounts recorded
/// against it.
#[utoipa::path(
    get,
    path = "/api/devices",
    tag = "Devices",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Devices owned by the caller", body = Vec<DeviceDto>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_devices(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
) -> Result<Json<Vec<DeviceDto>>, ApiError> {
    let devices = state
        .repos
        .devices()
        .list_for_account(&account.account_no())
        .await?;

    Ok(Json(devices.into_iter().map(DeviceDto::from).collect()))
}

/// Balance of one device
///
/// Scoped to the caller's account; a device id that belongs to someone else
/// reports a zero balance rather than leaking data.
#[utoipa::path(
    get,
    path = "/api/devices/{id}/balance",
    tag = "Devices",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Device id")),
    responses(
        (status = 200, description = "Current balance", body = BalanceResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn device_balance(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(id): Path<i64>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state
        .repos
        .devices()
        .balance(&account.account_no(), id)
        .await?;

    Ok(Json(BalanceResponse {
        balance: balance.to_f64().unwrap_or_default(),
    }))
}
