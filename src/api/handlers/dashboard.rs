//! Dashboard statistics handler

use axum::extract::State;
use axum::{Extension, Json};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::AuthenticatedAccount;
use crate::shared::ApiError;

use super::ApiState;

/// Aggregate figures for the caller's account
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "total_devices": 4,
    "total_earnings": 182340.25,
    "total_games": 917,
    "pending_withdrawals": 2
}))]
pub struct DashboardStatsResponse {
    pub total_devices: u64,
    pub total_earnings: f64,
    pub total_games: u64,
    pub pending_withdrawals: u64,
}

/// Dashboard statistics
///
/// `total_earnings` and `total_games` cover played games only;
/// `pending_withdrawals` counts requests not yet settled.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Aggregate stats", body = DashboardStatsResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn dashboard_stats(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
) -> Result<Json<DashboardStatsResponse>, ApiError> {
    let account_no = account.account_no();

    let total_devices = state.repos.devices().count_for_account(&account_no).await?;
    let (total_earnings, total_games) = state
        .repos
        .transactions()
        .earnings_for_account(&account_no)
        .await?;
    let pending_withdrawals = state.repos.withdrawals().count_pending(&account_no).await?;

    Ok(Json(DashboardStatsResponse {
        total_devices,
        total_earnings: total_earnings.to_f64().unwrap_or_default(),
        total_games,
        pending_withdrawals,
    }))
}
