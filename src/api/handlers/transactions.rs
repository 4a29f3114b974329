//! Transaction listing handler

use axum::extract::{Query, State};
use axum::{Extension, Json};

use crate::api::dto::{Pagination, TransactionDto, TransactionListResponse, TransactionQuery};
use crate::auth::AuthenticatedAccount;
use crate::shared::types::pagination::clamp_pagination;
use crate::shared::ApiError;

use super::ApiState;

/// List the caller's transactions
///
/// Newest first. `start_date` and `end_date` bound the listing to an
/// inclusive calendar-day range; the echoed `total` honours the same filters.
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transactions",
    security(("bearer_auth" = [])),
    params(TransactionQuery),
    responses(
        (status = 200, description = "Paginated transactions", body = TransactionListResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_transactions(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Query(query): Query<TransactionQuery>,
) -> Result<Json<TransactionListResponse>, ApiError> {
    let (page, limit) = clamp_pagination(query.page, query.limit);

    let result = state
        .repos
        .transactions()
        .list_for_account(&account.account_no(), query.date_range(), page, limit)
        .await?;

    Ok(Json(TransactionListResponse {
        transactions: result.items.into_iter().map(TransactionDto::from).collect(),
        pagination: Pagination {
            total: result.total,
            page: result.page,
            limit: result.limit,
        },
    }))
}
