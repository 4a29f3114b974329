//! Withdrawal handlers

use axum::extract::{Query, State};
use axum::{Extension, Json};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use validator::Validate;

use crate::api::dto::{
    CreateWithdrawalRequest, Pagination, WithdrawalCreatedResponse, WithdrawalDto,
    WithdrawalListResponse, WithdrawalQuery,
};
use crate::auth::AuthenticatedAccount;
use crate::domain::{
    generate_transaction_code, DomainError, NewWithdrawal, WithdrawalStatus,
};
use crate::shared::types::pagination::clamp_pagination;
use crate::shared::ApiError;

use super::ApiState;

/// Transaction codes live in an 8-digit space; a duplicate is regenerated
/// this many times before giving up.
const CODE_RETRY_LIMIT: usize = 5;

/// Submit a withdrawal request
///
/// The request is recorded atomically with status `pending` and a unique
/// transaction code of the form `W` + 8 digits.
#[utoipa::path(
    post,
    path = "/api/withdrawals",
    tag = "Withdrawals",
    security(("bearer_auth" = [])),
    request_body = CreateWithdrawalRequest,
    responses(
        (status = 200, description = "Withdrawal recorded", body = WithdrawalCreatedResponse),
        (status = 400, description = "Invalid amount or missing field"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_withdrawal(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Json(request): Json<CreateWithdrawalRequest>,
) -> Result<Json<WithdrawalCreatedResponse>, ApiError> {
    if let Err(errors) = request.validate() {
        return Err(ApiError::BadRequest(first_validation_message(&errors)));
    }

    let amount = Decimal::from_f64(request.amount)
        .filter(|a| a.is_sign_positive() && !a.is_zero())
        .ok_or_else(|| ApiError::BadRequest("Amount must be greater than zero".into()))?;

    let payment_method = request
        .payment_method
        .clone()
        .unwrap_or_else(|| state.default_payment_method.clone());

    let mut last_err = None;
    for _ in 0..CODE_RETRY_LIMIT {
        let transaction_code = generate_transaction_code();
        let new = NewWithdrawal {
            account_no: account.account_no(),
            transaction_code: transaction_code.clone(),
            amount,
            withdrawal_account: request.withdrawal_account.clone(),
            account_name: request.account_name.clone(),
            payment_method: payment_method.clone(),
        };

        match state.repos.withdrawals().create(new).await {
            Ok(withdrawal_id) => {
                metrics::counter!("withdrawals_created_total").increment(1);
                tracing::info!(
                    account_id = account.account_id,
                    withdrawal_id,
                    %transaction_code,
                    "withdrawal request recorded"
                );
                return Ok(Json(WithdrawalCreatedResponse {
                    message: "Withdrawal request submitted successfully".into(),
                    transaction_code,
                    withdrawal_id,
                }));
            }
            // Code collision, roll a fresh one
            Err(DomainError::Conflict(msg)) => {
                tracing::debug!(%transaction_code, "transaction code collision, regenerating");
                last_err = Some(DomainError::Conflict(msg));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(last_err
        .map(ApiError::from)
        .unwrap_or_else(|| ApiError::internal("withdrawal code generation exhausted")))
}

/// List the caller's withdrawals
#[utoipa::path(
    get,
    path = "/api/withdrawals",
    tag = "Withdrawals",
    security(("bearer_auth" = [])),
    params(WithdrawalQuery),
    responses(
        (status = 200, description = "Paginated withdrawals", body = WithdrawalListResponse),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_withdrawals(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Query(query): Query<WithdrawalQuery>,
) -> Result<Json<WithdrawalListResponse>, ApiError> {
    let (page, limit) = clamp_pagination(query.page, query.limit);

    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => Some(
            WithdrawalStatus::parse(raw)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown status: {raw}")))?,
        ),
    };

    let result = state
        .repos
        .withdrawals()
        .list_for_account(&account.account_no(), status, page, limit)
        .await?;

    Ok(Json(WithdrawalListResponse {
        withdrawals: result.items.into_iter().map(WithdrawalDto::from).collect(),
        pagination: Pagination {
            total: result.total,
            page: result.page,
            limit: result.limit,
        },
    }))
}

/// First human-readable message out of a `validator` error set.
pub(crate) fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_zero_amount() {
        let request = CreateWithdrawalRequest {
            amount: 0.0,
            withdrawal_account: "+254700000000".into(),
            account_name: "John Doe".into(),
            payment_method: None,
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors),
            "Amount must be greater than zero"
        );
    }

    #[test]
    fn validation_rejects_empty_destination() {
        let request = CreateWithdrawalRequest {
            amount: 100.0,
            withdrawal_account: String::new(),
            account_name: "John Doe".into(),
            payment_method: None,
        };
        assert!(request.validate().is_err());
    }
}
