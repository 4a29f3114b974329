//! Withdrawal DTOs

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Withdrawal;

use super::common::Pagination;

/// Request body for submitting a withdrawal
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "amount": 5000.0,
    "withdrawal_account": "+254700000000",
    "account_name": "John Doe",
    "payment_method": "M-Pesa"
}))]
pub struct CreateWithdrawalRequest {
    /// Amount to withdraw, must be positive
    #[validate(range(exclusive_min = 0.0, message = "Amount must be greater than zero"))]
    pub amount: f64,
    /// Destination account (e.g. an M-Pesa phone number)
    #[validate(length(min = 1, message = "Withdrawal account is required"))]
    pub withdrawal_account: String,
    /// Name on the destination account
    #[validate(length(min = 1, message = "Account name is required"))]
    pub account_name: String,
    /// Defaults to the configured payment method when omitted
    pub payment_method: Option<String>,
}

/// Response for a submitted withdrawal
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "message": "Withdrawal request submitted successfully",
    "transaction_code": "W12345678",
    "withdrawal_id": 17
}))]
pub struct WithdrawalCreatedResponse {
    pub message: String,
    pub transaction_code: String,
    pub withdrawal_id: i64,
}

/// Query parameters for the withdrawal listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct WithdrawalQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Filter by status: `pending`, `processing`, `completed`, `failed`
    pub status: Option<String>,
}

/// One withdrawal row
#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalDto {
    pub id: i64,
    pub transaction_code: String,
    pub amount: f64,
    pub withdrawal_account: String,
    pub account_name: String,
    pub payment_method: String,
    pub status: String,
    pub withdrawal_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
}

impl From<Withdrawal> for WithdrawalDto {
    fn from(value: Withdrawal) -> Self {
        Self {
            id: value.id,
            transaction_code: value.transaction_code,
            amount: value.amount.to_f64().unwrap_or_default(),
            withdrawal_account: value.withdrawal_account,
            account_name: value.account_name,
            payment_method: value.payment_method,
            status: value.status.as_str().to_owned(),
            withdrawal_date: value.withdrawal_date,
            processed_date: value.processed_date,
        }
    }
}

/// Paginated withdrawal listing
#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalListResponse {
    pub withdrawals: Vec<WithdrawalDto>,
    pub pagination: Pagination,
}
