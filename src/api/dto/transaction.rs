//! Transaction listing DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DateRange, TransactionWithDevice};

use super::common::Pagination;

/// Query parameters for the transaction listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TransactionQuery {
    /// Page number, starting from 1
    pub page: Option<u64>,
    /// Items per page (max 100)
    pub limit: Option<u64>,
    /// Inclusive lower bound, `YYYY-MM-DD`
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound, `YYYY-MM-DD`
    pub end_date: Option<NaiveDate>,
}

impl TransactionQuery {
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// One transaction row, joined with its device name
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionDto {
    pub id: i64,
    pub device_id: i64,
    pub device_name: Option<String>,
    pub transaction_id: String,
    pub amount: f64,
    pub running_balance: f64,
    pub payer_name: String,
    pub phone_number: String,
    pub game_status: String,
    pub transaction_date: DateTime<Utc>,
}

impl From<TransactionWithDevice> for TransactionDto {
    fn from(value: TransactionWithDevice) -> Self {
        let tx = value.transaction;
        Self {
            id: tx.id,
            device_id: tx.device_id,
            device_name: value.device_name,
            transaction_id: tx.transaction_id,
            amount: tx.amount.to_f64().unwrap_or_default(),
            running_balance: tx.running_balance.to_f64().unwrap_or_default(),
            payer_name: tx.payer_name,
            phone_number: tx.phone_number,
            game_status: tx.game_status.as_str().to_owned(),
            transaction_date: tx.transaction_date,
        }
    }
}

/// Paginated transaction listing
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionDto>,
    pub pagination: Pagination,
}
