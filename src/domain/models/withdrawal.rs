use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;

/// Settlement state of a withdrawal request.
///
/// New requests always start as `Pending`; the settlement process (outside
/// this service) moves them forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// A recorded withdrawal request.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub id: i64,
    pub account_no: String,
    pub transaction_code: String,
    pub amount: Decimal,
    pub withdrawal_account: String,
    pub account_name: String,
    pub payment_method: String,
    pub status: WithdrawalStatus,
    pub withdrawal_date: DateTime<Utc>,
    pub processed_date: Option<DateTime<Utc>>,
}

/// Input for recording a new withdrawal request.
#[derive(Debug, Clone)]
pub struct NewWithdrawal {
    pub account_no: String,
    pub transaction_code: String,
    pub amount: Decimal,
    pub withdrawal_account: String,
    pub account_name: String,
    pub payment_method: String,
}

/// Generate a withdrawal transaction code: `W` followed by 8 digits.
///
/// Five low-order digits of the millisecond timestamp plus three random
/// digits. Within the 8-digit space collisions are still possible, so the
/// `transaction_code` column carries a UNIQUE index and callers regenerate
/// on conflict.
pub fn generate_transaction_code() -> String {
    let ts = Utc::now().timestamp_millis().rem_euclid(100_000);
    let noise = rand::thread_rng().gen_range(0..1000);
    format!("W{ts:05}{noise:03}")
}
