use chrono::{DateTime, Utc};

/// A registered account holder.
///
/// The account is the tenant identifier: devices, transactions, withdrawals
/// and support tickets all carry `account_no` — the stringified account id.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Account {
    /// The value stored in `account_no` columns of owned rows.
    pub fn account_no(&self) -> String {
        self.id.to_string()
    }
}
