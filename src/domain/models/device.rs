use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A payment-tracking device registered to an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: i64,
    pub account_no: String,
    pub device_name: String,
    pub serial_number: String,
    pub location: String,
    pub status: String,
    pub registered_at: DateTime<Utc>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

/// Device together with its accrued balance (SUM of transaction amounts).
#[derive(Debug, Clone)]
pub struct DeviceWithBalance {
    pub device: Device,
    pub balance: Decimal,
}
