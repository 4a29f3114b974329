//! Device DTOs

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DeviceWithBalance;

/// A device with its accrued balance
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "id": 3,
    "device_name": "Arcade Unit 3",
    "serial_number": "SN-00012345",
    "location": "Nairobi CBD",
    "status": "active",
    "balance": 12500.50,
    "registered_at": "2025-02-10T08:30:00Z",
    "last_activity_at": "2025-06-01T17:45:12Z"
}))]
pub struct DeviceDto {
    pub id: i64,
    pub device_name: String,
    pub serial_number: String,
    pub location: String,
    pub status: String,
    pub balance: f64,
    pub registered_at: DateTime<Utc>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl From<DeviceWithBalance> for DeviceDto {
    fn from(value: DeviceWithBalance) -> Self {
        Self {
            id: value.device.id,
            device_name: value.device.device_name,
            serial_number: value.device.serial_number,
            location: value.device.location,
            status: value.device.status,
            balance: value.balance.to_f64().unwrap_or_default(),
            registered_at: value.device.registered_at,
            last_activity_at: value.device.last_activity_at,
        }
    }
}

/// Balance of a single device
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({ "balance": 12500.50 }))]
pub struct BalanceResponse {
    pub balance: f64,
}
