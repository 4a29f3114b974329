use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Outcome of a paid game on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Played,
    NotPlayed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Played => "played",
            Self::NotPlayed => "not_played",
        }
    }
}

/// A payment received on a device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceTransaction {
    pub id: i64,
    pub account_no: String,
    pub device_id: i64,
    pub transaction_id: String,
    pub amount: Decimal,
    pub running_balance: Decimal,
    pub payer_name: String,
    pub phone_number: String,
    pub game_status: GameStatus,
    pub transaction_date: DateTime<Utc>,
}

/// Transaction joined with the name of the device it happened on.
#[derive(Debug, Clone)]
pub struct TransactionWithDevice {
    pub transaction: DeviceTransaction,
    pub device_name: Option<String>,
}

/// Optional inclusive date range filter for transaction listings.
///
/// Dates are calendar days; `start` begins at 00:00:00 and `end` runs
/// through 23:59:59 of that day (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn start_bound(&self) -> Option<DateTime<Utc>> {
        self.start
            .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
    }

    pub fn end_bound(&self) -> Option<DateTime<Utc>> {
        self.end
            .map(|d| d.and_hms_opt(23, 59, 59).expect("valid time").and_utc())
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.start_bound() {
            if at < start {
                return false;
            }
        }
        if let Some(end) = self.end_bound() {
            if at > end {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2025, 6, 1),
            end: NaiveDate::from_ymd_opt(2025, 6, 30),
        };

        let first = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let last = Utc.with_ymd_and_hms(2025, 6, 30, 23, 59, 59).unwrap();
        let before = Utc.with_ymd_and_hms(2025, 5, 31, 23, 59, 59).unwrap();

        assert!(range.contains(first));
        assert!(range.contains(last));
        assert!(!range.contains(before));
    }
}
