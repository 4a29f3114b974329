use chrono::{DateTime, Utc};
use rand::Rng;

/// A customer support ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportTicket {
    pub id: i64,
    pub ticket_number: String,
    pub account_no: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: String,
    pub subject: String,
    pub message: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input for opening a new ticket.
#[derive(Debug, Clone)]
pub struct NewSupportTicket {
    pub ticket_number: String,
    pub account_no: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub category: String,
    pub subject: String,
    pub message: String,
    pub priority: String,
}

/// Generate a ticket number: `TKT` followed by 8 digits.
///
/// Same scheme as withdrawal codes (timestamp low digits + random tail),
/// backed by a UNIQUE index on `ticket_number`.
pub fn generate_ticket_number() -> String {
    let ts = Utc::now().timestamp_millis().rem_euclid(100_000);
    let noise = rand::thread_rng().gen_range(0..1000);
    format!("TKT{ts:05}{noise:03}")
}
