//! Support ticket DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::SupportTicket;

use super::common::Pagination;

/// Request body for opening a support ticket
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "John Doe",
    "email": "jdoe@example.com",
    "phone": "+254700000000",
    "category": "payments",
    "subject": "Missing payout",
    "message": "My withdrawal from last week has not arrived.",
    "priority": "high"
}))]
pub struct CreateTicketRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Defaults to `medium` when omitted
    pub priority: Option<String>,
}

/// Response for a created ticket
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "message": "Support ticket submitted successfully",
    "ticket_number": "TKT12345678",
    "ticket_id": 4
}))]
pub struct TicketCreatedResponse {
    pub message: String,
    pub ticket_number: String,
    pub ticket_id: i64,
}

/// One support ticket row
#[derive(Debug, Serialize, ToSchema)]
pub struct SupportTicketDto {
    pub id: i64,
    pub ticket_number: String,
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

impl From<SupportTicket> for SupportTicketDto {
    fn from(value: SupportTicket) -> Self {
        Self {
            id: value.id,
            ticket_number: value.ticket_number,
            name: value.name,
            email: value.email,
            phone: value.phone,
            category: value.category,
            subject: value.subject,
            message: value.message,
            priority: value.priority,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

/// Paginated ticket listing
#[derive(Debug, Serialize, ToSchema)]
pub struct TicketListResponse {
    pub tickets: Vec<SupportTicketDto>,
    pub pagination: Pagination,
}
