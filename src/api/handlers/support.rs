//! Support ticket handlers

use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::dto::{
    CreateTicketRequest, Pagination, SupportTicketDto, TicketCreatedResponse, TicketListResponse,
};
use crate::auth::AuthenticatedAccount;
use crate::domain::{generate_ticket_number, DomainError, NewSupportTicket};
use crate::shared::types::pagination::clamp_pagination;
use crate::shared::ApiError;

use super::withdrawals::first_validation_message;
use super::ApiState;

const NUMBER_RETRY_LIMIT: usize = 5;

/// Query parameters for the ticket listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TicketQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Filter by ticket status (e.g. `open`, `closed`)
    pub status: Option<String>,
}

/// Open a support ticket
#[utoipa::path(
    post,
    path = "/api/support",
    tag = "Support",
    security(("bearer_auth" = [])),
    request_body = CreateTicketRequest,
    responses(
        (status = 200, description = "Ticket created", body = TicketCreatedResponse),
        (status = 400, description = "Missing or invalid field"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_ticket(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<TicketCreatedResponse>, ApiError> {
    if let Err(errors) = request.validate() {
        return Err(ApiError::BadRequest(first_validation_message(&errors)));
    }

    let priority = request
        .priority
        .clone()
        .unwrap_or_else(|| "medium".to_owned());

    let mut last_err = None;
    for _ in 0..NUMBER_RETRY_LIMIT {
        let ticket_number = generate_ticket_number();
        let new = NewSupportTicket {
            ticket_number: ticket_number.clone(),
            account_no: account.account_no(),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            category: request.category.clone(),
            subject: request.subject.clone(),
            message: request.message.clone(),
            priority: priority.clone(),
        };

        match state.repos.support_tickets().create(new).await {
            Ok(ticket_id) => {
                tracing::info!(
                    account_id = account.account_id,
                    ticket_id,
                    %ticket_number,
                    "support ticket opened"
                );
                return Ok(Json(TicketCreatedResponse {
                    message: "Support ticket submitted successfully".into(),
                    ticket_number,
                    ticket_id,
                }));
            }
            Err(DomainError::Conflict(msg)) => {
                tracing::debug!(%ticket_number, "ticket number collision, regenerating");
                last_err = Some(DomainError::Conflict(msg));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(last_err
        .map(ApiError::from)
        .unwrap_or_else(|| ApiError::internal("ticket number generation exhausted")))
}

/// List the caller's support tickets
#[utoipa::path(
    get,
    path = "/api/support",
    tag = "Support",
    security(("bearer_auth" = [])),
    params(TicketQuery),
    responses(
        (status = 200, description = "Paginated tickets", body = TicketListResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_tickets(
    State(state): State<ApiState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Query(query): Query<TicketQuery>,
) -> Result<Json<TicketListResponse>, ApiError> {
    let (page, limit) = clamp_pagination(query.page, query.limit);

    let result = state
        .repos
        .support_tickets()
        .list_for_account(&account.account_no(), query.status.clone(), page, limit)
        .await?;

    Ok(Json(TicketListResponse {
        tickets: result.items.into_iter().map(SupportTicketDto::from).collect(),
        pagination: Pagination {
            total: result.total,
            page: result.page,
            limit: result.limit,
        },
    }))
}
