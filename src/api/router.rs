//! API router with Swagger UI, rate limiting and auth middleware

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::SmartIpKeyExtractor;
use tower_governor::{GovernorError, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{
    auth, dashboard, devices, health, support, transactions, users, withdrawals, ApiState,
};
use crate::auth::middleware::{auth_middleware, AuthState};

/// Rate limit policy for `/api/*` routes.
///
/// The defaults allow a burst of 100 requests and replenish one slot every
/// 9 seconds, i.e. roughly 100 requests per 15-minute window per client
/// address.
#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub burst_size: u32,
    pub replenish_interval_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            burst_size: 100,
            replenish_interval_secs: 9,
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        users::get_user,
        devices::list_devices,
        devices::device_balance,
        transactions::list_transactions,
        withdrawals::create_withdrawal,
        withdrawals::list_withdrawals,
        support::create_ticket,
        support::list_tickets,
        dashboard::dashboard_stats,
    ),
    components(
        schemas(
            // Auth
            LoginRequest,
            LoginResponse,
            UserInfo,
            UserProfile,
            // Devices
            DeviceDto,
            BalanceResponse,
            // Transactions
            TransactionDto,
            TransactionListResponse,
            // Withdrawals
            CreateWithdrawalRequest,
            WithdrawalCreatedResponse,
            WithdrawalDto,
            WithdrawalListResponse,
            // Support
            CreateTicketRequest,
            TicketCreatedResponse,
            SupportTicketDto,
            TicketListResponse,
            // Dashboard / health / common
            dashboard::DashboardStatsResponse,
            health::HealthResponse,
            Pagination,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Authentication", description = "Login with username or email; returns a JWT Bearer token"),
        (name = "Users", description = "Account profiles"),
        (name = "Devices", description = "Registered devices and their accrued balances"),
        (name = "Transactions", description = "Payment history per device, filterable by date range"),
        (name = "Withdrawals", description = "Withdrawal requests; settlement happens outside this service"),
        (name = "Support", description = "Customer support tickets"),
        (name = "Dashboard", description = "Aggregate statistics for the signed-in account"),
    ),
    info(
        title = "PayTrack API",
        version = "1.0.0",
        description = "REST API for the PayTrack device and payment tracking application.

## Authentication

Obtain a token via `POST /api/login` and pass it on every protected route as
`Authorization: Bearer <token>`.

## Error format

Failing routes respond with `{\"error\": \"<message>\"}` and an appropriate
4xx/5xx status.

## Rate limiting

All `/api/*` routes share a per-client-address budget of 100 requests per
15-minute window.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn rate_limit_error(err: GovernorError) -> Response {
    match err {
        GovernorError::TooManyRequests { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "error": "Too many requests from this IP, please try again later"
            })),
        )
            .into_response(),
        GovernorError::UnableToExtractKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response(),
        GovernorError::Other { code, msg, .. } => {
            let body = Json(json!({ "error": msg.unwrap_or_else(|| "Internal server error".into()) }));
            (code, body).into_response()
        }
    }
}

/// Create the API router with all routes
pub fn create_api_router(state: ApiState, rate_limit: RateLimitSettings) -> Router {
    let auth_state = AuthState {
        jwt_config: state.jwt_config.clone(),
    };

    // 100-per-window policy keyed on the client address (peer address or
    // forwarded-for header)
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(rate_limit.replenish_interval_secs)
            .burst_size(rate_limit.burst_size)
            .finish()
            .expect("rate limit settings are non-zero"),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes
    let public_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/health", get(health::health_check));

    // Everything else requires a valid bearer token
    let protected_routes = Router::new()
        .route("/users/{id}", get(users::get_user))
        .route("/devices", get(devices::list_devices))
        .route("/devices/{id}/balance", get(devices::device_balance))
        .route("/transactions", get(transactions::list_transactions))
        .route(
            "/withdrawals",
            get(withdrawals::list_withdrawals).post(withdrawals::create_withdrawal),
        )
        .route(
            "/support",
            get(support::list_tickets).post(support::create_ticket),
        )
        .route("/dashboard/stats", get(dashboard::dashboard_stats))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    let api_routes = public_routes
        .merge(protected_routes)
        .layer(GovernorLayer::new(governor_conf).error_handler(rate_limit_error))
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
