//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::jwt::{verify_token, Claims, JwtConfig};

/// State for the authentication middleware
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Account identity carried in request extensions after authentication
#[derive(Clone, Debug)]
pub struct AuthenticatedAccount {
    pub account_id: i64,
    pub username: String,
    pub email: String,
}

impl AuthenticatedAccount {
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        Some(Self {
            account_id: claims.sub.parse().ok()?,
            username: claims.username.clone(),
            email: claims.email.clone(),
        })
    }

    /// The `account_no` that scopes all data queries.
    pub fn account_no(&self) -> String {
        self.account_id.to_string()
    }
}

/// Extract token from Authorization header
fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware - requires a valid token
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return missing_token_response();
    };

    let Some(token) = extract_token(&auth_header) else {
        return missing_token_response();
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            let Some(account) = AuthenticatedAccount::from_claims(&claims) else {
                return invalid_token_response();
            };
            request.extensions_mut().insert(account);
            next.run(request).await
        }
        Err(err) => {
            metrics::counter!("auth_rejections_total").increment(1);
            tracing::debug!(error = %err, "rejected bearer token");
            invalid_token_response()
        }
    }
}

fn missing_token_response() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Authentication required" })),
    )
        .into_response()
}

fn invalid_token_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "Invalid token" })),
    )
        .into_response()
}
