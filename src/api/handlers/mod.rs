//! HTTP handlers, one module per resource

pub mod auth;
pub mod dashboard;
pub mod devices;
pub mod health;
pub mod support;
pub mod transactions;
pub mod users;
pub mod withdrawals;

use std::sync::Arc;

use crate::auth::JwtConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::DbHandle;

/// Shared state for all API handlers.
///
/// Persistence goes through the injected `RepositoryProvider`; tests swap in
/// an in-memory implementation.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
    pub default_payment_method: String,
    pub environment: String,
    pub db: DbHandle,
}
