//! Shared DTO pieces

use serde::Serialize;
use utoipa::ToSchema;

/// Pagination block echoed back in list responses
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({ "total": 57, "page": 1, "limit": 20 }))]
pub struct Pagination {
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}
