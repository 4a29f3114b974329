//! REST API: router, DTOs and handlers

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ApiState;
pub use router::{create_api_router, ApiDoc, RateLimitSettings};
