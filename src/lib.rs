//! # PayTrack API
//!
//! HTTP API for a device and payment tracking application backed by MySQL.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities and repository traits
//! - **infrastructure**: SeaORM entities, migrations and repository impls
//! - **api**: REST API with Swagger documentation
//! - **auth**: JWT authentication and password hashing
//! - **config**: TOML configuration with env overrides
//! - **shared**: HTTP error taxonomy and pagination helpers

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{
    init_database, spawn_connect_with_retry, DatabaseConfig, DbHandle, SeaOrmRepositoryProvider,
};

// Re-export API router
pub use api::{create_api_router, ApiState, RateLimitSettings};
