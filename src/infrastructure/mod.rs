pub mod database;

pub use database::{init_database, spawn_connect_with_retry, DatabaseConfig, DbHandle};
pub use database::repositories::SeaOrmRepositoryProvider;
