pub mod types;

pub use types::errors::ApiError;
pub use types::pagination::PaginatedResult;
