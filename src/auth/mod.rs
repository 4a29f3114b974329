//! Authentication: JWT issuing/verification, password hashing, middleware.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{create_token, verify_token, AuthError, Claims, JwtConfig};
pub use middleware::{auth_middleware, AuthState, AuthenticatedAccount};
pub use password::{hash_password, verify_password};
