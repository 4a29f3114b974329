//! Login and account DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Account;

/// Login request body
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({ "username": "jdoe", "password": "secret123" }))]
pub struct LoginRequest {
    /// Username or email address
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
    "user": { "id": 1, "username": "jdoe", "email": "jdoe@example.com" }
}))]
pub struct LoginResponse {
    /// JWT access token. Pass as `Authorization: Bearer <token>`.
    pub token: String,
    pub user: UserInfo,
}

/// Identity echoed back on login
#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Account profile returned by the user lookup route
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: String,
}

impl From<Account> for UserProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            display_name: account.display_name,
        }
    }
}
