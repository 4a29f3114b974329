//! JWT token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiration_hours: i64, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
            issuer: issuer.into(),
        }
    }
}

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Account email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl Claims {
    pub fn new(account_id: i64, username: &str, email: &str, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(config.expiration_hours);

        Self {
            sub: account_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }
}

/// Create a JWT token for an account
pub fn create_token(
    account_id: i64,
    username: &str,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims::new(account_id, username, email, config);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(AuthError::from)?;

    Ok(token_data.claims)
}

/// Why token verification failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::SignatureInvalid,
            _ => Self::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig::new("unit-test-secret", 24, "paytrack")
    }

    #[test]
    fn create_and_verify_token() {
        let config = test_config();
        let token = create_token(42, "jdoe", "jdoe@example.com", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "jdoe");
        assert_eq!(claims.email, "jdoe@example.com");
        assert_eq!(claims.iss, "paytrack");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn malformed_token_rejected() {
        let config = test_config();
        assert_eq!(verify_token("not-a-token", &config), Err(AuthError::Malformed));
    }

    #[test]
    fn token_signed_with_other_secret_rejected() {
        let config = test_config();
        let other = JwtConfig::new("some-other-secret", 24, "paytrack");
        let token = create_token(42, "jdoe", "jdoe@example.com", &other).unwrap();

        assert_eq!(
            verify_token(&token, &config),
            Err(AuthError::SignatureInvalid)
        );
    }

    #[test]
    fn expired_token_rejected() {
        let config = JwtConfig::new("unit-test-secret", -1, "paytrack");
        let token = create_token(42, "jdoe", "jdoe@example.com", &config).unwrap();

        assert_eq!(verify_token(&token, &config), Err(AuthError::Expired));
    }

    #[test]
    fn wrong_issuer_rejected() {
        let config = test_config();
        let other = JwtConfig::new("unit-test-secret", 24, "someone-else");
        let token = create_token(42, "jdoe", "jdoe@example.com", &other).unwrap();

        assert!(verify_token(&token, &config).is_err());
    }
}
