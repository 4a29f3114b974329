//! Password hashing
//!
//! Account passwords are stored as bcrypt hashes; login compares the
//! submitted password against the stored hash, never the plain text.

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Check a submitted password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}
