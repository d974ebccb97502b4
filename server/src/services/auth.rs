//! Account registration and password authentication.
//!
//! DESIGN
//! ======
//! Passwords are stored as `sha256(salt || password)` with a per-user
//! random salt; both halves live on the user row. Authentication failures
//! collapse into one `InvalidCredentials` variant so responses do not leak
//! whether an email exists.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::session::bytes_to_hex;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid name")]
    InvalidName,
    #[error("invalid email")]
    InvalidEmail,
    #[error("password must be at least {MIN_PASSWORD_LEN} characters")]
    WeakPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Account row used by the auth routes.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

#[must_use]
pub fn verify_password(salt: &str, expected_hash: &str, password: &str) -> bool {
    hash_password(salt, password) == expected_hash
}

/// Create an account.
///
/// # Errors
///
/// Returns `EmailTaken` when the email is already registered, a validation
/// variant for malformed input, or a database error.
pub async fn register_user(pool: &PgPool, name: &str, email: &str, password: &str) -> Result<UserRow, AuthError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AuthError::InvalidName);
    }
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }

    let salt = generate_salt();
    let hash = hash_password(&salt, password);

    let result = sqlx::query(
        "INSERT INTO users (name, email, password_hash, password_salt)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(name)
    .bind(&email)
    .bind(&hash)
    .bind(&salt)
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => Ok(UserRow { id: row.get("id"), name: name.to_owned(), email }),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AuthError::EmailTaken),
        Err(e) => Err(AuthError::Db(e)),
    }
}

/// Check credentials and return the account on success.
///
/// # Errors
///
/// Returns `InvalidCredentials` for an unknown email or a wrong password,
/// or a database error.
pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<UserRow, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;

    let row = sqlx::query("SELECT id, name, password_hash, password_salt FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let salt: String = row.get("password_salt");
    let hash: String = row.get("password_hash");
    if !verify_password(&salt, &hash, password) {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(UserRow { id: row.get("id"), name: row.get("name"), email })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
