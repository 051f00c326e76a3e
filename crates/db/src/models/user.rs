//! User entity model and DTOs.

use payout_core::account::Account;
use payout_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for Account {
    fn from(user: User) -> Self {
        Account {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
        }
    }
}

/// DTO for provisioning a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}
