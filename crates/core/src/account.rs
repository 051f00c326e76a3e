use crate::types::DbId;

/// Login credentials for a provisioned user.
///
/// Carries the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: DbId,
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}
