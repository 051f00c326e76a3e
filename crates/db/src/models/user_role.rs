//! User role model.

use payout_core::error::CoreError;
use payout_core::roles::Role;
use payout_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_roles` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRole {
    pub user_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
}

impl UserRole {
    pub fn role(&self) -> Result<Role, CoreError> {
        self.role.parse()
    }
}
