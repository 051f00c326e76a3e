//! Repository for the `user_roles` table.

use sqlx::PgPool;
use payout_core::types::DbId;

use crate::models::user_role::UserRole;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, role, created_at";

/// Provides role lookups. Roles are provisioned outside this service;
/// [`UserRoleRepo::assign`] exists for seeding and tests.
pub struct UserRoleRepo;

impl UserRoleRepo {
    /// Find the explicit role row for a user, if any.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_roles WHERE user_id = $1");
        sqlx::query_as::<_, UserRole>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Set a user's role, replacing any existing one.
    pub async fn assign(
        pool: &PgPool,
        user_id: DbId,
        role: &str,
    ) -> Result<UserRole, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_roles (user_id, role)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET role = EXCLUDED.role
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRole>(&query)
            .bind(user_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }
}
