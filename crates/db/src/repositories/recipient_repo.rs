//! Repository for the `recipients` table and the `payout_report` view.

use sqlx::PgPool;
use payout_core::types::{DbId, Timestamp};

use crate::models::recipient::{CreateRecipient, PayoutReportRecord, RecipientRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, roll_no, name, address, status, paid_at, updated_by, \
                       created_at, updated_at";

/// Columns of the `payout_report` view.
const REPORT_COLUMNS: &str = "roll_no, name, address, status, paid_at, agent_email";

/// Provides lookup, status updates and report reads for recipients.
pub struct RecipientRepo;

impl RecipientRepo {
    /// Insert a new unpaid recipient, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRecipient,
    ) -> Result<RecipientRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipients (roll_no, name, address)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecipientRow>(&query)
            .bind(input.roll_no.as_str())
            .bind(&input.name)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a recipient by normalized roll number (exact match).
    pub async fn find_by_roll_no(
        pool: &PgPool,
        roll_no: &str,
    ) -> Result<Option<RecipientRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipients WHERE roll_no = $1");
        sqlx::query_as::<_, RecipientRow>(&query)
            .bind(roll_no)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite `status`, `paid_at` and `updated_by` in one statement.
    ///
    /// Returns `None` if no row with the given roll number exists.
    pub async fn update_status(
        pool: &PgPool,
        roll_no: &str,
        status: &str,
        paid_at: Option<Timestamp>,
        updated_by: DbId,
    ) -> Result<Option<RecipientRow>, sqlx::Error> {
        let query = format!(
            "UPDATE recipients SET
                status = $2,
                paid_at = $3,
                updated_by = $4
             WHERE roll_no = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RecipientRow>(&query)
            .bind(roll_no)
            .bind(status)
            .bind(paid_at)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// One page of report rows for a status, ordered by roll number.
    pub async fn list_by_status(
        pool: &PgPool,
        status: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PayoutReportRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM payout_report
             WHERE status = $1
             ORDER BY roll_no ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PayoutReportRecord>(&query)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count recipients with the given status.
    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipients WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Every report row for a status, ordered by roll number.
    pub async fn export_by_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<PayoutReportRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM payout_report
             WHERE status = $1
             ORDER BY roll_no ASC"
        );
        sqlx::query_as::<_, PayoutReportRecord>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }
}
