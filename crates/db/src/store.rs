//! PostgreSQL implementation of the `payout_core` storage ports.
//!
//! Thin adapter over the repositories: binds domain values as text, converts
//! rows back into validated domain types, and wraps every `sqlx::Error` in
//! [`CoreError::StoreFailure`] without retrying.

use async_trait::async_trait;
use payout_core::account::Account;
use payout_core::error::CoreError;
use payout_core::pagination::PageRequest;
use payout_core::recipient::{PayoutStatus, Recipient, StatusChange};
use payout_core::report::PayoutReportRow;
use payout_core::roles::Role;
use payout_core::roll_no::RollNo;
use payout_core::store::{AccountStore, RecipientStore, RoleDirectory};
use payout_core::types::DbId;

use crate::models::recipient::{PayoutReportRecord, RecipientRow};
use crate::repositories::{RecipientRepo, UserRepo, UserRoleRepo};
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a stored row, treating a row that breaks domain rules as a store
/// failure rather than bad caller input.
fn recipient_from_row(row: RecipientRow) -> Result<Recipient, CoreError> {
    let roll_no = row.roll_no.clone();
    Recipient::try_from(row).map_err(|e| {
        tracing::error!(roll_no = %roll_no, error = %e, "Invalid recipient row");
        CoreError::store(e.to_string())
    })
}

fn report_rows(records: Vec<PayoutReportRecord>) -> Result<Vec<PayoutReportRow>, CoreError> {
    records
        .into_iter()
        .map(|record| {
            PayoutReportRow::try_from(record).map_err(|e| {
                tracing::error!(error = %e, "Invalid payout report row");
                CoreError::store(e.to_string())
            })
        })
        .collect()
}

#[async_trait]
impl RecipientStore for PgStore {
    async fn find_by_roll_no(&self, roll_no: &RollNo) -> Result<Option<Recipient>, CoreError> {
        RecipientRepo::find_by_roll_no(&self.pool, roll_no.as_str())
            .await
            .map_err(CoreError::store)?
            .map(recipient_from_row)
            .transpose()
    }

    async fn apply_status_change(
        &self,
        roll_no: &RollNo,
        change: &StatusChange,
    ) -> Result<Option<Recipient>, CoreError> {
        let row = RecipientRepo::update_status(
            &self.pool,
            roll_no.as_str(),
            change.status().as_str(),
            change.paid_at(),
            change.updated_by(),
        )
        .await
        .map_err(CoreError::store)?;

        if row.is_some() {
            tracing::debug!(
                roll_no = %roll_no,
                status = %change.status(),
                updated_by = change.updated_by(),
                "Recipient status written"
            );
        }
        row.map(recipient_from_row).transpose()
    }

    async fn list_by_status(
        &self,
        status: PayoutStatus,
        page: &PageRequest,
    ) -> Result<Vec<PayoutReportRow>, CoreError> {
        let records = RecipientRepo::list_by_status(
            &self.pool,
            status.as_str(),
            page.page_size(),
            page.offset(),
        )
        .await
        .map_err(CoreError::store)?;
        report_rows(records)
    }

    async fn count_by_status(&self, status: PayoutStatus) -> Result<i64, CoreError> {
        RecipientRepo::count_by_status(&self.pool, status.as_str())
            .await
            .map_err(CoreError::store)
    }

    async fn export_by_status(
        &self,
        status: PayoutStatus,
    ) -> Result<Vec<PayoutReportRow>, CoreError> {
        let records = RecipientRepo::export_by_status(&self.pool, status.as_str())
            .await
            .map_err(CoreError::store)?;
        report_rows(records)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(CoreError::store)
    }
}

#[async_trait]
impl RoleDirectory for PgStore {
    async fn role_of(&self, user_id: DbId) -> Result<Role, CoreError> {
        let row = UserRoleRepo::find_by_user(&self.pool, user_id)
            .await
            .map_err(CoreError::store)?;

        match row {
            Some(row) => row.role().map_err(|e| {
                tracing::error!(user_id, error = %e, "Invalid user role row");
                CoreError::store(e.to_string())
            }),
            None => Ok(Role::default()),
        }
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CoreError> {
        Ok(UserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(CoreError::store)?
            .map(Account::from))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Account>, CoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::store)?
            .map(Account::from))
    }
}
