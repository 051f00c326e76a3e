//! Storage ports.
//!
//! The domain only ever talks to these traits. `payout-db` implements them
//! over PostgreSQL; [`crate::memory::MemoryStore`] implements them in memory.
//! Implementations report their own failures as
//! [`CoreError::StoreFailure`] and must not retry.

use async_trait::async_trait;

use crate::account::Account;
use crate::error::CoreError;
use crate::pagination::PageRequest;
use crate::recipient::{PayoutStatus, Recipient, StatusChange};
use crate::report::PayoutReportRow;
use crate::roles::Role;
use crate::roll_no::RollNo;
use crate::types::DbId;

#[async_trait]
pub trait RecipientStore: Send + Sync {
    /// Exact-match lookup on a normalized roll number.
    async fn find_by_roll_no(&self, roll_no: &RollNo) -> Result<Option<Recipient>, CoreError>;

    /// Write a status change as a single-row update.
    ///
    /// Returns the updated recipient, or `None` if no row has this roll
    /// number. Last writer wins; there is no check on the prior status.
    async fn apply_status_change(
        &self,
        roll_no: &RollNo,
        change: &StatusChange,
    ) -> Result<Option<Recipient>, CoreError>;

    /// One page of report rows with the given status, ordered by roll number.
    async fn list_by_status(
        &self,
        status: PayoutStatus,
        page: &PageRequest,
    ) -> Result<Vec<PayoutReportRow>, CoreError>;

    async fn count_by_status(&self, status: PayoutStatus) -> Result<i64, CoreError>;

    /// Every report row with the given status, ordered by roll number.
    async fn export_by_status(
        &self,
        status: PayoutStatus,
    ) -> Result<Vec<PayoutReportRow>, CoreError>;

    async fn health_check(&self) -> Result<(), CoreError>;
}

#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Resolve a user's role. Users without an explicit role are agents.
    async fn role_of(&self, user_id: DbId) -> Result<Role, CoreError>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Account>, CoreError>;
}
