//! In-memory implementation of every storage port.
//!
//! Backs the unit and HTTP tests so they run without PostgreSQL. Recipients
//! are kept in a `BTreeMap` keyed by roll number, which gives report listings
//! the same roll-number ordering as the SQL queries.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::Account;
use crate::error::CoreError;
use crate::pagination::PageRequest;
use crate::recipient::{PayoutStatus, Recipient, StatusChange};
use crate::report::PayoutReportRow;
use crate::roles::Role;
use crate::roll_no::RollNo;
use crate::store::{AccountStore, RecipientStore, RoleDirectory};
use crate::types::DbId;

#[derive(Debug, Default)]
pub struct MemoryStore {
    recipients: RwLock<BTreeMap<RollNo, Recipient>>,
    accounts: RwLock<BTreeMap<DbId, Account>>,
    roles: RwLock<HashMap<DbId, Role>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a recipient.
    pub async fn insert_recipient(&self, recipient: Recipient) {
        self.recipients
            .write()
            .await
            .insert(recipient.roll_no.clone(), recipient);
    }

    /// Snapshot of a stored recipient, bypassing access checks.
    pub async fn recipient(&self, roll_no: &RollNo) -> Option<Recipient> {
        self.recipients.read().await.get(roll_no).cloned()
    }

    pub async fn insert_account(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }

    /// Set or clear a user's explicit role. `None` makes the user an agent.
    pub async fn set_role(&self, user_id: DbId, role: Option<Role>) {
        let mut roles = self.roles.write().await;
        match role {
            Some(role) => roles.insert(user_id, role),
            None => roles.remove(&user_id),
        };
    }

    async fn report_rows(&self, status: PayoutStatus) -> Vec<PayoutReportRow> {
        let recipients = self.recipients.read().await;
        let accounts = self.accounts.read().await;

        recipients
            .values()
            .filter(|r| r.status == status)
            .map(|r| PayoutReportRow {
                roll_no: r.roll_no.clone(),
                name: r.name.clone(),
                address: r.address.clone(),
                status: r.status,
                paid_at: r.paid_at,
                agent_email: r
                    .updated_by
                    .and_then(|id| accounts.get(&id))
                    .map(|a| a.email.clone()),
            })
            .collect()
    }
}

#[async_trait]
impl RecipientStore for MemoryStore {
    async fn find_by_roll_no(&self, roll_no: &RollNo) -> Result<Option<Recipient>, CoreError> {
        Ok(self.recipient(roll_no).await)
    }

    async fn apply_status_change(
        &self,
        roll_no: &RollNo,
        change: &StatusChange,
    ) -> Result<Option<Recipient>, CoreError> {
        let mut recipients = self.recipients.write().await;
        Ok(recipients.get_mut(roll_no).map(|recipient| {
            recipient.apply(change);
            recipient.clone()
        }))
    }

    async fn list_by_status(
        &self,
        status: PayoutStatus,
        page: &PageRequest,
    ) -> Result<Vec<PayoutReportRow>, CoreError> {
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.page_size()).unwrap_or(0);
        Ok(self
            .report_rows(status)
            .await
            .into_iter()
            .skip(skip)
            .take(take)
            .collect())
    }

    async fn count_by_status(&self, status: PayoutStatus) -> Result<i64, CoreError> {
        let recipients = self.recipients.read().await;
        let count = recipients.values().filter(|r| r.status == status).count();
        i64::try_from(count).map_err(|e| CoreError::Internal(e.to_string()))
    }

    async fn export_by_status(
        &self,
        status: PayoutStatus,
    ) -> Result<Vec<PayoutReportRow>, CoreError> {
        Ok(self.report_rows(status).await)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[async_trait]
impl RoleDirectory for MemoryStore {
    async fn role_of(&self, user_id: DbId) -> Result<Role, CoreError> {
        Ok(self
            .roles
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_default())
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, CoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Account>, CoreError> {
        Ok(self.accounts.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::access::Actor;

    fn roll(raw: &str) -> RollNo {
        RollNo::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn status_change_on_missing_row_is_none() {
        let store = MemoryStore::new();
        let change = StatusChange::paid(&Actor::new(1), Utc::now());
        let result = store.apply_status_change(&roll("X1"), &change).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn unknown_user_is_agent() {
        let store = MemoryStore::new();
        assert_eq!(store.role_of(42).await.unwrap(), Role::Agent);
    }

    #[tokio::test]
    async fn report_rows_resolve_agent_email() {
        let store = MemoryStore::new();
        store
            .insert_account(Account {
                id: 5,
                email: "field.agent@example.org".into(),
                password_hash: String::new(),
            })
            .await;
        store
            .insert_recipient(Recipient::unpaid(roll("B2"), "Ravi", "Hassan"))
            .await;
        store
            .apply_status_change(&roll("B2"), &StatusChange::paid(&Actor::new(5), Utc::now()))
            .await
            .unwrap();

        let rows = store.export_by_status(PayoutStatus::Paid).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].agent_email.as_deref(), Some("field.agent@example.org"));
    }

    #[tokio::test]
    async fn email_lookup_ignores_case() {
        let store = MemoryStore::new();
        store
            .insert_account(Account {
                id: 1,
                email: "Admin@Example.org".into(),
                password_hash: String::new(),
            })
            .await;

        let found = store.find_by_email("admin@example.org").await.unwrap();
        assert_eq!(found.map(|a| a.id), Some(1));
    }
}
