//! Payout transition service.
//!
//! The only writer of a recipient's `status`, `paid_at`, and `updated_by`.
//! Every operation takes the acting identity explicitly and authorizes it
//! through the [`AccessGuard`] before touching the store.

use std::sync::Arc;

use chrono::Utc;

use crate::access::{AccessGuard, Action, Actor};
use crate::error::CoreError;
use crate::pagination::PageRequest;
use crate::recipient::{PayoutStatus, Recipient, StatusChange};
use crate::report::{PayoutPage, PayoutReportRow};
use crate::roll_no::RollNo;
use crate::store::{RecipientStore, RoleDirectory};

/// Result of a status transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The recipient as persisted after the update.
    pub recipient: Recipient,
    /// Status read just before the update was written.
    pub previous_status: PayoutStatus,
}

impl Transition {
    /// True when the update rewrote a status the recipient already had.
    pub fn is_restamp(&self) -> bool {
        self.previous_status == self.recipient.status
    }
}

#[derive(Clone)]
pub struct PayoutService {
    recipients: Arc<dyn RecipientStore>,
    guard: AccessGuard,
}

impl PayoutService {
    pub fn new(recipients: Arc<dyn RecipientStore>, roles: Arc<dyn RoleDirectory>) -> Self {
        Self {
            recipients,
            guard: AccessGuard::new(roles),
        }
    }

    pub async fn health_check(&self) -> Result<(), CoreError> {
        self.recipients.health_check().await
    }

    /// Look up a recipient. Absence is `Ok(None)`, never an error.
    pub async fn find_by_roll_no(
        &self,
        actor: Option<&Actor>,
        roll_no: &RollNo,
    ) -> Result<Option<Recipient>, CoreError> {
        self.guard.authorize(actor, Action::ViewOne).await?;
        self.recipients.find_by_roll_no(roll_no).await
    }

    /// Confirm a payout.
    ///
    /// Any authenticated actor may do this for any recipient. Marking an
    /// already-paid recipient again is allowed and re-stamps `paid_at` and
    /// `updated_by`; check [`Transition::is_restamp`] to detect it.
    pub async fn mark_paid(
        &self,
        actor: Option<&Actor>,
        roll_no: &RollNo,
    ) -> Result<Transition, CoreError> {
        let actor = self.guard.authorize(actor, Action::MarkPaid).await?;
        let change = StatusChange::paid(actor, Utc::now());
        self.transition(roll_no, &change).await
    }

    /// Revert a payout to unpaid. Admin only.
    pub async fn mark_unpaid(
        &self,
        actor: Option<&Actor>,
        roll_no: &RollNo,
    ) -> Result<Transition, CoreError> {
        let actor = self.guard.authorize(actor, Action::MarkUnpaid).await?;
        let change = StatusChange::unpaid(actor);
        self.transition(roll_no, &change).await
    }

    /// One page of the admin report for a single status. Admin only.
    pub async fn list_by_status(
        &self,
        actor: Option<&Actor>,
        status: PayoutStatus,
        page: PageRequest,
    ) -> Result<PayoutPage, CoreError> {
        self.guard.authorize(actor, Action::ViewReport).await?;

        let items = self.recipients.list_by_status(status, &page).await?;
        let total = self.recipients.count_by_status(status).await?;

        Ok(PayoutPage {
            items,
            total,
            page: page.page(),
            page_size: page.page_size(),
            total_pages: page.total_pages(total),
            status,
        })
    }

    /// Every report row for a status, for CSV export. Admin only.
    pub async fn export_by_status(
        &self,
        actor: Option<&Actor>,
        status: PayoutStatus,
    ) -> Result<Vec<PayoutReportRow>, CoreError> {
        self.guard.authorize(actor, Action::ViewReport).await?;
        self.recipients.export_by_status(status).await
    }

    async fn transition(
        &self,
        roll_no: &RollNo,
        change: &StatusChange,
    ) -> Result<Transition, CoreError> {
        let current = self
            .recipients
            .find_by_roll_no(roll_no)
            .await?
            .ok_or_else(|| not_found(roll_no))?;

        // The row can disappear between the read and the write.
        let recipient = self
            .recipients
            .apply_status_change(roll_no, change)
            .await?
            .ok_or_else(|| not_found(roll_no))?;

        Ok(Transition {
            recipient,
            previous_status: current.status,
        })
    }
}

fn not_found(roll_no: &RollNo) -> CoreError {
    CoreError::NotFound {
        entity: "Recipient",
        key: roll_no.to_string(),
    }
}
