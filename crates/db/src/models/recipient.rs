//! Recipient row models and report rows.

use payout_core::error::CoreError;
use payout_core::recipient::{PayoutStatus, Recipient};
use payout_core::report::PayoutReportRow;
use payout_core::roll_no::RollNo;
use payout_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full row from the `recipients` table.
#[derive(Debug, Clone, FromRow)]
pub struct RecipientRow {
    pub id: DbId,
    pub roll_no: String,
    pub name: String,
    pub address: String,
    pub status: String,
    pub paid_at: Option<Timestamp>,
    pub updated_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<RecipientRow> for Recipient {
    type Error = CoreError;

    fn try_from(row: RecipientRow) -> Result<Self, Self::Error> {
        let roll_no = RollNo::parse(&row.roll_no)?;
        let status: PayoutStatus = row.status.parse()?;
        Recipient::new(
            roll_no,
            row.name,
            row.address,
            status,
            row.paid_at,
            row.updated_by,
        )
    }
}

/// Row from the `payout_report` view.
#[derive(Debug, Clone, FromRow)]
pub struct PayoutReportRecord {
    pub roll_no: String,
    pub name: String,
    pub address: String,
    pub status: String,
    pub paid_at: Option<Timestamp>,
    pub agent_email: Option<String>,
}

impl TryFrom<PayoutReportRecord> for PayoutReportRow {
    type Error = CoreError;

    fn try_from(row: PayoutReportRecord) -> Result<Self, Self::Error> {
        Ok(PayoutReportRow {
            roll_no: RollNo::parse(&row.roll_no)?,
            name: row.name,
            address: row.address,
            status: row.status.parse()?,
            paid_at: row.paid_at,
            agent_email: row.agent_email,
        })
    }
}

/// DTO for provisioning a recipient (batch import, seeding).
///
/// `roll_no` is stored exactly as given, so callers pass a normalized value.
#[derive(Debug, Deserialize)]
pub struct CreateRecipient {
    pub roll_no: RollNo,
    pub name: String,
    pub address: String,
}
