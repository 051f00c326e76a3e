//! Recipient entity and the status changes that may be applied to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::access::Actor;
use crate::error::CoreError;
use crate::roll_no::RollNo;
use crate::types::{DbId, Timestamp};

/// Payout status of a recipient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    #[default]
    Unpaid,
    Paid,
}

impl PayoutStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PayoutStatus::Unpaid => "unpaid",
            PayoutStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(PayoutStatus::Unpaid),
            "paid" => Ok(PayoutStatus::Paid),
            other => Err(CoreError::Validation(format!(
                "Unknown payout status '{other}' (expected 'paid' or 'unpaid')"
            ))),
        }
    }
}

/// A beneficiary tracked for payout status.
///
/// `status == Paid` if and only if `paid_at` is set. Stores build values with
/// [`Recipient::new`], which rejects rows breaking that rule, and mutate them
/// only through [`Recipient::apply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipient {
    pub roll_no: RollNo,
    pub name: String,
    pub address: String,
    pub status: PayoutStatus,
    pub paid_at: Option<Timestamp>,
    /// User who performed the most recent transition.
    pub updated_by: Option<DbId>,
}

impl Recipient {
    pub fn new(
        roll_no: RollNo,
        name: String,
        address: String,
        status: PayoutStatus,
        paid_at: Option<Timestamp>,
        updated_by: Option<DbId>,
    ) -> Result<Self, CoreError> {
        match (status, paid_at) {
            (PayoutStatus::Paid, None) => {
                return Err(CoreError::Validation(format!(
                    "Recipient {roll_no} is paid but has no paid_at"
                )))
            }
            (PayoutStatus::Unpaid, Some(_)) => {
                return Err(CoreError::Validation(format!(
                    "Recipient {roll_no} is unpaid but has a paid_at"
                )))
            }
            _ => {}
        }

        Ok(Self {
            roll_no,
            name,
            address,
            status,
            paid_at,
            updated_by,
        })
    }

    /// A freshly provisioned recipient: unpaid and never touched.
    pub fn unpaid(roll_no: RollNo, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            roll_no,
            name: name.into(),
            address: address.into(),
            status: PayoutStatus::Unpaid,
            paid_at: None,
            updated_by: None,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == PayoutStatus::Paid
    }

    pub fn apply(&mut self, change: &StatusChange) {
        self.status = change.status;
        self.paid_at = change.paid_at;
        self.updated_by = Some(change.updated_by);
    }
}

/// The three columns a transition writes, always in a consistent combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    status: PayoutStatus,
    paid_at: Option<Timestamp>,
    updated_by: DbId,
}

impl StatusChange {
    pub fn paid(actor: &Actor, at: Timestamp) -> Self {
        Self {
            status: PayoutStatus::Paid,
            paid_at: Some(at),
            updated_by: actor.id,
        }
    }

    pub fn unpaid(actor: &Actor) -> Self {
        Self {
            status: PayoutStatus::Unpaid,
            paid_at: None,
            updated_by: actor.id,
        }
    }

    pub fn status(&self) -> PayoutStatus {
        self.status
    }

    pub fn paid_at(&self) -> Option<Timestamp> {
        self.paid_at
    }

    pub fn updated_by(&self) -> DbId {
        self.updated_by
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn roll_no() -> RollNo {
        RollNo::parse("MYS/35/53").unwrap()
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [PayoutStatus::Unpaid, PayoutStatus::Paid] {
            assert_eq!(status.as_str().parse::<PayoutStatus>().unwrap(), status);
        }
        assert_matches!("PAID".parse::<PayoutStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PayoutStatus::Paid).unwrap(),
            serde_json::json!("paid")
        );
    }

    #[test]
    fn new_rejects_paid_without_timestamp() {
        let result = Recipient::new(
            roll_no(),
            "Asha".into(),
            "Mysuru".into(),
            PayoutStatus::Paid,
            None,
            Some(1),
        );
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn new_rejects_unpaid_with_timestamp() {
        let result = Recipient::new(
            roll_no(),
            "Asha".into(),
            "Mysuru".into(),
            PayoutStatus::Unpaid,
            Some(Utc::now()),
            None,
        );
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn apply_keeps_paid_at_in_step_with_status() {
        let actor = Actor::new(7);
        let now = Utc::now();
        let mut recipient = Recipient::unpaid(roll_no(), "Asha", "Mysuru");

        recipient.apply(&StatusChange::paid(&actor, now));
        assert!(recipient.is_paid());
        assert_eq!(recipient.paid_at, Some(now));
        assert_eq!(recipient.updated_by, Some(7));

        let admin = Actor::new(9);
        recipient.apply(&StatusChange::unpaid(&admin));
        assert_eq!(recipient.status, PayoutStatus::Unpaid);
        assert_eq!(recipient.paid_at, None);
        assert_eq!(recipient.updated_by, Some(9));
    }
}
