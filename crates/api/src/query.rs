//! Shared query parameter types for API handlers.

use payout_core::error::CoreError;
use payout_core::recipient::PayoutStatus;
use serde::Deserialize;

/// `?roll_no=` as typed by the agent, before normalization.
#[derive(Debug, Deserialize)]
pub struct RollNoParams {
    pub roll_no: String,
}

/// Report listing parameters (`?status=&page=&page_size=`).
///
/// Page values are clamped by `PageRequest`, not rejected.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Export parameters (`?status=`).
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub status: Option<String>,
}

/// Parse an optional status filter. The admin report shows paid rows by default.
pub fn parse_status(raw: Option<&str>) -> Result<PayoutStatus, CoreError> {
    match raw {
        None | Some("") => Ok(PayoutStatus::Paid),
        Some(s) => s.parse(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn status_defaults_to_paid() {
        assert_eq!(parse_status(None).unwrap(), PayoutStatus::Paid);
        assert_eq!(parse_status(Some("")).unwrap(), PayoutStatus::Paid);
    }

    #[test]
    fn explicit_status_is_parsed() {
        assert_eq!(parse_status(Some("unpaid")).unwrap(), PayoutStatus::Unpaid);
        assert_matches!(parse_status(Some("pending")), Err(CoreError::Validation(_)));
    }
}
