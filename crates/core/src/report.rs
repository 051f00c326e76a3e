//! Admin payout report rows, pages, and CSV export.

use serde::Serialize;

use crate::recipient::PayoutStatus;
use crate::roll_no::RollNo;
use crate::types::Timestamp;

/// Column order for CSV exports.
pub const CSV_COLUMNS: [&str; 6] = ["roll_no", "name", "address", "status", "paid_at", "agent_email"];

/// One recipient as shown in the admin report, with the acting agent's email.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutReportRow {
    pub roll_no: RollNo,
    pub name: String,
    pub address: String,
    pub status: PayoutStatus,
    pub paid_at: Option<Timestamp>,
    /// Email of the user who last changed this recipient's status.
    pub agent_email: Option<String>,
}

/// A page of report rows plus enough totals to render pagination.
#[derive(Debug, Clone, Serialize)]
pub struct PayoutPage {
    pub items: Vec<PayoutReportRow>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub status: PayoutStatus,
}

// ---------------------------------------------------------------------------
// CSV helpers
// ---------------------------------------------------------------------------

/// Escape a value for CSV: wrap in quotes if it contains comma, quote, or newline.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Build a CSV document from report rows.
///
/// The first line is the [`CSV_COLUMNS`] header. Timestamps are RFC 3339,
/// missing values are empty cells. Lines end with `\n`.
pub fn build_csv(rows: &[PayoutReportRow]) -> String {
    let mut out = CSV_COLUMNS.join(",");
    out.push('\n');

    for row in rows {
        let paid_at = row.paid_at.map(|t| t.to_rfc3339()).unwrap_or_default();
        let cells = [
            csv_escape(row.roll_no.as_str()),
            csv_escape(&row.name),
            csv_escape(&row.address),
            row.status.as_str().to_string(),
            paid_at,
            csv_escape(row.agent_email.as_deref().unwrap_or("")),
        ];
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

/// Download filename for an export: `payout_report_<status>_<timestamp>.csv`.
pub fn export_filename(status: PayoutStatus, generated_at: Timestamp) -> String {
    format!(
        "payout_report_{status}_{}.csv",
        generated_at.format("%Y-%m-%dT%H-%M-%SZ")
    )
}
