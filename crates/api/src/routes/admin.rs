//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Routes mounted at `/admin`. Admin role is checked per request.
///
/// ```text
/// GET /payouts          -> list_payouts
/// GET /payouts/export   -> export_payouts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payouts", get(reports::list_payouts))
        .route("/payouts/export", get(reports::export_payouts))
}
