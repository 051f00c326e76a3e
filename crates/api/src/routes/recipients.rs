//! Route definitions for the `/recipients` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recipients;
use crate::state::AppState;

/// Routes mounted at `/recipients`. All require auth.
///
/// ```text
/// GET  /?roll_no=       -> lookup
/// POST /mark-paid       -> mark_paid
/// POST /mark-unpaid     -> mark_unpaid (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipients::lookup))
        .route("/mark-paid", post(recipients::mark_paid))
        .route("/mark-unpaid", post(recipients::mark_unpaid))
}
