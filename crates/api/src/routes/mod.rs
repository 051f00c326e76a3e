pub mod admin;
pub mod auth;
pub mod health;
pub mod recipients;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/me                             current user and role
///
/// /recipients?roll_no=                 lookup (any signed-in user)
/// /recipients/mark-paid                confirm payout (any signed-in user)
/// /recipients/mark-unpaid              revert payout (admin only)
///
/// /admin/payouts                       paginated report (admin only)
/// /admin/payouts/export                CSV export (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/recipients", recipients::router())
        .nest("/admin", admin::router())
}
