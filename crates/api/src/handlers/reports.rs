//! Admin payout report handlers.

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use payout_core::pagination::PageRequest;
use payout_core::report::{build_csv, export_filename, PayoutPage};

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::query::{parse_status, ExportParams, ReportParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/payouts?status=&page=&page_size=
///
/// Status defaults to `paid`. Out-of-range page values are clamped.
pub async fn list_payouts(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(params): AppQuery<ReportParams>,
) -> AppResult<Json<DataResponse<PayoutPage>>> {
    let status = parse_status(params.status.as_deref())?;
    let page = PageRequest::new(
        params.page,
        params.page_size,
        state.config.report_page_size,
    );
    let actor = auth.actor();

    let result = state
        .payouts
        .list_by_status(Some(&actor), status, page)
        .await?;

    Ok(Json(DataResponse { data: result }))
}

/// GET /api/v1/admin/payouts/export?status=
///
/// Every row for the status as a CSV attachment.
pub async fn export_payouts(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(params): AppQuery<ExportParams>,
) -> AppResult<impl IntoResponse> {
    let status = parse_status(params.status.as_deref())?;
    let actor = auth.actor();

    let rows = state
        .payouts
        .export_by_status(Some(&actor), status)
        .await?;

    let filename = export_filename(status, Utc::now());
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| AppError::InternalError(format!("Invalid export filename: {e}")))?;

    tracing::info!(
        user_id = auth.user_id,
        status = %status,
        rows = rows.len(),
        "Payout report exported"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/csv; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        build_csv(&rows),
    ))
}
