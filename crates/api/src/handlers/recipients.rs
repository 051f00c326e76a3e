//! Handlers for recipient lookup and payout confirmation.
//!
//! Roll numbers can contain `/`, so they travel in the query string or the
//! JSON body rather than in the path.

use axum::extract::State;
use axum::Json;
use payout_core::error::CoreError;
use payout_core::payout::Transition;
use payout_core::recipient::Recipient;
use payout_core::roll_no::RollNo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::RollNoParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the mark-paid and mark-unpaid endpoints.
#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub roll_no: String,
}

/// GET /api/v1/recipients?roll_no=
pub async fn lookup(
    State(state): State<AppState>,
    auth: AuthUser,
    AppQuery(params): AppQuery<RollNoParams>,
) -> AppResult<Json<DataResponse<Recipient>>> {
    let roll_no = RollNo::parse(&params.roll_no)?;
    let actor = auth.actor();

    let recipient = state
        .payouts
        .find_by_roll_no(Some(&actor), &roll_no)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Recipient",
                key: roll_no.to_string(),
            })
        })?;

    Ok(Json(DataResponse { data: recipient }))
}

/// POST /api/v1/recipients/mark-paid
///
/// Any signed-in user. Re-marking a paid recipient re-stamps `paid_at`.
pub async fn mark_paid(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<StatusChangeRequest>,
) -> AppResult<Json<DataResponse<Recipient>>> {
    let roll_no = RollNo::parse(&input.roll_no)?;
    let actor = auth.actor();

    let transition = state.payouts.mark_paid(Some(&actor), &roll_no).await?;
    log_transition(&auth, &transition, "paid");

    Ok(Json(DataResponse {
        data: transition.recipient,
    }))
}

/// POST /api/v1/recipients/mark-unpaid
///
/// Admin only.
pub async fn mark_unpaid(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<StatusChangeRequest>,
) -> AppResult<Json<DataResponse<Recipient>>> {
    let roll_no = RollNo::parse(&input.roll_no)?;
    let actor = auth.actor();

    let transition = state.payouts.mark_unpaid(Some(&actor), &roll_no).await?;
    log_transition(&auth, &transition, "unpaid");

    Ok(Json(DataResponse {
        data: transition.recipient,
    }))
}

fn log_transition(auth: &AuthUser, transition: &Transition, target: &str) {
    let roll_no = transition.recipient.roll_no.as_str();
    if transition.is_restamp() {
        tracing::warn!(
            user_id = auth.user_id,
            email = %auth.email,
            roll_no,
            status = target,
            "Recipient already had this status, re-stamped"
        );
    } else {
        tracing::info!(
            user_id = auth.user_id,
            email = %auth.email,
            roll_no,
            from = %transition.previous_status,
            to = target,
            "Payout status changed"
        );
    }
}
