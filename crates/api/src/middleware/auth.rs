//! Bearer-token identity for agents and admins.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use payout_core::access::Actor;
use payout_core::error::CoreError;
use payout_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in caller, taken from `Authorization: Bearer <token>`.
///
/// Holds no role. Handlers pass [`AuthUser::actor`] to `PayoutService`,
/// which asks the role directory on each admin-only call, so a demoted
/// admin loses access even with an unexpired token. Missing, malformed,
/// badly signed and expired tokens are all `401 UNAUTHENTICATED`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// `claims.sub`; also the `updated_by` stamped on transitions.
    pub user_id: DbId,
    /// Email at login time, for log lines.
    pub email: String,
}

impl AuthUser {
    /// The identity the payout service authorizes.
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthenticated(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthenticated(
                "Invalid or expired token".into(),
            ))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
