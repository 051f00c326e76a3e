//! Handlers for the `/auth` resource (login, current user).

use axum::extract::State;
use axum::Json;
use payout_core::error::CoreError;
use payout_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info. The role is resolved at response time and is not part
/// of the token.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Unknown emails and wrong passwords
/// get the same 401.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let account = state
        .accounts
        .find_by_email(input.email.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthenticated(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(user_id = account.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthenticated(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let role = state.roles.role_of(account.id).await?;

    let access_token = generate_access_token(account.id, &account.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = account.id, role = %role, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserInfo {
            id: account.id,
            email: account.email,
            role: role.to_string(),
        },
    }))
}

/// GET /api/v1/auth/me
///
/// The caller's identity with their role as of this request.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<UserInfo>>> {
    let account = state
        .accounts
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated(
                "Account no longer exists".into(),
            ))
        })?;
    let role = state.roles.role_of(account.id).await?;

    Ok(Json(DataResponse {
        data: UserInfo {
            id: account.id,
            email: account.email,
            role: role.to_string(),
        },
    }))
}
