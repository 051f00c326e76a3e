//! `Json` and `Query` extractors whose rejections use the `{error, code}`
//! envelope.
//!
//! Axum's own rejections answer with plain text and, for a body missing a
//! field, a 422. These wrappers turn every decode failure into
//! [`AppError::BadRequest`] (400).

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Rejections become `400 BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string. Rejections become `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
