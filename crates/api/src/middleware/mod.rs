//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//!
//! Role checks are not done here: the payout service authorizes every
//! operation against a fresh role lookup.

pub mod auth;
