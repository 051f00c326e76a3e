//! HTTP surface of the payout verification service.
//!
//! Agents look recipients up by roll number and confirm payouts; admins
//! revert payouts and pull the paid/unpaid report. Authorization lives in
//! `payout_core`; this crate handles transport, tokens, and wiring.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
