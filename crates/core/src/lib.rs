//! Payout verification domain.
//!
//! Everything here is transport and storage agnostic: the HTTP crate drives
//! [`payout::PayoutService`], and the database crate implements the ports in
//! [`store`].

pub mod access;
pub mod account;
pub mod error;
pub mod memory;
pub mod pagination;
pub mod payout;
pub mod recipient;
pub mod report;
pub mod roles;
pub mod roll_no;
pub mod store;
pub mod types;
