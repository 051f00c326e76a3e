//! Database row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A conversion into the typed `payout_core` value, validated here
//! - A `Deserialize` create DTO for inserts, where the table has one

pub mod recipient;
pub mod user;
pub mod user_role;
