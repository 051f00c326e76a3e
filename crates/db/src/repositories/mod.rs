//! Repository layer providing per-table query functions.
//!
//! Each repository is a zero-sized struct whose associated functions take a
//! `&PgPool` and return `Result<T, sqlx::Error>`.

pub mod recipient_repo;
pub mod user_repo;
pub mod user_role_repo;

pub use recipient_repo::RecipientRepo;
pub use user_repo::UserRepo;
pub use user_role_repo::UserRoleRepo;
