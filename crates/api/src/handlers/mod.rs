pub mod auth;
pub mod recipients;
pub mod reports;
