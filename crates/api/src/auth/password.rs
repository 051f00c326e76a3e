//! Password hashing for agent and admin accounts.
//!
//! Accounts are provisioned outside the HTTP service, so this crate only
//! verifies at login. [`hash_password`] exists for provisioning scripts and
//! test fixtures. Stored hashes are Argon2id PHC strings; the salt and cost
//! parameters travel inside the string.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Produce an Argon2id PHC string for a new account password.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a login attempt against an account's stored hash.
///
/// A mismatch is `Ok(false)`. An `Err` means the stored hash itself is
/// unusable, which login reports as an internal error rather than a bad
/// password.
pub fn verify_password(
    attempt: &str,
    stored_hash: &str,
) -> Result<bool, argon2::password_hash::Error> {
    let stored = PasswordHash::new(stored_hash)?;
    match Argon2::default().verify_password(attempt.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
