//! Well-known role names and the [`Role`] a user resolves to.
//!
//! These must match the `user_roles.role` CHECK constraint in
//! `20261019000002_create_user_roles_table.sql`. A user without a
//! `user_roles` row is an agent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_AGENT: &str = "agent";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May revert payouts and read reports.
    Admin,
    /// May look up recipients and confirm payouts.
    #[default]
    Agent,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Agent => ROLE_AGENT,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_AGENT => Ok(Role::Agent),
            other => Err(CoreError::Validation(format!("Unknown role '{other}'"))),
        }
    }
}
