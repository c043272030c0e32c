//! Read-model types the gate needs from the user store

use serde::{Deserialize, Serialize};

/// Privileged roles a user record can carry.
///
/// Ordinary users have no role at all (`Option<Role>::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
}

impl Role {
    /// Stored text form of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
        }
    }

    /// Check if this role may use admin-only routes
    #[mutants::skip] // Admin is the only variant, so this is always true today
    pub fn can_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is an exact, case-sensitive match on the stored text.
impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Lightweight view of a stored user, carrying only what authorization reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    pub role: Option<Role>,
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|r| r.can_admin())
    }
}
