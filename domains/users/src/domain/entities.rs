//! User entities

use chrono::{DateTime, Utc};
use letseat_auth::{Role, UserRecord};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub email: String,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|r| r.can_admin())
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        UserRecord {
            email: user.email,
            role: user.role,
        }
    }
}

/// Registration payload. New users never carry a role.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}
