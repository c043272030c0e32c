//! In-memory user directory for tests
//!
//! Counts lookups so tests can assert the gate never reached the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::types::{Role, UserRecord};

#[derive(Debug, Clone, Default)]
pub struct MockUserDirectory {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
    lookups: Arc<AtomicUsize>,
    fail: bool,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a user record
    pub fn with_user(self, email: &str, role: Option<Role>) -> Self {
        self.insert(email, role);
        self
    }

    /// Make every lookup fail as if the store were unreachable
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn insert(&self, email: &str, role: Option<Role>) {
        let record = UserRecord {
            email: email.to_string(),
            role,
        };
        self.users
            .write()
            .expect("directory lock poisoned")
            .insert(email.to_string(), record);
    }

    /// Number of `find_user_by_email` calls so far
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl UserDirectory for MockUserDirectory {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(AuthError::UserLoadError);
        }

        Ok(self
            .users
            .read()
            .expect("directory lock poisoned")
            .get(email)
            .cloned())
    }
}
