//! In-memory user store for tests
//!
//! Also serves as the gate's user directory and counts those lookups.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Utc;
use letseat_auth::{AuthError, Role, UserDirectory, UserRecord};
use letseat_common::{Pagination, RepositoryError};

use crate::domain::entities::{NewUser, User};
use crate::repository::{InsertOutcome, UserStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<BTreeMap<String, User>>>,
    directory_lookups: Arc<AtomicUsize>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a user directly, bypassing registration
    pub fn with_user(self, email: &str, role: Option<Role>) -> Self {
        let user = User {
            email: email.to_string(),
            name: None,
            role,
            created_at: Utc::now(),
        };
        self.users
            .write()
            .expect("user store lock poisoned")
            .insert(email.to_string(), user);
        self
    }

    /// Number of lookups made through `UserDirectory`
    pub fn directory_lookups(&self) -> usize {
        self.directory_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .expect("user store lock poisoned")
            .get(email)
            .cloned())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .expect("user store lock poisoned")
            .values()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn insert(&self, new_user: NewUser) -> Result<InsertOutcome, RepositoryError> {
        let mut users = self.users.write().expect("user store lock poisoned");
        if users.contains_key(&new_user.email) {
            return Ok(InsertOutcome::AlreadyExists);
        }

        let user = User {
            email: new_user.email.clone(),
            name: new_user.name,
            role: None,
            created_at: Utc::now(),
        };
        users.insert(new_user.email, user.clone());
        Ok(InsertOutcome::Created(user))
    }

    async fn set_role(&self, email: &str, role: Role) -> Result<Option<User>, RepositoryError> {
        let mut users = self.users.write().expect("user store lock poisoned");
        Ok(users.get_mut(email).map(|user| {
            user.role = Some(role);
            user.clone()
        }))
    }

    async fn delete(&self, email: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .users
            .write()
            .expect("user store lock poisoned")
            .remove(email)
            .is_some())
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        self.directory_lookups.fetch_add(1, Ordering::SeqCst);
        let user = self
            .find_by_email(email)
            .await
            .map_err(|_| AuthError::UserLoadError)?;
        Ok(user.map(UserRecord::from))
    }
}
