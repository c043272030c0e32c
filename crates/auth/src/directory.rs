//! Collaborator the gate reads user records from

use std::sync::Arc;

use crate::error::AuthError;
use crate::types::UserRecord;

/// Point lookup of users by email.
///
/// Implemented by the users domain store; the gate only ever reads.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError>;
}

#[async_trait::async_trait]
impl<T: UserDirectory + ?Sized> UserDirectory for Arc<T> {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        (**self).find_user_by_email(email).await
    }
}
