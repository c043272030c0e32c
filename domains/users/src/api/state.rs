//! Users domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use letseat_auth::AuthBackend;

use crate::repository::UserStore;

/// Application state for the users domain
#[derive(Clone)]
pub struct UsersState {
    pub store: Arc<dyn UserStore>,
    pub auth: AuthBackend,
}

impl FromRef<UsersState> for AuthBackend {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}
