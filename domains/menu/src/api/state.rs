//! Menu domain state

use std::sync::Arc;

use axum::extract::FromRef;
use letseat_auth::AuthBackend;

use crate::repository::MenuStore;

#[derive(Clone)]
pub struct MenuState {
    pub store: Arc<dyn MenuStore>,
    pub auth: AuthBackend,
}

impl FromRef<MenuState> for AuthBackend {
    fn from_ref(state: &MenuState) -> Self {
        state.auth.clone()
    }
}
