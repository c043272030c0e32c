//! Let's Eat application composition root
//!
//! Composes the domain routers into a single application. Stores and the
//! signing configuration are built once here and injected into each
//! domain's state.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use letseat_auth::{AuthBackend, AuthConfig, UserDirectory};
use letseat_common::Config;
use letseat_menu::{MenuState, MenuStore, PgMenuStore};
use letseat_users::{PgUserStore, UserStore, UsersState};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Body of `GET /`
pub const LANDING_MESSAGE: &str = "Are hungry? let's eat.....";

/// Stores backing the domain routers
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    /// Read side the gate uses for admin checks
    pub directory: Arc<dyn UserDirectory>,
    pub menu: Arc<dyn MenuStore>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        let users = PgUserStore::new(pool.clone());
        Self {
            users: Arc::new(users.clone()),
            directory: Arc::new(users),
            menu: Arc::new(PgMenuStore::new(pool)),
        }
    }
}

/// Build the full router from explicit stores and auth configuration
pub fn build_router(stores: Stores, auth_config: AuthConfig) -> Router {
    let auth = AuthBackend::new(stores.directory, auth_config);

    let users_state = UsersState {
        store: stores.users,
        auth: auth.clone(),
    };
    let menu_state = MenuState {
        store: stores.menu,
        auth,
    };

    Router::new()
        .route("/", get(landing))
        .route("/health", get(health_check))
        .merge(letseat_users::routes().with_state(users_state))
        .merge(letseat_menu::routes().with_state(menu_state))
}

/// Create the main application router backed by Postgres
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    build_router(Stores::postgres(pool), AuthConfig::from(config))
}

/// Request tracing, permissive CORS and a per-request timeout
pub fn with_middleware(app: Router, request_timeout: Duration) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(request_timeout))
            .into_inner(),
    )
}

async fn landing() -> &'static str {
    LANDING_MESSAGE
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
