use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod store;

use config::AppConfig;
use registry::LinkRegistry;
use store::LinkStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: AppConfig,
    pub registry: LinkRegistry,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = LinkStore::new(&config.data_file);
        let registry = LinkRegistry::new(store, config.base_url.clone());
        Self { config, registry }
    }
}

// ── Router ─────────────────────────────────────────────────────────────────

/// Build the application router around shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::links::index))
        .route("/links", get(handlers::links::list_links))
        .route("/shorten", post(handlers::links::shorten))
        // Short-link redirect — must come LAST so the fixed routes take priority
        .route("/:code", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
