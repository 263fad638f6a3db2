// File: src/app.rs
// Purpose: Router serving the payment page, the wasm package and static files

use axum::{extract::State, response::Html, routing::get, Router};
use payform_core::render_page;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The page never changes after startup, so it is rendered once
    page: Arc<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let page = render_page(&config.page_options(), &config.copy).into_string();
        Self {
            page: Arc::new(page),
        }
    }
}

pub fn router(config: &Config) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest_service("/pkg", ServeDir::new(&config.server.pkg_dir))
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(config))
}

async fn index(State(state): State<AppState>) -> Html<String> {
    debug!("serving payment page");
    Html(state.page.as_ref().clone())
}

async fn health() -> &'static str {
    "ok"
}
