//! HTTP application wiring (Axum router + shared state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `render.rs`: server-side HTML for the page routes
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{response::Redirect, routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::client::CatalogClient;
use crate::config::ApiConfig;

pub mod errors;
pub mod render;
pub mod routes;

/// State shared by all handlers. The product dataset itself is a process-wide
/// static and is not carried here.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub client: CatalogClient,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let client = CatalogClient::new(config.api_base_url.clone());
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: ApiConfig) -> Router {
    let state = AppState::new(config);
    let bundle = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(|| async { Redirect::to(routes::pages::CATALOG_PATH) }))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .nest_service("/pkg", bundle)
        .fallback(errors::not_found)
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
