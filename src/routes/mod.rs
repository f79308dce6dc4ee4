//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the download API and file serving endpoints and stitches
//! them with Leptos SSR rendering under a single Axum router. The page itself
//! is served at `/`; its WASM/CSS bundle lives under `/pkg`.

pub mod download;
pub mod error;
pub mod files;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;


/// API routes shared by the page and any direct HTTP clients.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(wire::DOWNLOAD_PATH, post(download::download))
        .route("/serve/{filename}", get(files::serve_file))
        .route("/health", get(health))
        .with_state(state)
}

/// Leptos SSR frontend: API routes + the page at `/` + assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// cargo-leptos environment or `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Full application router. Falls back to the API alone when the Leptos
/// configuration is unavailable.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            warn!(error = %e, "page rendering disabled; serving API only");
            api_routes(state)
        }
    };
    router.layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    fetcher: bool,
    timestamp: i64,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        fetcher: state.fetcher.is_some(),
        timestamp: time::OffsetDateTime::now_utc().unix_timestamp(),
    })
}
