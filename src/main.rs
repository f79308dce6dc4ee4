#![recursion_limit = "256"]

mod config;
mod rate_limit;
mod routes;
mod services;
mod state;
mod validate;

use std::net::SocketAddr;

use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // Missing .env is fine; the environment may be set directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let port = config.port;
    let max_age = config.cleanup_max_age;
    let interval = config.cleanup_interval;

    let state = state::AppState::new(config, None);
    state.dirs.ensure().await.expect("failed to create download directories");
    info!(root = %state.dirs.root().display(), "download directories ready");
    if state.fetcher.is_none() {
        warn!("no media fetcher configured; /download will report the downloader as unavailable");
    }

    let _cleanup = services::cleaner::spawn_cleanup_task(state.dirs.clone(), max_age, interval);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    info!(%port, "reeldrop listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
