//! `POST /download` — validate input and hand it to the media fetcher.

use std::net::SocketAddr;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{ConnectInfo, State};
use tracing::{info, warn};
use wire::{DownloadRequest, DownloadResponse};

use super::error::ApiError;
use crate::services::download::{download_post, download_profile};
use crate::state::AppState;
use crate::validate::{InputKind, detect_input_type, extract_shortcode, sanitize_username, validate_input};

pub async fn download(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: Bytes,
) -> Result<Json<DownloadResponse>, ApiError> {
    let result = handle_download(&state, addr, &body).await;
    if let Err(e) = &result {
        warn!(client = %addr.ip(), status = %e.status(), error = %e, "download rejected");
    }
    result.map(Json)
}

async fn handle_download(state: &AppState, addr: SocketAddr, body: &[u8]) -> Result<DownloadResponse, ApiError> {
    state.rate_limiter.check_and_record(addr.ip())?;
    let Some(fetcher) = state.fetcher.clone() else {
        return Err(ApiError::FetcherUnavailable);
    };

    let request: DownloadRequest = serde_json::from_slice(body).map_err(|_| ApiError::MissingUrl)?;
    let input = request.url.trim();
    validate_input(input).map_err(ApiError::InvalidInput)?;

    match detect_input_type(input) {
        InputKind::Post => {
            let shortcode = extract_shortcode(input).ok_or(ApiError::UnrecognisedInput)?;
            info!(client = %addr.ip(), %shortcode, "post download requested");
            Ok(download_post(state, fetcher.as_ref(), &shortcode).await?)
        }
        InputKind::Profile => {
            let username = sanitize_username(input);
            if username.is_empty() {
                return Err(ApiError::UnrecognisedInput);
            }
            info!(client = %addr.ip(), %username, "profile download requested");
            Ok(download_profile(state, fetcher.as_ref(), &username).await?)
        }
        InputKind::Unknown => Err(ApiError::UnrecognisedInput),
    }
}
