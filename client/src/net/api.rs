//! REST call for submitting a download.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the request is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-OK status, malformed body) collapses into an
//! `Err(String)` holding the text the status line should show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::DownloadResponse;
#[cfg(any(test, feature = "hydrate"))]
use wire::{DownloadRequest, ErrorResponse};

/// Fallback shown when a failed response carries no `error` field.
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Download failed";

/// Request body for an already trimmed `url`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn download_request(url: &str) -> DownloadRequest {
    DownloadRequest { url: url.to_owned() }
}

/// Interpret a `/download` reply from its OK flag and raw body.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn interpret_response(ok: bool, body: &str) -> Result<DownloadResponse, String> {
    if ok {
        return serde_json::from_str::<DownloadResponse>(body).map_err(|e| e.to_string());
    }
    let failure: ErrorResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    Err(failure
        .error
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DOWNLOAD_FAILED_MESSAGE.to_owned()))
}

/// Submit `url` via `POST /download`.
///
/// # Errors
///
/// Returns the message to display if the request fails, the server responds
/// with a non-OK status, or the body cannot be decoded.
pub async fn submit_download(url: &str) -> Result<DownloadResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = download_request(url);
        let resp = gloo_net::http::Request::post(wire::DOWNLOAD_PATH)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        interpret_response(ok, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}
