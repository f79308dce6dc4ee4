//! `GET /serve/{filename}` — hand out finished downloads as attachments.
//!
//! Files are streamed from disk by `tower-http`'s `ServeFile`, which also
//! picks the content type and answers range requests.

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use tower_http::services::ServeFile;

use super::error::ApiError;
use crate::state::AppState;

/// Reduce a requested name to its final path component.
fn safe_filename(requested: &str) -> Option<&str> {
    std::path::Path::new(requested).file_name()?.to_str()
}

pub async fn serve_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let name = safe_filename(&filename).ok_or(ApiError::FileNotFound)?;

    for dir in [state.dirs.single(), state.dirs.zips()] {
        let path = dir.join(name);
        let is_file = tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file());
        if !is_file {
            continue;
        }
        let mut resp = ServeFile::new(&path).try_call(request).await?.map(Body::new);
        if resp.status().is_success() {
            let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{name}\""))
                .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
            resp.headers_mut().insert(header::CONTENT_DISPOSITION, disposition);
        }
        return Ok(resp.into_response());
    }
    Err(ApiError::FileNotFound)
}
