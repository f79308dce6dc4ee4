//! API error type and its HTTP mapping.
//!
//! Every failure leaves the server as `{"success": false, "error": "..."}` so
//! the page can show the message verbatim.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wire::ErrorResponse;

use crate::rate_limit::RateLimitError;
use crate::services::fetcher::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No URL provided")]
    MissingUrl,
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("Invalid Instagram URL or username")]
    UnrecognisedInput,
    #[error("Too many requests. Please wait a minute and try again.")]
    RateLimited(#[from] RateLimitError),
    #[error("Instagram downloader is not available. Please contact support.")]
    FetcherUnavailable,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("File not found")]
    FileNotFound,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidInput(_) | Self::UnrecognisedInput => StatusCode::BAD_REQUEST,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::FileNotFound => StatusCode::NOT_FOUND,
            Self::FetcherUnavailable | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Fetch(err) => fetch_error_to_status(err),
        }
    }
}

pub(crate) fn fetch_error_to_status(err: &FetchError) -> StatusCode {
    match err {
        FetchError::ProfileNotFound | FetchError::NoVideos => StatusCode::NOT_FOUND,
        FetchError::PrivateProfile => StatusCode::FORBIDDEN,
        FetchError::NotVideo => StatusCode::BAD_REQUEST,
        FetchError::MissingVideo | FetchError::Upstream(_) | FetchError::Archive(_) | FetchError::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
