//! Shared request/response model for the `/download` endpoint.
//!
//! This crate owns the JSON shapes exchanged between `reeldrop` (server) and
//! `client`. Success bodies carry a `type` tag that selects the result view;
//! failure bodies carry an optional `error` string.

use serde::{Deserialize, Serialize};

/// Path of the download endpoint.
pub const DOWNLOAD_PATH: &str = "/download";

/// Body of `POST /download`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Post URL, profile URL, or bare username as typed by the user.
    pub url: String,
}

/// Body of a successful `POST /download` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DownloadResponse {
    /// Always `true` when emitted by the server; ignored by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable status line shown on success.
    pub message: String,
    /// Result payload, tagged by `type`.
    #[serde(flatten)]
    pub result: DownloadResult,
}

/// Result payload of a successful download.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DownloadResult {
    /// Exactly one media item.
    Single {
        /// Post caption, if the post has one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        /// URL the video can be fetched from.
        video_url: String,
        /// Suggested file name for the saved video.
        filename: String,
    },
    /// A batch of items bundled as a zip archive.
    Profile {
        /// Number of posts included in the archive.
        post_count: u64,
        /// URL the archive can be fetched from.
        zip_url: String,
        /// Suggested file name for the saved archive.
        filename: String,
    },
    /// A `type` this client does not know how to render.
    #[serde(other)]
    Unknown,
}

/// Body of a failed `POST /download` (or `/serve`) response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Build a server error body with `success: false`.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: Some(false), error: Some(error.into()) }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
