//! Media fetcher seam.
//!
//! DESIGN
//! ======
//! Retrieving media from the upstream platform is delegated to a
//! [`MediaFetcher`]. The server owns naming, placement, packaging and
//! serving of the results; the fetcher only has to leave videos inside the
//! directory it is handed.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// A fetched single post.
#[derive(Clone, Debug)]
pub struct FetchedPost {
    /// Account that published the post.
    pub owner: String,
    pub caption: Option<String>,
    /// Downloaded video inside the destination directory, if one was produced.
    pub video_path: Option<PathBuf>,
}

/// One video fetched from a profile.
#[derive(Clone, Debug)]
pub struct FetchedVideo {
    /// Downloaded video inside the destination directory.
    pub video_path: PathBuf,
    pub caption: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("This profile is private. Only public profiles are supported.")]
    PrivateProfile,
    #[error("This post does not contain a video")]
    NotVideo,
    #[error("No public videos found on this profile")]
    NoVideos,
    #[error("Failed to download video")]
    MissingVideo,
    #[error("Error: {0}")]
    Upstream(String),
    #[error("Failed to create ZIP: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend that retrieves media from the upstream platform.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Download the video of post `shortcode` into `dest`.
    async fn fetch_post(&self, shortcode: &str, dest: &Path) -> Result<FetchedPost, FetchError>;

    /// Download up to `max_posts` public videos of `username` into `dest`.
    ///
    /// Sidecar files may be left next to the videos; packaging removes them.
    async fn fetch_profile(
        &self,
        username: &str,
        dest: &Path,
        max_posts: usize,
    ) -> Result<Vec<FetchedVideo>, FetchError>;
}
