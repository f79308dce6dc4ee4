//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds configuration, the download directory layout, the optional media
//! fetcher, and the per-client rate limiter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;
use crate::services::fetcher::MediaFetcher;

// =============================================================================
// DOWNLOAD DIRECTORIES
// =============================================================================

/// Layout of the downloads root: `single/`, `profiles/`, `zips/`.
#[derive(Clone, Debug)]
pub struct DownloadDirs {
    root: PathBuf,
}

impl DownloadDirs {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Individual videos served by `/serve`.
    #[must_use]
    pub fn single(&self) -> PathBuf {
        self.root.join("single")
    }

    /// Per-request working directories for profile fetches.
    #[must_use]
    pub fn profiles(&self) -> PathBuf {
        self.root.join("profiles")
    }

    /// Finished profile archives served by `/serve`.
    #[must_use]
    pub fn zips(&self) -> PathBuf {
        self.root.join("zips")
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create all three directories if missing.
    pub async fn ensure(&self) -> std::io::Result<()> {
        for dir in [self.single(), self.profiles(), self.zips()] {
            tokio::fs::create_dir_all(dir).await?;
        }
        Ok(())
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub dirs: DownloadDirs,
    /// Media fetcher. `None` when no backend is wired in; `/download` then
    /// reports the downloader as unavailable.
    pub fetcher: Option<Arc<dyn MediaFetcher>>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, fetcher: Option<Arc<dyn MediaFetcher>>) -> Self {
        let dirs = DownloadDirs::new(&config.downloads_dir);
        let rate_limiter = RateLimiter::new(config.rate_limit_per_client, config.rate_limit_window);
        Self { config: Arc::new(config), dirs, fetcher, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::fetcher::{FetchError, FetchedPost, FetchedVideo};
    use async_trait::async_trait;

    /// What the mock fetcher does when called.
    #[derive(Clone, Debug)]
    pub enum MockOutcome {
        /// Write a video (plus a metadata sidecar) into the destination.
        Video { owner: String, caption: Option<String> },
        /// Report success without producing a file.
        NoFile,
        /// Write `post_count` videos, each in its own directory with
        /// metadata and thumbnail sidecars. Every third video has no caption.
        Profile { post_count: u64 },
        Fail(fn() -> FetchError),
    }

    pub struct MockFetcher {
        pub outcome: MockOutcome,
    }

    impl MockFetcher {
        #[must_use]
        pub fn shared(outcome: MockOutcome) -> Arc<dyn MediaFetcher> {
            Arc::new(Self { outcome })
        }
    }

    #[async_trait]
    impl MediaFetcher for MockFetcher {
        async fn fetch_post(&self, shortcode: &str, dest: &Path) -> Result<FetchedPost, FetchError> {
            match &self.outcome {
                MockOutcome::Video { owner, caption } => {
                    let video = dest.join(format!("{shortcode}.mp4"));
                    tokio::fs::write(&video, b"video").await?;
                    tokio::fs::write(dest.join(format!("{shortcode}.json")), b"{}").await?;
                    Ok(FetchedPost { owner: owner.clone(), caption: caption.clone(), video_path: Some(video) })
                }
                MockOutcome::NoFile => {
                    Ok(FetchedPost { owner: "someone".to_owned(), caption: None, video_path: None })
                }
                MockOutcome::Profile { .. } => Err(FetchError::Upstream("not a post".to_owned())),
                MockOutcome::Fail(make) => Err(make()),
            }
        }

        async fn fetch_profile(
            &self,
            _username: &str,
            dest: &Path,
            max_posts: usize,
        ) -> Result<Vec<FetchedVideo>, FetchError> {
            match &self.outcome {
                MockOutcome::Profile { post_count } => {
                    let count = usize::try_from(*post_count).unwrap_or(usize::MAX).min(max_posts);
                    let mut videos = Vec::with_capacity(count);
                    for i in 0..count {
                        let post_dir = dest.join(format!("post{i}"));
                        tokio::fs::create_dir_all(&post_dir).await?;
                        let video = post_dir.join(format!("clip{i}.mp4"));
                        tokio::fs::write(&video, b"video").await?;
                        tokio::fs::write(post_dir.join(format!("clip{i}.json.xz")), b"{}").await?;
                        tokio::fs::write(post_dir.join(format!("clip{i}.jpg")), b"jpg").await?;
                        tokio::fs::write(post_dir.join(format!("clip{i}.txt")), b"caption").await?;
                        let caption = (i % 3 != 0).then(|| format!("caption {i}"));
                        videos.push(FetchedVideo { video_path: video, caption });
                    }
                    Ok(videos)
                }
                MockOutcome::Fail(make) => Err(make()),
                MockOutcome::Video { .. } | MockOutcome::NoFile => {
                    Err(FetchError::Upstream("not a profile".to_owned()))
                }
            }
        }
    }

    /// Create a test `AppState` rooted at `root` with the given fetcher.
    #[must_use]
    pub fn test_app_state(root: &Path, fetcher: Option<Arc<dyn MediaFetcher>>) -> AppState {
        let config = ServerConfig { downloads_dir: root.to_path_buf(), ..ServerConfig::default() };
        AppState::new(config, fetcher)
    }
}
