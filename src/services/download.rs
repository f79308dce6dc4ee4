//! Turn fetched media into served files and `/download` responses.
//!
//! DESIGN
//! ======
//! Every request gets an 8-hex-digit id so concurrent downloads of the same
//! post or profile never collide. Posts are fetched into a per-request
//! staging directory under `single/`; only the renamed video survives.
//! Profiles are fetched into `profiles/{name}_{id}` and packaged into
//! `zips/{name}_{id}.zip`, leaving the working directory to the cleaner.

use tracing::{info, warn};
use uuid::Uuid;
use wire::{DownloadResponse, DownloadResult};

use super::archive::package_profile;
use super::fetcher::{FetchError, MediaFetcher};
use crate::state::AppState;
use crate::validate::sanitize_username;

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

const SINGLE_READY_MESSAGE: &str = "Download ready!";
const PROFILE_READY_MESSAGE: &str = "Profile download ready!";

fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

/// URL under which `/serve` exposes `filename`.
fn serve_url(filename: &str) -> String {
    format!("/serve/{filename}")
}

/// Fetch one post and publish its video under `single/`.
pub async fn download_post(
    state: &AppState,
    fetcher: &dyn MediaFetcher,
    shortcode: &str,
) -> Result<DownloadResponse, FetchError> {
    let id = short_id();
    let staging = state.dirs.single().join(&id);
    tokio::fs::create_dir_all(&staging).await?;

    let result = publish_post(state, fetcher, shortcode, &id, &staging).await;

    // Staging holds fetcher leftovers (metadata, thumbnails) on every path.
    if let Err(e) = tokio::fs::remove_dir_all(&staging).await {
        warn!(error = %e, path = %staging.display(), "failed to remove staging directory");
    }
    result
}

async fn publish_post(
    state: &AppState,
    fetcher: &dyn MediaFetcher,
    shortcode: &str,
    id: &str,
    staging: &std::path::Path,
) -> Result<DownloadResponse, FetchError> {
    let post = fetcher.fetch_post(shortcode, staging).await?;
    let video = post.video_path.ok_or(FetchError::MissingVideo)?;
    if !matches!(tokio::fs::try_exists(&video).await, Ok(true)) {
        return Err(FetchError::MissingVideo);
    }

    let mut owner = sanitize_username(&post.owner);
    if owner.is_empty() {
        owner = "unknown".to_owned();
    }
    let filename = format!("{owner}_{shortcode}_{id}.mp4");
    tokio::fs::rename(&video, state.dirs.single().join(&filename)).await?;
    info!(%shortcode, %filename, "single download ready");

    Ok(DownloadResponse {
        success: Some(true),
        message: SINGLE_READY_MESSAGE.to_owned(),
        result: DownloadResult::Single {
            caption: Some(post.caption.unwrap_or_default()),
            video_url: serve_url(&filename),
            filename,
        },
    })
}

/// Fetch a profile's videos, package them and publish the archive under `zips/`.
pub async fn download_profile(
    state: &AppState,
    fetcher: &dyn MediaFetcher,
    username: &str,
) -> Result<DownloadResponse, FetchError> {
    let id = short_id();
    let work_dir = state.dirs.profiles().join(format!("{username}_{id}"));
    tokio::fs::create_dir_all(&work_dir).await?;

    let max_posts = state.config.max_profile_posts;
    let videos = fetcher.fetch_profile(username, &work_dir, max_posts).await?;

    let filename = format!("{username}_{id}.zip");
    let zip_path = state.dirs.zips().join(&filename);
    let post_count =
        tokio::task::spawn_blocking(move || package_profile(&work_dir, videos, max_posts, &zip_path))
            .await
            .map_err(std::io::Error::other)??;
    info!(%username, post_count, %filename, "profile archive ready");

    Ok(DownloadResponse {
        success: Some(true),
        message: PROFILE_READY_MESSAGE.to_owned(),
        result: DownloadResult::Profile {
            post_count,
            zip_url: serve_url(&filename),
            filename,
        },
    })
}
