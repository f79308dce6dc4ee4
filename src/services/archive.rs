//! Profile packaging: captions index, metadata stripping, zip archive.
//!
//! DESIGN
//! ======
//! The fetcher leaves videos (and whatever sidecar files it produced) in a
//! per-request working directory. Packaging keeps the videos, writes one
//! `captions.txt` describing them, drops metadata and thumbnails, and
//! deflates what is left into the archive handed out by `/serve`.
//!
//! Everything here is blocking filesystem work; callers run it on the
//! blocking pool.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use super::fetcher::{FetchError, FetchedVideo};

#[cfg(test)]
#[path = "archive_test.rs"]
mod archive_test;

pub const CAPTIONS_FILE: &str = "captions.txt";

const CAPTION_SEPARATOR_WIDTH: usize = 80;

/// Package the fetched `videos` in `work_dir` into `zip_path`.
///
/// Videos missing on disk are skipped and at most `max_posts` are kept.
/// Returns the number of videos archived; nothing is written when that
/// number is zero.
///
/// # Errors
///
/// Returns [`FetchError::NoVideos`] when no video survives, or an I/O or
/// archive error if packaging fails. A partially written archive is removed.
pub fn package_profile(
    work_dir: &Path,
    mut videos: Vec<FetchedVideo>,
    max_posts: usize,
    zip_path: &Path,
) -> Result<u64, FetchError> {
    videos.retain(|v| v.video_path.is_file());
    videos.truncate(max_posts);
    if videos.is_empty() {
        return Err(FetchError::NoVideos);
    }

    write_captions(work_dir, &videos)?;
    strip_metadata(work_dir)?;
    if let Err(e) = build_zip(work_dir, zip_path) {
        let _ = std::fs::remove_file(zip_path);
        return Err(e);
    }
    Ok(u64::try_from(videos.len()).unwrap_or(u64::MAX))
}

/// Write `captions.txt` with one block per video.
fn write_captions(dir: &Path, videos: &[FetchedVideo]) -> std::io::Result<()> {
    let mut out = String::new();
    for video in videos {
        let name = video.video_path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        out.push_str(&format!("File: {name}\n"));
        out.push_str(&format!("Caption: {}\n", video.caption.as_deref().unwrap_or_default()));
        out.push_str(&"-".repeat(CAPTION_SEPARATOR_WIDTH));
        out.push_str("\n\n");
    }
    std::fs::write(dir.join(CAPTIONS_FILE), out)
}

/// Metadata sidecars and thumbnails that never go into an archive.
fn is_metadata(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let lowered = name.to_ascii_lowercase();
    lowered.contains(".json")
        || lowered.ends_with(".jpg")
        || (lowered.ends_with(".txt") && name != CAPTIONS_FILE)
}

fn strip_metadata(dir: &Path) -> std::io::Result<()> {
    for path in files_under(dir)? {
        if is_metadata(&path) {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Every regular file below `dir`, sorted.
fn files_under(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Deflate every file below `source` into `zip_path`, named relative to `source`.
fn build_zip(source: &Path, zip_path: &Path) -> Result<(), FetchError> {
    let mut zip = zip::ZipWriter::new(File::create(zip_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files_under(source)? {
        let Ok(relative) = path.strip_prefix(source) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        zip.start_file(name, options)?;
        let mut file = File::open(&path)?;
        std::io::copy(&mut file, &mut zip)?;
    }
    zip.finish()?.flush()?;
    Ok(())
}
