//! Cleanup service — background expiry of old downloads.
//!
//! DESIGN
//! ======
//! A background task sweeps the download directories on a fixed interval and
//! removes anything whose modification time is older than the configured age:
//! videos and abandoned staging directories in `single/`, working directories
//! in `profiles/`, archives in `zips/`.
//!
//! ERROR HANDLING
//! ==============
//! Failures on individual entries are logged and skipped. A sweep never
//! aborts the loop; the next tick retries whatever was left behind.

use std::path::Path;
use std::time::{Duration, SystemTime};

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::state::DownloadDirs;

#[cfg(test)]
#[path = "cleaner_test.rs"]
mod cleaner_test;

/// Which entries a sweep of one directory may remove.
#[derive(Clone, Copy)]
enum Target {
    /// Files and directories alike.
    Any,
    Dirs,
    ZipFiles,
}

/// Spawn the background cleanup task. Returns a handle for shutdown.
pub fn spawn_cleanup_task(dirs: DownloadDirs, max_age: Duration, interval: Duration) -> JoinHandle<()> {
    info!(max_age_secs = max_age.as_secs(), interval_secs = interval.as_secs(), "download cleanup configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let removed = cleanup_old_files(&dirs, max_age).await;
            if removed > 0 {
                info!(removed, "expired downloads removed");
            }
        }
    })
}

/// Remove expired downloads once. Returns how many entries were removed.
pub async fn cleanup_old_files(dirs: &DownloadDirs, max_age: Duration) -> usize {
    let now = SystemTime::now();
    let mut removed = 0;
    removed += sweep(&dirs.single(), Target::Any, max_age, now).await;
    removed += sweep(&dirs.profiles(), Target::Dirs, max_age, now).await;
    removed += sweep(&dirs.zips(), Target::ZipFiles, max_age, now).await;
    removed
}

async fn sweep(dir: &Path, target: Target, max_age: Duration, now: SystemTime) -> usize {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
        Err(e) => {
            warn!(error = %e, dir = %dir.display(), "cleanup: cannot read directory");
            return 0;
        }
    };

    let mut removed = 0;
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, dir = %dir.display(), "cleanup: directory listing failed");
                break;
            }
        };
        let path = entry.path();
        let Ok(meta) = entry.metadata().await else {
            continue;
        };
        let wanted = match target {
            Target::Any => meta.is_file() || meta.is_dir(),
            Target::Dirs => meta.is_dir(),
            Target::ZipFiles => meta.is_file() && path.extension().is_some_and(|ext| ext == "zip"),
        };
        if !wanted || !is_expired(&meta, max_age, now) {
            continue;
        }

        let result = if meta.is_dir() {
            tokio::fs::remove_dir_all(&path).await
        } else {
            tokio::fs::remove_file(&path).await
        };
        match result {
            Ok(()) => {
                debug!(path = %path.display(), "cleanup: removed");
                removed += 1;
            }
            Err(e) => warn!(error = %e, path = %path.display(), "cleanup: remove failed"),
        }
    }
    removed
}

fn is_expired(meta: &std::fs::Metadata, max_age: Duration, now: SystemTime) -> bool {
    meta.modified()
        .ok()
        .and_then(|modified| now.duration_since(modified).ok())
        .is_some_and(|age| age > max_age)
}
