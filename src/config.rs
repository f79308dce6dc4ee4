//! Server configuration loaded from environment variables.
//!
//! Every knob has a default, so the server starts with no environment at all.
//! Unparseable values fall back to the default instead of aborting startup.

use std::path::PathBuf;
use std::time::Duration;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DOWNLOADS_DIR: &str = "downloads";
const DEFAULT_RATE_LIMIT_PER_CLIENT: usize = 20;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
const DEFAULT_CLEANUP_MAX_AGE_MINS: u64 = 30;
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 600;
const DEFAULT_MAX_PROFILE_POSTS: usize = 50;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Root holding the `single/`, `profiles/` and `zips/` directories.
    pub downloads_dir: PathBuf,
    pub rate_limit_per_client: usize,
    pub rate_limit_window: Duration,
    /// Downloads older than this are removed by the cleanup task.
    pub cleanup_max_age: Duration,
    pub cleanup_interval: Duration,
    /// Upper bound on videos pulled from one profile.
    pub max_profile_posts: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let downloads_dir = std::env::var("DOWNLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOWNLOADS_DIR));

        Self {
            port: env_parse("PORT", DEFAULT_PORT),
            downloads_dir,
            rate_limit_per_client: env_parse("RATE_LIMIT_PER_CLIENT", DEFAULT_RATE_LIMIT_PER_CLIENT),
            rate_limit_window: Duration::from_secs(env_parse(
                "RATE_LIMIT_WINDOW_SECS",
                DEFAULT_RATE_LIMIT_WINDOW_SECS,
            )),
            cleanup_max_age: Duration::from_secs(
                env_parse("CLEANUP_MAX_AGE_MINS", DEFAULT_CLEANUP_MAX_AGE_MINS) * 60,
            ),
            cleanup_interval: Duration::from_secs(env_parse(
                "CLEANUP_INTERVAL_SECS",
                DEFAULT_CLEANUP_INTERVAL_SECS,
            )),
            max_profile_posts: env_parse("MAX_PROFILE_POSTS", DEFAULT_MAX_PROFILE_POSTS),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            downloads_dir: PathBuf::from(DEFAULT_DOWNLOADS_DIR),
            rate_limit_per_client: DEFAULT_RATE_LIMIT_PER_CLIENT,
            rate_limit_window: Duration::from_secs(DEFAULT_RATE_LIMIT_WINDOW_SECS),
            cleanup_max_age: Duration::from_secs(DEFAULT_CLEANUP_MAX_AGE_MINS * 60),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            max_profile_posts: DEFAULT_MAX_PROFILE_POSTS,
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
