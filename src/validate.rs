//! Validation and classification of user-supplied download input.
//!
//! Input is either a post URL (`/p/`, `/reel/`, `/tv/`), a profile URL, or a
//! bare username. Validation rejects oversized or obviously hostile input
//! before anything touches the filesystem or the fetcher.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

const MAX_INPUT_CHARS: usize = 500;

const DANGEROUS_PATTERNS: [&str; 5] = ["../", "..\\", "<script", "javascript:", "data:"];

/// Path segments that look like usernames but are not profiles.
const RESERVED_PATHS: [&str; 5] = ["p", "reel", "tv", "stories", "explore"];

static POST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/(?:p|reel|tv)/([A-Za-z0-9_-]+)").expect("valid regex"));
static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(?:p|reel|tv)/([A-Za-z0-9_-]+)").expect("valid regex"));
static PROFILE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/([A-Za-z0-9_.]+)/?$").expect("valid regex"));
static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.]{1,30}$").expect("valid regex"));
static NON_USERNAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.]").expect("valid regex"));

/// What a piece of input refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Post,
    Profile,
    Unknown,
}

/// Reject empty, oversized, or suspicious input.
pub fn validate_input(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        return Err("Input cannot be empty");
    }
    if input.chars().count() > MAX_INPUT_CHARS {
        return Err("Input too long");
    }
    let lowered = input.to_lowercase();
    if DANGEROUS_PATTERNS.iter().any(|p| lowered.contains(p)) {
        return Err("Invalid input detected");
    }
    Ok(())
}

/// Classify input as a post, a profile, or neither.
pub fn detect_input_type(input: &str) -> InputKind {
    let input = input.trim();
    let input = input.strip_prefix('@').unwrap_or(input);

    if POST_URL.is_match(input) {
        return InputKind::Post;
    }
    if let Some(caps) = PROFILE_URL.captures(input) {
        if !RESERVED_PATHS.contains(&&caps[1]) {
            return InputKind::Profile;
        }
    }
    if USERNAME.is_match(input) {
        return InputKind::Profile;
    }
    InputKind::Unknown
}

/// Reduce profile input (`@name`, profile URL, or bare name) to a username.
pub fn sanitize_username(input: &str) -> String {
    let input = input.trim();
    let input = input.strip_prefix('@').unwrap_or(input);

    if input.contains("instagram.com") {
        if let Some(caps) = PROFILE_URL.captures(input) {
            return caps[1].to_owned();
        }
    }
    NON_USERNAME_CHARS.replace_all(input, "").into_owned()
}

/// Extract the post shortcode from a post URL.
pub fn extract_shortcode(url: &str) -> Option<String> {
    SHORTCODE.captures(url).map(|caps| caps[1].to_owned())
}
