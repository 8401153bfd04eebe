use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::host_matches;

/// One pattern covers every historical link shape that carries a video id:
/// `youtu.be/ID`, `/v/ID`, `/u/<user>/ID`, `/embed/ID` and `watch?v=ID`
/// (including `&v=` deeper in a query string), with any preceding path.
/// Ids are exactly 11 characters of `[A-Za-z0-9_-]`; the trailing group keeps
/// an oversized token from matching on its first 11 characters.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w+/|/embed/|[?&]v=)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)")
        .unwrap()
});

pub fn is_youtube_host(host: &str) -> bool {
    host_matches(host, "youtube.com") || host_matches(host, "youtu.be")
}

pub fn extract(url: &Url) -> Option<String> {
    VIDEO_ID
        .captures(url.as_str())
        .map(|caps| caps[1].to_string())
}

pub fn embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}
