use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::host_matches;

/// `gifs/`, `media/`, `embed/` or `clips/` followed by an optional
/// hyphen-joined title slug; the id is the trailing run of up to 20
/// alphanumerics (`giphy.com/gifs/funny-cat-3o7aD2d7hy9ktXNDP2`).
static GIF_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"giphy\.com/(?:gifs|media|embed|clips)/(?:[A-Za-z0-9-]+-)?([A-Za-z0-9]{1,20})(?:[^A-Za-z0-9]|$)")
        .unwrap()
});

pub fn is_giphy_host(host: &str) -> bool {
    host_matches(host, "giphy.com")
}

pub fn extract(url: &Url) -> Option<String> {
    GIF_ID
        .captures(url.as_str())
        .map(|caps| caps[1].to_string())
}

pub fn embed_url(id: &str) -> String {
    format!("https://giphy.com/embed/{id}")
}
