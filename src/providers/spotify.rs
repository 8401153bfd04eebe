use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::host_matches;

/// Music resources: `track`, `artist`, `playlist`, `album`, optionally
/// already in `embed/` form.
static MUSIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"spotify\.com/(?:embed/)?(track|artist|playlist|album)/([A-Za-z0-9]{1,25})(?:[^A-Za-z0-9]|$)")
        .unwrap()
});

/// Podcast resources: `episode`, `show`, optionally in `embed-podcast/` form.
/// These build a different embed path, so the match keeps its family.
static PODCAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"spotify\.com/(?:embed-podcast/)?(episode|show)/([A-Za-z0-9]{1,25})(?:[^A-Za-z0-9]|$)")
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyFamily {
    Music,
    Podcast,
}

/// An extracted Spotify resource: which embed family it belongs to, the path
/// kind within that family, and the resource id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyItem {
    pub family: SpotifyFamily,
    pub kind: String,
    pub id: String,
}

impl SpotifyItem {
    pub fn embed_url(&self) -> String {
        let prefix = match self.family {
            SpotifyFamily::Music => "embed",
            SpotifyFamily::Podcast => "embed-podcast",
        };
        format!(
            "https://open.spotify.com/{prefix}/{kind}/{id}",
            kind = self.kind,
            id = self.id
        )
    }
}

pub fn is_spotify_host(host: &str) -> bool {
    host_matches(host, "spotify.com")
}

pub fn extract(url: &Url) -> Option<SpotifyItem> {
    let text = url.as_str();

    if let Some(caps) = MUSIC.captures(text) {
        return Some(SpotifyItem {
            family: SpotifyFamily::Music,
            kind: caps[1].to_string(),
            id: caps[2].to_string(),
        });
    }
    if let Some(caps) = PODCAST.captures(text) {
        return Some(SpotifyItem {
            family: SpotifyFamily::Podcast,
            kind: caps[1].to_string(),
            id: caps[2].to_string(),
        });
    }
    None
}
