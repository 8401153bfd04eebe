use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::host_matches;

/// `soundcloud.com/<user>/<track>` or `soundcloud.com/<user>/sets/<playlist>`.
/// Segments are lowercase permalink slugs; the whole resource path, host
/// included, is captured verbatim for the player widget.
static RESOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(soundcloud\.com/[a-z0-9_-]+/(?:sets/)?[a-z0-9_-]+)").unwrap()
});

pub fn is_soundcloud_host(host: &str) -> bool {
    host_matches(host, "soundcloud.com")
}

pub fn extract(url: &Url) -> Option<String> {
    RESOURCE
        .captures(url.as_str())
        .map(|caps| caps[1].to_string())
}

pub fn embed_url(resource: &str) -> String {
    format!(
        "https://w.soundcloud.com/player/?url=https://{resource}?hide_related=true&show_comments=false"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_str(input: &str) -> Option<String> {
        extract(&Url::parse(input).unwrap())
    }

    #[test]
    fn track_url() {
        assert_eq!(
            extract_str("https://soundcloud.com/forss/flickermood").as_deref(),
            Some("soundcloud.com/forss/flickermood")
        );
    }

    #[test]
    fn playlist_url() {
        assert_eq!(
            extract_str("https://soundcloud.com/forss/sets/soulhack").as_deref(),
            Some("soundcloud.com/forss/sets/soulhack")
        );
    }

    #[test]
    fn query_suffix_is_dropped() {
        assert_eq!(
            extract_str("https://soundcloud.com/forss/flickermood?in=someone/sets/x").as_deref(),
            Some("soundcloud.com/forss/flickermood")
        );
    }

    #[test]
    fn user_profile_alone_does_not_match() {
        assert_eq!(extract_str("https://soundcloud.com/someuser"), None);
        assert_eq!(extract_str("https://soundcloud.com/"), None);
    }

    #[test]
    fn player_widget_template() {
        assert_eq!(
            embed_url("soundcloud.com/forss/flickermood"),
            "https://w.soundcloud.com/player/?url=https://soundcloud.com/forss/flickermood?hide_related=true&show_comments=false"
        );
    }
}
