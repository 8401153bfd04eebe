use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::host_matches;

/// `vimeo.com/<digits>` and the player form `player.vimeo.com/video/<digits>`.
/// Ids are numeric, at most 15 digits.
static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(?:video/)?(\d{1,15})(?:\D|$)").unwrap());

pub fn is_vimeo_host(host: &str) -> bool {
    host_matches(host, "vimeo.com")
}

pub fn extract(url: &Url) -> Option<String> {
    VIDEO_ID
        .captures(url.as_str())
        .map(|caps| caps[1].to_string())
}

pub fn embed_url(id: &str) -> String {
    format!("https://player.vimeo.com/video/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_str(input: &str) -> Option<String> {
        extract(&Url::parse(input).unwrap())
    }

    #[test]
    fn plain_video_url() {
        assert_eq!(
            extract_str("https://vimeo.com/76979871").as_deref(),
            Some("76979871")
        );
    }

    #[test]
    fn player_url() {
        assert_eq!(
            extract_str("https://player.vimeo.com/video/76979871").as_deref(),
            Some("76979871")
        );
    }

    #[test]
    fn query_suffix_is_ignored() {
        assert_eq!(
            extract_str("https://vimeo.com/76979871?share=copy").as_deref(),
            Some("76979871")
        );
    }

    #[test]
    fn non_numeric_paths_do_not_match() {
        assert_eq!(extract_str("https://vimeo.com/channels/staffpicks"), None);
        assert_eq!(extract_str("https://vimeo.com/"), None);
    }

    #[test]
    fn oversized_id_does_not_match() {
        assert_eq!(extract_str("https://vimeo.com/1234567890123456"), None);
    }

    #[test]
    fn embed_url_template() {
        assert_eq!(
            embed_url("76979871"),
            "https://player.vimeo.com/video/76979871"
        );
    }
}
