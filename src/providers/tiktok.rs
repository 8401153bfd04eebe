use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::host_matches;

/// Canonical numeric video id, 1-30 digits, re-derived from any of the three
/// shapes that carry it: `/v/ID`, `@<user>/video/ID`, `/embed/v2/ID`.
static CANONICAL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:/v/|@[\w.\-]+/video/|/embed/v2/)(\d{1,30})(?:\D|$)").unwrap()
});

/// Short-link token as minted by `vm.tiktok.com`, 6-12 alphanumerics.
static SHORT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/([A-Za-z0-9]{6,12})/?$").unwrap());

pub fn is_tiktok_host(host: &str) -> bool {
    host_matches(host, "tiktok.com")
}

/// A `vm.tiktok.com` short link with a well-formed token. These are
/// recognized as TikTok but carry no video id of their own; resolving one
/// would need a network round-trip, which the engine never performs.
pub fn is_short_link(url: &Url) -> bool {
    url.host_str() == Some("vm.tiktok.com") && SHORT_TOKEN.is_match(url.path())
}

pub fn extract(url: &Url) -> Option<String> {
    if let Some(caps) = CANONICAL_ID.captures(url.as_str()) {
        return Some(caps[1].to_string());
    }
    // Short links stay unresolved; the caller sees extraction failure.
    None
}

pub fn embed_url(id: &str) -> String {
    format!("https://www.tiktok.com/embed/v2/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_str(input: &str) -> Option<String> {
        extract(&Url::parse(input).unwrap())
    }

    #[test]
    fn user_video_shape() {
        assert_eq!(
            extract_str("https://www.tiktok.com/@someuser/video/6718335390845095173").as_deref(),
            Some("6718335390845095173")
        );
    }

    #[test]
    fn legacy_v_shape() {
        assert_eq!(
            extract_str("https://www.tiktok.com/v/6718335390845095173").as_deref(),
            Some("6718335390845095173")
        );
    }

    #[test]
    fn embed_v2_shape() {
        assert_eq!(
            extract_str("https://www.tiktok.com/embed/v2/6718335390845095173").as_deref(),
            Some("6718335390845095173")
        );
    }

    #[test]
    fn short_link_is_recognized_but_unresolvable() {
        let url = Url::parse("https://vm.tiktok.com/ZMabc123/").unwrap();
        assert!(is_short_link(&url));
        assert_eq!(extract(&url), None);
    }

    #[test]
    fn short_token_bounds() {
        assert!(!is_short_link(&Url::parse("https://vm.tiktok.com/abc12").unwrap()));
        assert!(!is_short_link(
            &Url::parse("https://vm.tiktok.com/abcdefghijklm").unwrap()
        ));
        assert!(!is_short_link(
            &Url::parse("https://www.tiktok.com/ZMabc123").unwrap()
        ));
    }

    #[test]
    fn non_numeric_id_does_not_match() {
        assert_eq!(extract_str("https://www.tiktok.com/@someuser/video/notdigits"), None);
    }

    #[test]
    fn embed_url_template() {
        assert_eq!(
            embed_url("6718335390845095173"),
            "https://www.tiktok.com/embed/v2/6718335390845095173"
        );
    }
}
