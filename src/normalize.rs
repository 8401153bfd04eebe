use url::Url;

/// Parse raw user input into an absolute http(s) URL.
///
/// Callers frequently paste scheme-less strings (`vimeo.com/12345`, bare
/// domains), so a failed parse is retried exactly once with an `https://`
/// prefix. Anything that still fails, or that parses to a scheme other than
/// http/https, is not a URL as far as the pipeline is concerned.
pub fn normalize(input: &str) -> Option<Url> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(text) {
        if is_web_url(&url) {
            return Some(url);
        }
    }

    // A string already carrying an http(s) scheme gets no second chance.
    if text.starts_with("http://") || text.starts_with("https://") {
        return None;
    }

    Url::parse(&format!("https://{text}"))
        .ok()
        .filter(is_web_url)
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host_str().is_some()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn absolute_urls_pass_through() {
        let url = normalize("https://vimeo.com/76979871").unwrap();
        assert_eq!(url.host_str(), Some("vimeo.com"));
        assert_eq!(url.path(), "/76979871");
    }

    #[test]
    fn scheme_less_input_is_retried_with_https() {
        let url = normalize("vimeo.com/76979871").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("vimeo.com"));
    }

    #[test]
    fn bare_domain_normalizes() {
        let url = normalize("soundcloud.com").unwrap();
        assert_eq!(url.host_str(), Some("soundcloud.com"));
    }

    #[test]
    fn empty_and_whitespace_fail() {
        assert!(normalize("").is_none());
        assert!(normalize("   \t\n").is_none());
    }

    #[test]
    fn non_web_schemes_are_rejected() {
        assert!(normalize("spotify:track:3n3Ppam7vgaVa1iaRUc9Lp").is_none());
        assert!(normalize("ftp://youtube.com/watch?v=dQw4w9WgXcQ").is_none());
    }

    #[test]
    fn garbage_stays_garbage() {
        assert!(normalize("not a url at all").is_none());
        assert!(normalize("http://").is_none());
    }
}
