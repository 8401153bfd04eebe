use serde::Serialize;
use url::Url;

pub mod giphy;
pub mod soundcloud;
pub mod spotify;
pub mod tiktok;
pub mod twitch;
pub mod vimeo;
pub mod youtube;

/// The closed set of media platforms the engine recognizes.
///
/// Classification is a pure function of the hostname; the provider predicates
/// are disjoint, so at most one tag matches a given host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    YouTube,
    Vimeo,
    TikTok,
    Giphy,
    Spotify,
    SoundCloud,
    Twitch,
}

impl ProviderKind {
    /// Map a URL's hostname to a provider tag, or `None` for anything else.
    pub fn classify(url: &Url) -> Option<Self> {
        let host = url.host_str()?.to_ascii_lowercase();

        if youtube::is_youtube_host(&host) {
            Some(ProviderKind::YouTube)
        } else if vimeo::is_vimeo_host(&host) {
            Some(ProviderKind::Vimeo)
        } else if tiktok::is_tiktok_host(&host) {
            Some(ProviderKind::TikTok)
        } else if giphy::is_giphy_host(&host) {
            Some(ProviderKind::Giphy)
        } else if spotify::is_spotify_host(&host) {
            Some(ProviderKind::Spotify)
        } else if soundcloud::is_soundcloud_host(&host) {
            Some(ProviderKind::SoundCloud)
        } else if twitch::is_twitch_host(&host) {
            Some(ProviderKind::Twitch)
        } else {
            None
        }
    }

    /// Run this provider's shape extractor against the full URL text.
    pub fn extract(self, url: &Url) -> Option<MediaEmbed> {
        match self {
            ProviderKind::YouTube => youtube::extract(url).map(|id| MediaEmbed::YouTube { id }),
            ProviderKind::Vimeo => vimeo::extract(url).map(|id| MediaEmbed::Vimeo { id }),
            ProviderKind::TikTok => tiktok::extract(url).map(|id| MediaEmbed::TikTok { id }),
            ProviderKind::Giphy => giphy::extract(url).map(|id| MediaEmbed::Giphy { id }),
            ProviderKind::Spotify => spotify::extract(url).map(MediaEmbed::Spotify),
            ProviderKind::SoundCloud => {
                soundcloud::extract(url).map(|resource| MediaEmbed::SoundCloud { resource })
            }
            ProviderKind::Twitch => twitch::extract(url).map(MediaEmbed::Twitch),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::YouTube => "youtube",
            ProviderKind::Vimeo => "vimeo",
            ProviderKind::TikTok => "tiktok",
            ProviderKind::Giphy => "giphy",
            ProviderKind::Spotify => "spotify",
            ProviderKind::SoundCloud => "soundcloud",
            ProviderKind::Twitch => "twitch",
        }
    }
}

/// Hostname suffix predicate with a dot boundary.
///
/// `youtube.com` matches `www.youtube.com` but not `notyoutube.com`, and the
/// trailing anchor also rejects `youtube.com.attacker.example`.
pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// A recognized piece of media with its extracted canonical identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEmbed {
    YouTube { id: String },
    Vimeo { id: String },
    TikTok { id: String },
    Giphy { id: String },
    Spotify(spotify::SpotifyItem),
    SoundCloud { resource: String },
    Twitch(twitch::TwitchTarget),
}

impl MediaEmbed {
    pub fn provider(&self) -> ProviderKind {
        match self {
            MediaEmbed::YouTube { .. } => ProviderKind::YouTube,
            MediaEmbed::Vimeo { .. } => ProviderKind::Vimeo,
            MediaEmbed::TikTok { .. } => ProviderKind::TikTok,
            MediaEmbed::Giphy { .. } => ProviderKind::Giphy,
            MediaEmbed::Spotify(_) => ProviderKind::Spotify,
            MediaEmbed::SoundCloud { .. } => ProviderKind::SoundCloud,
            MediaEmbed::Twitch(_) => ProviderKind::Twitch,
        }
    }

    /// Build the canonical embeddable HTTPS URL for this media.
    ///
    /// `parent_host` is the hostname of the page that will host the embed
    /// frame; Twitch refuses to play without it as a `parent=` query
    /// parameter. The other providers do not use it.
    pub fn embed_url(&self, parent_host: &str) -> String {
        match self {
            MediaEmbed::YouTube { id } => youtube::embed_url(id),
            MediaEmbed::Vimeo { id } => vimeo::embed_url(id),
            MediaEmbed::TikTok { id } => tiktok::embed_url(id),
            MediaEmbed::Giphy { id } => giphy::embed_url(id),
            MediaEmbed::Spotify(item) => item.embed_url(),
            MediaEmbed::SoundCloud { resource } => soundcloud::embed_url(resource),
            MediaEmbed::Twitch(target) => target.embed_url(parent_host),
        }
    }
}
