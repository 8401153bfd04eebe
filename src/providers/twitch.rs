use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::host_matches;

// Twitch URLs are internally ambiguous: a bare path segment can be a channel
// name, but the same position also hosts `/videos/`, `/collections/` and
// `/<channel>/clip/` shapes, and the player host carries everything in query
// parameters. The shapes below are checked in a fixed order so that a bare
// channel name never masks a clip or collection:
//
//   1. `/videos/<id>`            (8-12 digits)
//   2. `?video=<id>`             (8-12 digits)
//   3. `?channel=<name>`
//   4. `/<channel>/clip/<slug>`
//   5. `?clip=<slug>`            (player/clips embed form)
//   6. `/collections/<id>` or `?collection=<id>` (optional `&video=`)
//   7. bare `/<name>` channel, only when no clip/collection indicator remains

static VIDEO_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"twitch\.tv/videos/(\d{8,12})(?:\D|$)").unwrap());

static VIDEO_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]video=(\d{8,12})(?:\D|$)").unwrap());

static CHANNEL_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]channel=([A-Za-z0-9_]{1,30})(?:[^A-Za-z0-9_]|$)").unwrap());

static CHANNEL_CLIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"twitch\.tv/[A-Za-z0-9_]{1,30}/clip/([A-Za-z0-9_-]{1,80})(?:[^A-Za-z0-9_-]|$)")
        .unwrap()
});

static CLIP_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]clip=([A-Za-z0-9_-]{1,80})(?:[^A-Za-z0-9_-]|$)").unwrap());

static COLLECTION_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"twitch\.tv/collections/([A-Za-z0-9]{10,20})(?:[^A-Za-z0-9]|$)").unwrap()
});

static COLLECTION_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]collection=([A-Za-z0-9]{10,20})(?:&video=(\d{1,12}))?(?:[^A-Za-z0-9]|$)")
        .unwrap()
});

static CHANNEL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,30}$").unwrap());

/// What a Twitch URL resolved to, one variant per embed surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwitchTarget {
    Video { id: String },
    Channel { name: String },
    Clip { slug: String },
    Collection { id: String, video: Option<String> },
}

impl TwitchTarget {
    /// Embed URL for this target. Twitch requires `parent=` to name the host
    /// page and refuses autoplaying embeds, so both are appended always.
    pub fn embed_url(&self, parent_host: &str) -> String {
        let base = match self {
            TwitchTarget::Video { id } => {
                format!("https://player.twitch.tv/?video={id}")
            }
            TwitchTarget::Channel { name } => {
                format!("https://player.twitch.tv/?channel={name}")
            }
            TwitchTarget::Collection { id, video: None } => {
                format!("https://player.twitch.tv/?collection={id}")
            }
            TwitchTarget::Collection {
                id,
                video: Some(video),
            } => {
                format!("https://player.twitch.tv/?collection={id}&video={video}")
            }
            TwitchTarget::Clip { slug } => {
                format!("https://clips.twitch.tv/embed?clip={slug}")
            }
        };
        format!("{base}&autoplay=false&parent={parent_host}")
    }
}

pub fn is_twitch_host(host: &str) -> bool {
    host_matches(host, "twitch.tv")
}

pub fn extract(url: &Url) -> Option<TwitchTarget> {
    let text = url.as_str();

    if let Some(caps) = VIDEO_PATH.captures(text) {
        return Some(TwitchTarget::Video {
            id: caps[1].to_string(),
        });
    }
    // A collection may carry a starting `&video=`; that video id belongs to
    // the collection shape, not the plain video shape.
    if let Some(caps) = VIDEO_QUERY.captures(text) {
        if !COLLECTION_QUERY.is_match(text) {
            return Some(TwitchTarget::Video {
                id: caps[1].to_string(),
            });
        }
    }
    if let Some(caps) = CHANNEL_QUERY.captures(text) {
        return Some(TwitchTarget::Channel {
            name: caps[1].to_string(),
        });
    }
    if let Some(caps) = CHANNEL_CLIP.captures(text) {
        return Some(TwitchTarget::Clip {
            slug: caps[1].to_string(),
        });
    }
    if let Some(caps) = CLIP_QUERY.captures(text) {
        return Some(TwitchTarget::Clip {
            slug: caps[1].to_string(),
        });
    }
    if let Some(caps) = COLLECTION_PATH.captures(text) {
        return Some(TwitchTarget::Collection {
            id: caps[1].to_string(),
            video: None,
        });
    }
    if let Some(caps) = COLLECTION_QUERY.captures(text) {
        return Some(TwitchTarget::Collection {
            id: caps[1].to_string(),
            video: caps.get(2).map(|m| m.as_str().to_string()),
        });
    }

    bare_channel(url)
}

/// A single-segment path is a channel name, but only when nothing in the URL
/// hints at a clip or collection that failed its own stricter pattern.
fn bare_channel(url: &Url) -> Option<TwitchTarget> {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let [name] = segments.as_slice() else {
        return None;
    };
    if !CHANNEL_NAME.is_match(name) {
        return None;
    }
    // Reserved path roots are never channel names.
    if matches!(*name, "videos" | "collections" | "embed" | "directory") {
        return None;
    }
    let has_indicator = url
        .query_pairs()
        .any(|(key, _)| matches!(&*key, "clip" | "collection" | "video" | "channel"));
    if has_indicator {
        return None;
    }

    Some(TwitchTarget::Channel {
        name: (*name).to_string(),
    })
}
