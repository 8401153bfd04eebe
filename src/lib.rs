//! Media-URL recognition and canonicalization.
//!
//! Given an arbitrary string that claims to reference media on a known
//! platform, the pipeline normalizes it into an absolute URL, classifies the
//! hostname into a provider, runs that provider's shape extractor, and builds
//! a sandboxed embeddable HTTPS URL:
//!
//! ```text
//! normalize -> classify -> extract -> build
//! ```
//!
//! The whole pipeline is a total, pure, synchronous function: no network
//! access, no state between calls, no panics for any input. Failure is
//! expressed through [`EmbedOutcome`], never through errors, because the two
//! failure modes are meaningfully different to callers: an unrecognized
//! input should be rendered as a plain link, while a recognized provider
//! whose URL yields no identifier should render a dead embed frame.

use serde::Serialize;

pub mod normalize;
pub mod providers;

pub use providers::{MediaEmbed, ProviderKind};

/// Terminal outcome of resolving one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedOutcome {
    /// Recognized provider, identifier extracted, embed URL built.
    Embed(String),
    /// Recognized provider, but no accepted URL shape fired.
    /// Callers surface this as the empty-string sentinel.
    RecognizedNoMatch,
    /// Not a URL at all, or a hostname no provider claims.
    /// Callers surface this as the absent sentinel.
    NotEmbeddable,
}

impl EmbedOutcome {
    /// Collapse into the caller-facing sentinel contract: the embed URL,
    /// `Some("")` for recognized-but-unmatched, `None` for not embeddable.
    pub fn into_embed_url(self) -> Option<String> {
        match self {
            EmbedOutcome::Embed(url) => Some(url),
            EmbedOutcome::RecognizedNoMatch => Some(String::new()),
            EmbedOutcome::NotEmbeddable => None,
        }
    }
}

/// Resolve one input string to its outcome.
///
/// `parent_host` is the hostname of the page that will host the embed frame;
/// only the Twitch builder uses it.
pub fn resolve(input: &str, parent_host: &str) -> EmbedOutcome {
    let Some(url) = normalize::normalize(input) else {
        return EmbedOutcome::NotEmbeddable;
    };
    let Some(kind) = ProviderKind::classify(&url) else {
        return EmbedOutcome::NotEmbeddable;
    };
    match kind.extract(&url) {
        Some(media) => EmbedOutcome::Embed(media.embed_url(parent_host)),
        None => EmbedOutcome::RecognizedNoMatch,
    }
}

/// [`resolve`] collapsed to the sentinel contract of [`EmbedOutcome::into_embed_url`].
pub fn embed_url(input: &str, parent_host: &str) -> Option<String> {
    resolve(input, parent_host).into_embed_url()
}
