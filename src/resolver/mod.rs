// SPDX-License-Identifier: MPL-2.0
//! Asset resolver: maps a video identifier to its CDN URLs.
//!
//! Resolution is a pure function of the identifier, the client profile and
//! an optional extension override. No network I/O happens here; the
//! resolver only builds URLs.
//!
//! # Example
//!
//! ```
//! use holo_video::domain::video::VideoIdentifier;
//! use holo_video::resolver::{self, ClientProfile};
//!
//! let id = VideoIdentifier::new("yoloholo-raw-abc");
//! let urls = resolver::resolve(&id, &ClientProfile::default(), None);
//! assert_eq!(
//!     urls.source.as_deref(),
//!     Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-raw-abc.mp4")
//! );
//! ```

mod capability;

pub use capability::{is_safari, ClientProfile, ContainerSupport};

use crate::domain::video::VideoIdentifier;

/// CDN directory holding every video notification asset.
pub const DEFAULT_CDN_BASE: &str = "https://sportsbet-io.imgix.net/video-notifications/";

/// Extension used for raw uploads when no override is given.
pub const DEFAULT_RAW_EXTENSION: &str = "mp4";

/// Appended to the identifier to name its thumbnail.
pub const THUMBNAIL_SUFFIX: &str = "-thumb";

/// Image extension of thumbnails.
pub const THUMBNAIL_EXTENSION: &str = "webp";

/// URLs derived for one identifier.
///
/// Both fields are `None` when the identifier is not playable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetUrls {
    /// Playable media URL.
    pub source: Option<String>,
    /// Still image shown before playback.
    pub thumbnail: Option<String>,
}

impl AssetUrls {
    /// Returns true if there is something to play.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.source.is_some()
    }
}

/// Builds asset URLs under a CDN base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    cdn_base: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_CDN_BASE)
    }
}

impl AssetResolver {
    /// Creates a resolver for the given CDN base URL.
    ///
    /// A trailing slash is added if missing.
    #[must_use]
    pub fn new(cdn_base: impl Into<String>) -> Self {
        let mut cdn_base = cdn_base.into();
        if !cdn_base.ends_with('/') {
            cdn_base.push('/');
        }
        Self { cdn_base }
    }

    /// Returns the CDN base URL, always ending with `/`.
    #[must_use]
    pub fn cdn_base(&self) -> &str {
        &self.cdn_base
    }

    /// Resolves the source and thumbnail URLs for `id`.
    ///
    /// `extension` only applies to raw uploads.
    #[must_use]
    pub fn resolve(
        &self,
        id: &VideoIdentifier,
        client: &ClientProfile,
        extension: Option<&str>,
    ) -> AssetUrls {
        if !id.is_playable() {
            return AssetUrls::default();
        }

        let source_extension = if id.is_raw() {
            extension
                .map(|ext| ext.trim_start_matches('.'))
                .filter(|ext| !ext.is_empty())
                .unwrap_or(DEFAULT_RAW_EXTENSION)
        } else {
            client.container_support().extension()
        };

        AssetUrls {
            source: Some(self.asset_url(id, "", source_extension)),
            thumbnail: Some(self.asset_url(id, THUMBNAIL_SUFFIX, THUMBNAIL_EXTENSION)),
        }
    }

    fn asset_url(&self, id: &VideoIdentifier, suffix: &str, extension: &str) -> String {
        format!("{}{}{}.{}", self.cdn_base, id.as_str(), suffix, extension)
    }
}

/// Resolves `id` against the default CDN.
#[must_use]
pub fn resolve(id: &VideoIdentifier, client: &ClientProfile, extension: Option<&str>) -> AssetUrls {
    AssetResolver::default().resolve(id, client, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAFARI: &str = "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 Version/17.4 Safari/605.1.15";
    const CHROME: &str = "Mozilla/5.0 (X11) AppleWebKit/537.36 Chrome/124.0 Safari/537.36";

    fn id(s: &str) -> VideoIdentifier {
        VideoIdentifier::new(s)
    }

    #[test]
    fn invalid_identifier_resolves_to_nothing() {
        let urls = resolve(&id("not-a-real-id"), &ClientProfile::default(), None);
        assert_eq!(urls, AssetUrls::default());
        assert!(!urls.is_playable());

        let urls = resolve(&id(""), &ClientProfile::default(), Some("mov"));
        assert!(urls.source.is_none());
        assert!(urls.thumbnail.is_none());
    }

    #[test]
    fn edited_video_uses_client_container() {
        let safari = resolve(&id("yoloholo-abc"), &ClientProfile::from_user_agent(SAFARI), None);
        assert_eq!(
            safari.source.as_deref(),
            Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-abc.mov")
        );

        let chrome = resolve(&id("yoloholo-abc"), &ClientProfile::from_user_agent(CHROME), None);
        assert_eq!(
            chrome.source.as_deref(),
            Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-abc.webm")
        );
    }

    #[test]
    fn edited_video_ignores_extension_override() {
        let urls = resolve(
            &id("yoloholo-abc"),
            &ClientProfile::from_user_agent(CHROME),
            Some("mkv"),
        );
        assert!(urls.source.as_deref().is_some_and(|s| s.ends_with(".webm")));
    }

    #[test]
    fn raw_video_ignores_client_capability() {
        for ua in [SAFARI, CHROME, ""] {
            let urls = resolve(&id("yoloholo-raw-abc"), &ClientProfile::from_user_agent(ua), None);
            assert_eq!(
                urls.source.as_deref(),
                Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-raw-abc.mp4")
            );
        }
    }

    #[test]
    fn raw_video_honours_extension_override() {
        let client = ClientProfile::default();
        let urls = resolve(&id("yoloholo-raw-abc"), &client, Some("mov"));
        assert!(urls.source.as_deref().is_some_and(|s| s.ends_with("yoloholo-raw-abc.mov")));

        let dotted = resolve(&id("yoloholo-raw-abc"), &client, Some(".mov"));
        assert_eq!(dotted, urls);

        let empty = resolve(&id("yoloholo-raw-abc"), &client, Some(""));
        assert!(empty.source.as_deref().is_some_and(|s| s.ends_with(".mp4")));
    }

    #[test]
    fn thumbnail_appends_suffix_and_webp() {
        let urls = resolve(&id("yoloholo-abc"), &ClientProfile::default(), None);
        assert_eq!(
            urls.thumbnail.as_deref(),
            Some("https://sportsbet-io.imgix.net/video-notifications/yoloholo-abc-thumb.webp")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let client = ClientProfile::from_user_agent(SAFARI);
        let first = resolve(&id("yoloholo-xyz"), &client, None);
        for _ in 0..10 {
            assert_eq!(resolve(&id("yoloholo-xyz"), &client, None), first);
        }
    }

    #[test]
    fn custom_cdn_base_gets_trailing_slash() {
        let resolver = AssetResolver::new("https://cdn.example.test/videos");
        assert_eq!(resolver.cdn_base(), "https://cdn.example.test/videos/");
        let urls = resolver.resolve(&id("yoloholo-abc"), &ClientProfile::default(), None);
        assert_eq!(
            urls.source.as_deref(),
            Some("https://cdn.example.test/videos/yoloholo-abc.webm")
        );
    }
}
