// SPDX-License-Identifier: MPL-2.0
//! Video identifier value object.

use std::fmt;

/// Substring every playable identifier carries.
pub const PLAYABLE_MARKER: &str = "yoloholo";

/// Substring marking an unedited ("raw") upload.
pub const RAW_MARKER: &str = "-raw-";

/// Opaque name of a video asset on the CDN.
///
/// Any string is accepted; [`VideoIdentifier::is_playable`] decides whether
/// it names something the widget can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VideoIdentifier(String);

impl VideoIdentifier {
    /// Wraps a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier follows the playable naming convention.
    ///
    /// Empty identifiers are never playable.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.0.contains(PLAYABLE_MARKER)
    }

    /// Returns true if the identifier names a raw (unedited) upload.
    #[must_use]
    pub fn is_raw(&self) -> bool {
        self.0.contains(RAW_MARKER)
    }
}

impl fmt::Display for VideoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VideoIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}
