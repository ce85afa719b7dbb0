// SPDX-License-Identifier: MPL-2.0
//! Client media-decoding capability.
//!
//! Edited videos are published twice: as QuickTime (HEVC with alpha) for
//! Safari-family browsers and as WebM (VP9 with alpha) for everyone else.
//! The choice is a single predicate over the user-agent string.

/// Container format the client decodes for edited videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerSupport {
    /// `.mov` (Safari family).
    QuickTime,
    /// `.webm` (all other clients).
    WebM,
}

impl ContainerSupport {
    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::QuickTime => "mov",
            Self::WebM => "webm",
        }
    }
}

/// Identification of the client the widget runs in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientProfile {
    user_agent: String,
}

impl ClientProfile {
    /// Creates a profile from a user-agent string.
    #[must_use]
    pub fn from_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    /// Returns the user-agent string.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns true if the client belongs to the Safari family.
    #[must_use]
    pub fn is_safari(&self) -> bool {
        is_safari(&self.user_agent)
    }

    /// Container format for edited videos on this client.
    #[must_use]
    pub fn container_support(&self) -> ContainerSupport {
        if self.is_safari() {
            ContainerSupport::QuickTime
        } else {
            ContainerSupport::WebM
        }
    }
}

/// Safari detection, case-insensitive.
///
/// True when `safari` occurs and neither `chrome` nor `android` starts
/// before its first occurrence. Chrome and Android browsers also
/// advertise `Safari` in their user agent, always after their own token.
#[must_use]
pub fn is_safari(user_agent: &str) -> bool {
    let lower = user_agent.to_ascii_lowercase();
    match lower.find("safari") {
        Some(at) => {
            let before = &lower[..at];
            !before.contains("chrome") && !before.contains("android")
        }
        None => false,
    }
}
