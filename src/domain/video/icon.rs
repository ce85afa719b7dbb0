// SPDX-License-Identifier: MPL-2.0
//! Overlay icon projection.

use super::playback::{PlaybackStatus, ScreenMode};

/// Icon shown on the overlay control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIcon {
    /// Triangle: playback can be started.
    Start,
    /// Square: playback can be stopped.
    Stop,
    /// Circular arrow: playback can be restarted or retried.
    Replay,
    /// No icon while the player is loading.
    None,
}

impl PlaybackIcon {
    /// Returns a lowercase name for logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Replay => "replay",
            Self::None => "none",
        }
    }
}

/// Derives the overlay icon from the screen and the playback status.
///
/// Total over every `(ScreenMode, PlaybackStatus)` pair.
#[must_use]
pub fn project_icon(screen: ScreenMode, status: PlaybackStatus) -> PlaybackIcon {
    match (screen, status) {
        (ScreenMode::Thumbnail, _) => PlaybackIcon::Start,
        (ScreenMode::Player, PlaybackStatus::Playing) => PlaybackIcon::Stop,
        (ScreenMode::Player, PlaybackStatus::Ended | PlaybackStatus::Error) => {
            PlaybackIcon::Replay
        }
        (ScreenMode::Player, PlaybackStatus::Paused) => PlaybackIcon::Start,
        (ScreenMode::Player, PlaybackStatus::Loading) => PlaybackIcon::None,
    }
}
