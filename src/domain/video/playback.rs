// SPDX-License-Identifier: MPL-2.0
//! Playback vocabulary: raw media events and the states derived from them.
//!
//! The underlying media element emits a noisy stream of [`RawMediaEvent`]s.
//! The controller records the last meaningful one as a [`PlaybackState`] and
//! projects it onto the small, UI-facing [`PlaybackStatus`].

use std::fmt;
use std::str::FromStr;

/// Error code attached to a media `error` event.
///
/// Mirrors the numeric codes of the HTML `MediaError` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorCode {
    /// Fetching was aborted by the user agent (code 1).
    Aborted,
    /// A network error interrupted the download (code 2).
    Network,
    /// The media could not be decoded (code 3).
    Decode,
    /// The source format is not supported (code 4).
    SourceNotSupported,
}

impl MediaErrorCode {
    /// Maps an HTML `MediaError.code` value to a code, if known.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(Self::Aborted),
            2 => Some(Self::Network),
            3 => Some(Self::Decode),
            4 => Some(Self::SourceNotSupported),
            _ => None,
        }
    }

    /// Returns the numeric HTML `MediaError.code` value.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Aborted => 1,
            Self::Network => 2,
            Self::Decode => 3,
            Self::SourceNotSupported => 4,
        }
    }
}

/// A lifecycle notification delivered by the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMediaEvent {
    /// The element is fetching media data.
    Progress,
    /// Playback started or resumed.
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end of the media.
    Ended,
    /// Enough data is available to start playing.
    CanPlay,
    /// Enough data is available to play to the end without stalling.
    CanPlayThrough,
    /// The playback position changed.
    TimeUpdate {
        /// Current playback position in seconds.
        current_time_secs: f64,
    },
    /// The element failed to fetch or decode the media.
    Error {
        /// Structured error code, when the element provides one.
        code: Option<MediaErrorCode>,
        /// Element-provided description.
        message: String,
    },
}

impl RawMediaEvent {
    /// Returns the DOM event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Ended => "ended",
            Self::CanPlay => "canplay",
            Self::CanPlayThrough => "canplaythrough",
            Self::TimeUpdate { .. } => "timeupdate",
            Self::Error { .. } => "error",
        }
    }

    /// Returns the state this event records, if any.
    ///
    /// Errors are a side channel and never become a state. A `timeupdate`
    /// at position zero carries no information and is ignored.
    #[must_use]
    pub fn recorded_state(&self) -> Option<PlaybackState> {
        match self {
            Self::Progress => Some(PlaybackState::Progress),
            Self::Play => Some(PlaybackState::Play),
            Self::Pause => Some(PlaybackState::Pause),
            Self::Ended => Some(PlaybackState::Ended),
            Self::CanPlay | Self::CanPlayThrough => Some(PlaybackState::CanPlay),
            Self::TimeUpdate { current_time_secs } if *current_time_secs > 0.0 => {
                Some(PlaybackState::TimeUpdate)
            }
            Self::TimeUpdate { .. } | Self::Error { .. } => None,
        }
    }

    /// Returns true for `canplay` and `canplaythrough`.
    #[must_use]
    pub fn signals_readiness(&self) -> bool {
        matches!(self, Self::CanPlay | Self::CanPlayThrough)
    }
}

/// Error returned when parsing a [`RawMediaEvent`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEventError(pub String);

impl fmt::Display for ParseEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown media event: {}", self.0)
    }
}

impl std::error::Error for ParseEventError {}

impl FromStr for RawMediaEvent {
    type Err = ParseEventError;

    /// Parses a DOM event name.
    ///
    /// Two suffixed forms carry a payload: `timeupdate@<secs>` and
    /// `error:<code>`. Bare `timeupdate` means position zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();

        if let Some(secs) = lower.strip_prefix("timeupdate@") {
            let current_time_secs = secs
                .parse::<f64>()
                .map_err(|_| ParseEventError(s.to_string()))?;
            return Ok(Self::TimeUpdate { current_time_secs });
        }

        if let Some(code) = lower.strip_prefix("error:") {
            let code = code
                .parse::<u16>()
                .map_err(|_| ParseEventError(s.to_string()))?;
            return Ok(Self::Error {
                code: MediaErrorCode::from_code(code),
                message: format!("media error code {code}"),
            });
        }

        match lower.as_str() {
            "progress" => Ok(Self::Progress),
            "play" => Ok(Self::Play),
            "pause" => Ok(Self::Pause),
            "ended" => Ok(Self::Ended),
            "canplay" => Ok(Self::CanPlay),
            "canplaythrough" => Ok(Self::CanPlayThrough),
            "timeupdate" => Ok(Self::TimeUpdate {
                current_time_secs: 0.0,
            }),
            "error" => Ok(Self::Error {
                code: None,
                message: "media error".to_string(),
            }),
            _ => Err(ParseEventError(s.to_string())),
        }
    }
}

/// Last raw event category observed from the media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Media data is being fetched. Initial state.
    #[default]
    Progress,
    /// Playback started.
    Play,
    /// Playback paused.
    Pause,
    /// Playback reached the end.
    Ended,
    /// Playback can start.
    CanPlay,
    /// Playback position advanced.
    TimeUpdate,
}

impl PlaybackState {
    /// Returns the DOM event name this state was recorded from.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Ended => "ended",
            Self::CanPlay => "canplay",
            Self::TimeUpdate => "timeupdate",
        }
    }
}

/// UI-facing playback phase. The only status a renderer branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Waiting for playback to start.
    #[default]
    Loading,
    /// Media is playing.
    Playing,
    /// Media is paused.
    Paused,
    /// Media played to the end.
    Ended,
    /// The media element reported an error.
    Error,
}

impl PlaybackStatus {
    /// Derives the status after `state` was recorded.
    ///
    /// States that carry no status of their own (`progress`, `canplay`,
    /// `timeupdate`) keep the previous status.
    #[must_use]
    pub fn derive(previous: Self, state: PlaybackState) -> Self {
        match state {
            PlaybackState::Ended => Self::Ended,
            PlaybackState::Pause => Self::Paused,
            PlaybackState::Play => Self::Playing,
            PlaybackState::Progress | PlaybackState::CanPlay | PlaybackState::TimeUpdate => {
                previous
            }
        }
    }

    /// Returns true if the media is playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns a lowercase name for logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Ended => "ended",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which visual the widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    /// The static thumbnail image.
    #[default]
    Thumbnail,
    /// The live media surface.
    Player,
}

impl ScreenMode {
    /// Initial screen for a mount.
    #[must_use]
    pub fn initial(autoplay: bool) -> Self {
        if autoplay {
            Self::Player
        } else {
            Self::Thumbnail
        }
    }

    /// Returns a lowercase name for logs and reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Player => "player",
        }
    }
}

/// Playback action requested through a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start or resume playback.
    Play,
    /// Pause playback.
    Pause,
}

impl Intent {
    /// Returns the action a click on the player performs for `status`.
    #[must_use]
    pub fn toggle_for(status: PlaybackStatus) -> Self {
        if status.is_playing() {
            Self::Pause
        } else {
            Self::Play
        }
    }

    /// Returns `"play"` or `"pause"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
