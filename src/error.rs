// SPDX-License-Identifier: MPL-2.0
use crate::domain::video::MediaErrorCode;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Network(String),
    Playback(PlaybackError),
}

/// Playback failures reported by the media element.
///
/// These never cross the widget boundary as `Err`; the controller logs
/// them and hands them to the embedder's error callback.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// Fetching was aborted before the media loaded.
    Aborted,

    /// The media could not be downloaded.
    Network(String),

    /// The media could not be decoded.
    DecodingFailed(String),

    /// The client cannot play the selected container format.
    UnsupportedSource,

    /// Generic error with raw message
    Other(String),
}

impl PlaybackError {
    /// Builds an error from a media `error` event.
    ///
    /// A structured code wins; otherwise the message is categorised.
    pub fn from_event(code: Option<MediaErrorCode>, message: &str) -> Self {
        match code {
            Some(MediaErrorCode::Aborted) => PlaybackError::Aborted,
            Some(MediaErrorCode::Network) => PlaybackError::Network(message.to_string()),
            Some(MediaErrorCode::Decode) => PlaybackError::DecodingFailed(message.to_string()),
            Some(MediaErrorCode::SourceNotSupported) => PlaybackError::UnsupportedSource,
            None => Self::from_message(message),
        }
    }

    /// Attempts to categorise a raw error message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("abort") {
            return PlaybackError::Aborted;
        }

        if msg_lower.contains("not supported")
            || msg_lower.contains("unsupported")
            || msg_lower.contains("no supported source")
        {
            return PlaybackError::UnsupportedSource;
        }

        if msg_lower.contains("network")
            || msg_lower.contains("timed out")
            || msg_lower.contains("connection")
        {
            return PlaybackError::Network(msg.to_string());
        }

        if msg_lower.contains("decode") || msg_lower.contains("corrupt") {
            return PlaybackError::DecodingFailed(msg.to_string());
        }

        PlaybackError::Other(msg.to_string())
    }

    /// Returns a stable snake_case category for diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            PlaybackError::Aborted => "aborted",
            PlaybackError::Network(_) => "network",
            PlaybackError::DecodingFailed(_) => "decode",
            PlaybackError::UnsupportedSource => "unsupported_source",
            PlaybackError::Other(_) => "other",
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Aborted => write!(f, "Media loading aborted"),
            PlaybackError::Network(msg) => write!(f, "Network error: {}", msg),
            PlaybackError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            PlaybackError::UnsupportedSource => write!(f, "Unsupported media source"),
            PlaybackError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
