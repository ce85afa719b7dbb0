// SPDX-License-Identifier: MPL-2.0
//! Mount-time configuration of a video widget.

use std::str::FromStr;

use super::element::MediaAttributes;
use crate::config::{self, Config};
use crate::domain::video::{Dimension, IconColor, IconSize, VideoIdentifier};

/// What the first `canplay` event does to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanPlayPolicy {
    /// Switch to the player as soon as media is ready.
    RevealPlayer,
    /// Keep the thumbnail until the user clicks it.
    #[default]
    KeepThumbnail,
}

impl CanPlayPolicy {
    #[must_use]
    pub fn from_reveal(reveal: bool) -> Self {
        if reveal {
            Self::RevealPlayer
        } else {
            Self::KeepThumbnail
        }
    }
}

/// Cosmetic overlay icon settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub color: IconColor,
    pub size: IconSize,
    pub background: IconColor,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            color: config::DEFAULT_ICON_COLOR,
            size: IconSize::new(config::DEFAULT_ICON_SIZE_PX),
            background: config::DEFAULT_ICON_BACKGROUND,
        }
    }
}

/// Properties fixed for one mount.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)] // Mirrors the boolean media attributes
pub struct PlayerProps {
    pub video_id: VideoIdentifier,
    pub autoplay: bool,
    pub loop_playback: bool,
    pub muted: bool,
    pub plays_inline: bool,
    pub width: Dimension,
    pub height: Dimension,
    pub icon_style: IconStyle,
    pub canplay_policy: CanPlayPolicy,
    /// Hand the source to the element at mount so it buffers behind the
    /// thumbnail. Without it the source is assigned on activation.
    pub preload: bool,
    /// Container extension for raw uploads.
    pub extension: Option<String>,
}

impl PlayerProps {
    /// Creates props with every setting at its default.
    #[must_use]
    pub fn new(video_id: impl Into<VideoIdentifier>) -> Self {
        Self {
            video_id: video_id.into(),
            autoplay: config::DEFAULT_AUTOPLAY,
            loop_playback: config::DEFAULT_LOOP_PLAYBACK,
            muted: config::DEFAULT_MUTED,
            plays_inline: config::DEFAULT_PLAYS_INLINE,
            width: Dimension::Pixels(config::DEFAULT_WIDTH_PX),
            height: Dimension::Percent(config::DEFAULT_HEIGHT_PERCENT),
            icon_style: IconStyle::default(),
            canplay_policy: CanPlayPolicy::from_reveal(config::DEFAULT_REVEAL_ON_CANPLAY),
            preload: config::DEFAULT_PRELOAD,
            extension: None,
        }
    }

    /// Creates props whose settings come from `config`.
    ///
    /// Values that fail to parse are logged and replaced by defaults.
    #[must_use]
    pub fn from_config(video_id: impl Into<VideoIdentifier>, config: &Config) -> Self {
        let defaults = Self::new(video_id);
        let player = &config.player;
        let icon = &config.icon;

        Self {
            autoplay: player.autoplay.unwrap_or(defaults.autoplay),
            loop_playback: player.loop_playback.unwrap_or(defaults.loop_playback),
            muted: player.muted.unwrap_or(defaults.muted),
            plays_inline: player.plays_inline.unwrap_or(defaults.plays_inline),
            width: parse_or(player.width.as_deref(), defaults.width),
            height: parse_or(player.height.as_deref(), defaults.height),
            icon_style: IconStyle {
                color: parse_or(icon.color.as_deref(), defaults.icon_style.color),
                size: parse_or(icon.size.as_deref(), defaults.icon_style.size),
                background: parse_or(icon.background.as_deref(), defaults.icon_style.background),
            },
            canplay_policy: player
                .reveal_on_canplay
                .map_or(defaults.canplay_policy, CanPlayPolicy::from_reveal),
            preload: player.preload.unwrap_or(defaults.preload),
            extension: player.extension.clone(),
            video_id: defaults.video_id,
        }
    }

    #[must_use]
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    #[must_use]
    pub fn canplay_policy(mut self, policy: CanPlayPolicy) -> Self {
        self.canplay_policy = policy;
        self
    }

    #[must_use]
    pub fn preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Attributes handed to the media element.
    #[must_use]
    pub fn media_attributes(&self) -> MediaAttributes {
        MediaAttributes {
            autoplay: self.autoplay,
            loop_playback: self.loop_playback,
            muted: self.muted,
            plays_inline: self.plays_inline,
            width: self.width,
            height: self.height,
        }
    }
}

fn parse_or<T>(value: Option<&str>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.map(str::parse::<T>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(err)) => {
            log::warn!("invalid config value, using default: {err}");
            default
        }
        None => default,
    }
}
