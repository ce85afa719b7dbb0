// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Player**: Media attributes and surface size
//! - **Icon**: Overlay control appearance
//! - **Diagnostics**: Event buffer sizing

use crate::domain::video::IconColor;

// ==========================================================================
// Player Defaults
// ==========================================================================

/// Whether playback starts without user interaction.
pub const DEFAULT_AUTOPLAY: bool = false;

pub const DEFAULT_LOOP_PLAYBACK: bool = false;

pub const DEFAULT_MUTED: bool = false;

pub const DEFAULT_PLAYS_INLINE: bool = false;

/// Whether the element receives its source at mount, before any click.
pub const DEFAULT_PRELOAD: bool = true;

/// Surface width in logical pixels.
pub const DEFAULT_WIDTH_PX: f32 = 220.0;

/// Surface height as a share of the available space.
pub const DEFAULT_HEIGHT_PERCENT: f32 = 100.0;

/// Whether the first `canplay` swaps the thumbnail for the player.
pub const DEFAULT_REVEAL_ON_CANPLAY: bool = false;

// ==========================================================================
// Icon Defaults
// ==========================================================================

/// Icon colour (`#fff`).
pub const DEFAULT_ICON_COLOR: IconColor = IconColor::WHITE;

/// Icon edge length in logical pixels (2rem).
pub const DEFAULT_ICON_SIZE_PX: f32 = 32.0;

/// Smallest icon that stays recognisable.
pub const MIN_ICON_SIZE_PX: f32 = 8.0;

pub const MAX_ICON_SIZE_PX: f32 = 256.0;

pub const DEFAULT_ICON_BACKGROUND: IconColor = IconColor::TRANSPARENT;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub const DEFAULT_DIAGNOSTICS_ENABLED: bool = false;

/// Events kept in the diagnostics ring buffer.
pub const DEFAULT_BUFFER_CAPACITY: usize = crate::domain::diagnostics::buffer_capacity_bounds::DEFAULT;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::{Dimension, IconSize};

    #[test]
    fn css_defaults_parse_to_constants() {
        assert_eq!(
            "220px".parse::<Dimension>(),
            Ok(Dimension::Pixels(DEFAULT_WIDTH_PX))
        );
        assert_eq!(
            "100%".parse::<Dimension>(),
            Ok(Dimension::Percent(DEFAULT_HEIGHT_PERCENT))
        );
        assert_eq!("#fff".parse::<IconColor>(), Ok(DEFAULT_ICON_COLOR));
        assert_eq!(
            "transparent".parse::<IconColor>(),
            Ok(DEFAULT_ICON_BACKGROUND)
        );
        assert_eq!(
            "2rem".parse::<IconSize>().map(IconSize::value),
            Ok(DEFAULT_ICON_SIZE_PX)
        );
    }

    #[test]
    fn icon_size_default_is_within_bounds() {
        assert!(MIN_ICON_SIZE_PX <= DEFAULT_ICON_SIZE_PX);
        assert!(DEFAULT_ICON_SIZE_PX <= MAX_ICON_SIZE_PX);
    }
}
