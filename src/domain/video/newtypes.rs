// SPDX-License-Identifier: MPL-2.0
//! Layout and cosmetic newtypes.
//!
//! Embedders pass sizes and colours as CSS-like strings (`"220"`, `"100%"`,
//! `"2rem"`, `"#fff"`). These types parse them once so the rest of the
//! crate works with validated values.

use std::fmt;
use std::str::FromStr;

use crate::config;

/// Pixels per `rem` unit.
pub const PIXELS_PER_REM: f32 = 16.0;

/// Error returned when a size or colour string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    /// Kind of value being parsed (`"dimension"`, `"color"`, ...).
    pub kind: &'static str,
    /// Offending input.
    pub input: String,
}

impl ParseValueError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {:?}", self.kind, self.input)
    }
}

impl std::error::Error for ParseValueError {}

fn parse_non_negative(kind: &'static str, input: &str, number: &str) -> Result<f32, ParseValueError> {
    let value = number
        .trim()
        .parse::<f32>()
        .map_err(|_| ParseValueError::new(kind, input))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ParseValueError::new(kind, input))
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// Width or height of the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Fixed size in logical pixels.
    Pixels(f32),
    /// Share of the available space, 0–100.
    Percent(f32),
    /// Size to content.
    Auto,
}

impl Dimension {
    /// Default widget width (220px).
    pub const DEFAULT_WIDTH: Self = Self::Pixels(config::DEFAULT_WIDTH_PX);
    /// Default widget height (100%).
    pub const DEFAULT_HEIGHT: Self = Self::Percent(config::DEFAULT_HEIGHT_PERCENT);
}

impl FromStr for Dimension {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if let Some(percent) = trimmed.strip_suffix('%') {
            let value = parse_non_negative("dimension", s, percent)?;
            if value > 100.0 {
                return Err(ParseValueError::new("dimension", s));
            }
            return Ok(Self::Percent(value));
        }
        if let Some(rem) = trimmed.strip_suffix("rem") {
            return parse_non_negative("dimension", s, rem).map(|v| Self::Pixels(v * PIXELS_PER_REM));
        }
        let pixels = trimmed.strip_suffix("px").unwrap_or(trimmed);
        parse_non_negative("dimension", s, pixels).map(Self::Pixels)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

// =============================================================================
// IconColor
// =============================================================================

/// RGBA colour of the overlay icon or its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl IconColor {
    /// Opaque white, the default icon colour.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent, the default background.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Returns true if the colour has no visible coverage.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl FromStr for IconColor {
    type Err = ParseValueError;

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `transparent`, `white` or `black`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        let hex = trimmed
            .strip_prefix('#')
            .filter(|h| h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| ParseValueError::new("color", s))?;
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map(|n| n * 0x11);

        let parsed = match hex.len() {
            3 => nibble(0).and_then(|r| Ok(Self::rgb(r, nibble(1)?, nibble(2)?))),
            6 => byte(0).and_then(|r| Ok(Self::rgb(r, byte(2)?, byte(4)?))),
            8 => byte(0).and_then(|r| {
                Ok(Self {
                    r,
                    g: byte(2)?,
                    b: byte(4)?,
                    a: byte(6)?,
                })
            }),
            _ => return Err(ParseValueError::new("color", s)),
        };
        parsed.map_err(|_| ParseValueError::new("color", s))
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

// =============================================================================
// IconSize
// =============================================================================

/// Icon size bounds in logical pixels.
pub mod icon_size_bounds {
    use crate::config::{DEFAULT_ICON_SIZE_PX, MAX_ICON_SIZE_PX, MIN_ICON_SIZE_PX};

    pub const MIN: f32 = MIN_ICON_SIZE_PX;
    pub const MAX: f32 = MAX_ICON_SIZE_PX;
    pub const DEFAULT: f32 = DEFAULT_ICON_SIZE_PX;
}

/// Overlay icon edge length in logical pixels, within [`icon_size_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSize(f32);

impl IconSize {
    /// Creates an icon size, clamping to the valid range.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        Self(pixels.clamp(icon_size_bounds::MIN, icon_size_bounds::MAX))
    }

    /// Returns the size in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self(icon_size_bounds::DEFAULT)
    }
}

impl FromStr for IconSize {
    type Err = ParseValueError;

    /// Parses `"2rem"`, `"32px"` or `"32"`. Percentages are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Dimension>() {
            Ok(Dimension::Pixels(px)) => Ok(Self::new(px)),
            _ => Err(ParseValueError::new("icon size", s)),
        }
    }
}
