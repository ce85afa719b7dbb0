// SPDX-License-Identifier: MPL-2.0
//! Overlay control styles.
//!
//! The control is fully visible while emphasized and only on hover
//! otherwise.

use iced::widget::{button, svg};
use iced::{Background, Border, Color, Length, Theme};

use crate::domain::video::{Dimension, IconColor};
use crate::video_player::IconStyle;

/// Opacity multiplier while the control is pressed.
const PRESSED_ALPHA: f32 = 0.8;

/// Converts a parsed icon colour to an iced colour.
#[must_use]
pub fn to_color(color: IconColor) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, f32::from(color.a) / 255.0)
}

/// Converts a CSS-like dimension to an iced length.
///
/// iced has no percentage lengths: full size fills, smaller shares become a
/// fill portion.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Percent is in 0..=100
#[must_use]
pub fn to_length(dimension: Dimension) -> Length {
    match dimension {
        Dimension::Pixels(px) => Length::Fixed(px),
        Dimension::Percent(pct) if pct >= 100.0 => Length::Fill,
        Dimension::Percent(pct) => Length::FillPortion(pct.round().max(1.0) as u16),
        Dimension::Auto => Length::Shrink,
    }
}

fn visibility(emphasized: bool, hovered: bool) -> f32 {
    if emphasized || hovered {
        1.0
    } else {
        0.0
    }
}

fn with_alpha(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor,
        ..color
    }
}

/// Style for the transparent button covering the widget.
pub fn control(style: IconStyle, emphasized: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => visibility(emphasized, true),
            button::Status::Pressed => PRESSED_ALPHA,
            _ => visibility(emphasized, false),
        };

        button::Style {
            background: Some(Background::Color(with_alpha(to_color(style.background), alpha))),
            text_color: with_alpha(to_color(style.color), alpha),
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Style tinting the overlay icon.
pub fn icon(style: IconStyle, emphasized: bool) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, status: svg::Status| {
        let hovered = matches!(status, svg::Status::Hovered);
        svg::Style {
            color: Some(with_alpha(
                to_color(style.color),
                visibility(emphasized, hovered),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasized_control_is_always_visible() {
        let style_fn = control(IconStyle::default(), true);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        assert_eq!(normal.text_color.a, 1.0);
    }

    #[test]
    fn quiet_control_shows_on_hover_only() {
        let style_fn = control(IconStyle::default(), false);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_eq!(normal.text_color.a, 0.0);
        assert_eq!(hover.text_color.a, 1.0);
    }

    #[test]
    fn icon_tint_uses_configured_color() {
        let style = IconStyle {
            color: IconColor::BLACK,
            ..IconStyle::default()
        };
        let tint = icon(style, true)(&Theme::Light, svg::Status::Idle);
        assert_eq!(tint.color, Some(Color::BLACK));
    }

    #[test]
    fn dimensions_map_to_lengths() {
        assert_eq!(to_length(Dimension::Pixels(220.0)), Length::Fixed(220.0));
        assert_eq!(to_length(Dimension::Percent(100.0)), Length::Fill);
        assert_eq!(to_length(Dimension::Percent(50.0)), Length::FillPortion(50));
        assert_eq!(to_length(Dimension::Auto), Length::Shrink);
    }
}
