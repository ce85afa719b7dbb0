// SPDX-License-Identifier: MPL-2.0
//! Overlay control icons.
//!
//! Icons are small inline SVG documents. Handles are cached in a `OnceLock`
//! so each document is parsed once, then tinted per widget through the SVG
//! style function.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

use crate::domain::video::PlaybackIcon;

const START_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M7 4.5v15a1 1 0 0 0 1.5.86l12.5-7.5a1 1 0 0 0 0-1.72L8.5 3.64A1 1 0 0 0 7 4.5z"/></svg>"#;

const STOP_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect x="5" y="5" width="14" height="14" rx="1.5"/></svg>"#;

const REPLAY_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 5V1.5L7 6.5l5 5V8a6 6 0 1 1-6 6H4a8 8 0 1 0 8-9z"/></svg>"#;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $data:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($data.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(start, START_SVG, "Start icon: triangle pointing right.");
define_icon!(stop, STOP_SVG, "Stop icon: filled square.");
define_icon!(replay, REPLAY_SVG, "Replay icon: counter-clockwise arrow.");

/// Returns the widget for `icon`, or `None` when nothing is drawn.
#[must_use]
pub fn for_playback(icon: PlaybackIcon) -> Option<Svg<'static>> {
    match icon {
        PlaybackIcon::Start => Some(start()),
        PlaybackIcon::Stop => Some(stop()),
        PlaybackIcon::Replay => Some(replay()),
        PlaybackIcon::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_visible_icon_has_a_widget() {
        for icon in [PlaybackIcon::Start, PlaybackIcon::Stop, PlaybackIcon::Replay] {
            assert!(for_playback(icon).is_some(), "{}", icon.as_str());
        }
        assert!(for_playback(PlaybackIcon::None).is_none());
    }

    #[test]
    fn svg_documents_are_well_formed() {
        for data in [START_SVG, STOP_SVG, REPLAY_SVG] {
            assert!(data.starts_with("<svg"));
            assert!(data.ends_with("</svg>"));
        }
    }
}
