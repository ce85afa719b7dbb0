// SPDX-License-Identifier: MPL-2.0
//! Pure render projection.
//!
//! A [`RenderOutput`] describes what the widget shows without committing to
//! any toolkit. The iced front-end in [`crate::ui`] turns it into widgets; a
//! web or terminal front-end could do the same.

use crate::domain::video::{project_icon, Dimension, PlaybackIcon, PlaybackStatus, ScreenMode};
use crate::resolver::AssetUrls;
use crate::video_player::{IconStyle, PlayerProps};

/// The single visual shown under the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// Static still image.
    Thumbnail { url: String },
    /// Live media surface bound to `source`.
    Player { source: String },
}

/// The clickable control drawn above the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlay {
    pub icon: PlaybackIcon,
    /// Fully visible even without hover.
    pub emphasized: bool,
    pub style: IconStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub surface: Surface,
    pub overlay: Overlay,
    pub width: Dimension,
    pub height: Dimension,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderOutput {
    /// Nothing is drawn.
    #[default]
    Empty,
    Widget(WidgetView),
}

impl RenderOutput {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn widget(&self) -> Option<&WidgetView> {
        match self {
            Self::Empty => None,
            Self::Widget(view) => Some(view),
        }
    }

    /// Returns the overlay icon, if anything is drawn.
    #[must_use]
    pub fn icon(&self) -> Option<PlaybackIcon> {
        self.widget().map(|view| view.overlay.icon)
    }
}

/// Projects widget state onto a render output.
///
/// Unresolvable assets project to [`RenderOutput::Empty`].
#[must_use]
pub fn project(
    props: &PlayerProps,
    urls: &AssetUrls,
    screen: ScreenMode,
    status: PlaybackStatus,
) -> RenderOutput {
    let (Some(source), Some(thumbnail)) = (&urls.source, &urls.thumbnail) else {
        return RenderOutput::Empty;
    };

    let surface = match screen {
        ScreenMode::Thumbnail => Surface::Thumbnail {
            url: thumbnail.clone(),
        },
        ScreenMode::Player => Surface::Player {
            source: source.clone(),
        },
    };

    RenderOutput::Widget(WidgetView {
        surface,
        overlay: Overlay {
            icon: project_icon(screen, status),
            emphasized: !status.is_playing(),
            style: props.icon_style,
        },
        width: props.width,
        height: props.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{self, ClientProfile};

    fn urls_for(id: &str) -> AssetUrls {
        resolver::resolve(&id.into(), &ClientProfile::default(), None)
    }

    #[test]
    fn unresolvable_assets_render_nothing() {
        let props = PlayerProps::new("not-a-real-id");
        let output = project(
            &props,
            &urls_for("not-a-real-id"),
            ScreenMode::Player,
            PlaybackStatus::Playing,
        );
        assert!(output.is_empty());
        assert_eq!(output.icon(), None);
    }

    #[test]
    fn thumbnail_screen_shows_thumbnail_with_start_icon() {
        let props = PlayerProps::new("yoloholo-abc");
        let output = project(
            &props,
            &urls_for("yoloholo-abc"),
            ScreenMode::Thumbnail,
            PlaybackStatus::Loading,
        );
        let view = output.widget().expect("widget");
        assert!(matches!(&view.surface, Surface::Thumbnail { url } if url.ends_with("-thumb.webp")));
        assert_eq!(view.overlay.icon, PlaybackIcon::Start);
        assert!(view.overlay.emphasized);
        assert_eq!(view.width, Dimension::DEFAULT_WIDTH);
    }

    #[test]
    fn player_screen_binds_source() {
        let props = PlayerProps::new("yoloholo-abc");
        let output = project(
            &props,
            &urls_for("yoloholo-abc"),
            ScreenMode::Player,
            PlaybackStatus::Playing,
        );
        let view = output.widget().expect("widget");
        assert!(matches!(&view.surface, Surface::Player { source } if source.ends_with(".webm")));
        assert_eq!(view.overlay.icon, PlaybackIcon::Stop);
        assert!(!view.overlay.emphasized);
    }
}
