// SPDX-License-Identifier: MPL-2.0
//! The media element seam.
//!
//! The controller never decodes anything itself. It drives an
//! embedder-supplied element (a browser `<video>`, a native surface, or the
//! [`HeadlessMediaElement`](super::HeadlessMediaElement)) and listens to the
//! lifecycle events that element emits.

use super::subscription::MediaEventSender;
use crate::domain::video::Dimension;

/// Presentation attributes forwarded verbatim to the element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)] // Mirrors the boolean media attributes
pub struct MediaAttributes {
    pub autoplay: bool,
    pub loop_playback: bool,
    pub muted: bool,
    pub plays_inline: bool,
    pub width: Dimension,
    pub height: Dimension,
}

impl Default for MediaAttributes {
    fn default() -> Self {
        Self {
            autoplay: false,
            loop_playback: false,
            muted: false,
            plays_inline: false,
            width: Dimension::DEFAULT_WIDTH,
            height: Dimension::DEFAULT_HEIGHT,
        }
    }
}

/// An underlying media primitive the controller can drive.
///
/// Commands are fire-and-forget. Outcomes come back asynchronously as
/// [`RawMediaEvent`](crate::domain::video::RawMediaEvent)s through the
/// sender handed over in [`MediaElement::subscribe`].
pub trait MediaElement {
    /// Assigns the media URL. Called once, when the player surface appears.
    fn set_source(&mut self, url: &str);

    fn apply_attributes(&mut self, attributes: &MediaAttributes);

    /// Requests playback start or resume.
    fn play(&mut self);

    /// Requests playback pause.
    fn pause(&mut self);

    /// Starts delivering lifecycle events to `sender`.
    fn subscribe(&mut self, sender: MediaEventSender);

    /// Stops delivering events. Must be idempotent.
    fn unsubscribe(&mut self);
}

impl<E: MediaElement + ?Sized> MediaElement for Box<E> {
    fn set_source(&mut self, url: &str) {
        (**self).set_source(url);
    }

    fn apply_attributes(&mut self, attributes: &MediaAttributes) {
        (**self).apply_attributes(attributes);
    }

    fn play(&mut self) {
        (**self).play();
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn subscribe(&mut self, sender: MediaEventSender) {
        (**self).subscribe(sender);
    }

    fn unsubscribe(&mut self) {
        (**self).unsubscribe();
    }
}
