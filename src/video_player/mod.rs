// SPDX-License-Identifier: MPL-2.0
//! Playback controller for the lazy-loading video widget.
//!
//! The controller drives an embedder-supplied [`MediaElement`] and derives
//! a small UI-facing status from the lifecycle events it emits.

mod callbacks;
mod element;
mod headless;
mod props;
mod state;
pub mod subscription;

pub use callbacks::{Callbacks, Notice};
pub use element::{MediaAttributes, MediaElement};
pub use headless::{HeadlessMediaElement, MediaCommand};
pub use props::{CanPlayPolicy, IconStyle, PlayerProps};
pub use state::VideoPlayer;
pub use subscription::{Detached, EventSubscription, MediaEventSender};

/// Mounts a widget driving a [`HeadlessMediaElement`].
pub fn create_headless_player(props: PlayerProps) -> VideoPlayer<HeadlessMediaElement> {
    VideoPlayer::new(props, HeadlessMediaElement::new())
}
