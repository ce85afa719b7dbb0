// SPDX-License-Identifier: MPL-2.0
//! iced user interface for the video widget.
//!
//! Follows the Elm-style "state down, messages up" pattern:
//!
//! - [`holo_video`] - The widget component (`State`, `Message`, `Effect`)
//! - [`icons`] - Overlay SVG icons
//! - [`styles`] - Overlay button and icon styles

pub mod holo_video;
pub mod icons;
pub mod styles;
