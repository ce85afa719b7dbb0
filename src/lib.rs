// SPDX-License-Identifier: MPL-2.0
//! `holo_video` is a lazy-loading video widget.
//!
//! It shows a static thumbnail and, on user interaction or autoplay, swaps
//! to a live video surface. A small state machine turns the media element's
//! lifecycle events into a UI-facing status and a play/pause affordance.
//!
//! - [`resolver`] maps an identifier to its CDN URLs.
//! - [`video_player`] is the playback controller.
//! - [`render`] projects controller state for any front-end.
//! - [`ui`] is the iced front-end.

#![doc(html_root_url = "https://docs.rs/holo_video/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod media;
pub mod render;
pub mod resolver;
pub mod ui;
pub mod video_player;
