// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core widget logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`video`]: Video widget types ([`VideoIdentifier`](video::VideoIdentifier),
//!   [`RawMediaEvent`](video::RawMediaEvent), [`PlaybackStatus`](video::PlaybackStatus),
//!   [`ScreenMode`](video::ScreenMode), [`PlaybackIcon`](video::PlaybackIcon),
//!   [`Dimension`](video::Dimension))

pub mod diagnostics;
pub mod video;
