// SPDX-License-Identifier: MPL-2.0
//! Video widget domain types.
//!
//! This module contains the value objects the playback controller works with.
//! They are independent of any presentation or infrastructure concerns.

pub mod icon;
pub mod identifier;
pub mod newtypes;
pub mod playback;

// Re-export commonly used types
pub use icon::{project_icon, PlaybackIcon};
pub use identifier::VideoIdentifier;
pub use newtypes::{Dimension, IconColor, IconSize, ParseValueError};
pub use playback::{
    Intent, MediaErrorCode, ParseEventError, PlaybackState, PlaybackStatus, RawMediaEvent,
    ScreenMode,
};
