// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for widget activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Component lifecycle milestones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePhase {
    /// The widget was mounted with a playable identifier.
    Mounted,
    /// The embedder observed the first render.
    FirstLoad,
    /// The identifier changed and playback state was reset.
    Remounted,
    /// The widget was torn down and released its subscription.
    Unmounted,
}

/// What happened, without the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A lifecycle milestone.
    Lifecycle {
        phase: LifecyclePhase,
        video_id: String,
    },

    /// The user clicked the thumbnail or the player.
    UserIntent {
        /// `"play"` or `"pause"`.
        intent: String,
        /// Screen the click landed on.
        screen: String,
    },

    /// The derived playback status changed.
    StatusChanged {
        from: String,
        to: String,
        /// Raw event that caused the change.
        event: String,
    },

    /// The media element reported an error.
    MediaError {
        /// Stable category, e.g. `"network"`.
        category: String,
        message: String,
    },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic capture time.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
