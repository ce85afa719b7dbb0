// SPDX-License-Identifier: MPL-2.0
//! Embedder notifications.

use std::fmt;

use crate::domain::video::Intent;
use crate::error::PlaybackError;

/// Something the embedder may want to react to.
///
/// Every controller operation yields at most one notice. It is both returned
/// to the caller and dispatched to the matching [`Callbacks`] entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The user asked to play or pause.
    Activity(Intent),
    /// Playback reached the end.
    Ended,
    /// The widget rendered for the first time.
    FirstLoad,
    /// The media element reported an error.
    Error(PlaybackError),
}

type ActivityFn = Box<dyn FnMut(Intent)>;
type ErrorFn = Box<dyn FnMut(&PlaybackError)>;
type SignalFn = Box<dyn FnMut()>;

/// Optional embedder callbacks.
#[derive(Default)]
pub struct Callbacks {
    on_activity: Option<ActivityFn>,
    on_ended: Option<SignalFn>,
    on_first_load: Option<SignalFn>,
    on_error: Option<ErrorFn>,
}

impl Callbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the requested intent on every accepted click.
    #[must_use]
    pub fn on_activity(mut self, f: impl FnMut(Intent) + 'static) -> Self {
        self.on_activity = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_ended(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_ended = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_first_load(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_first_load = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_error(mut self, f: impl FnMut(&PlaybackError) + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub(crate) fn dispatch(&mut self, notice: &Notice) {
        match notice {
            Notice::Activity(intent) => {
                if let Some(f) = self.on_activity.as_mut() {
                    f(*intent);
                }
            }
            Notice::Ended => {
                if let Some(f) = self.on_ended.as_mut() {
                    f();
                }
            }
            Notice::FirstLoad => {
                if let Some(f) = self.on_first_load.as_mut() {
                    f();
                }
            }
            Notice::Error(error) => {
                if let Some(f) = self.on_error.as_mut() {
                    f(error);
                }
            }
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_activity", &self.on_activity.is_some())
            .field("on_ended", &self.on_ended.is_some())
            .field("on_first_load", &self.on_first_load.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
