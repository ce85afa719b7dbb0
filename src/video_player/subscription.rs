// SPDX-License-Identifier: MPL-2.0
//! Scoped event subscription between a media element and the controller.
//!
//! The element gets a cloneable [`MediaEventSender`]; the controller keeps
//! the receiving half inside an [`EventSubscription`] guard. Closing the
//! guard detaches every sender at once, so late events from a torn-down
//! element are refused at the source instead of mutating dead state.

use std::fmt;

use tokio::sync::mpsc;

use crate::domain::video::RawMediaEvent;

/// Returned when an event is sent after the subscription was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detached;

impl fmt::Display for Detached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("media event subscription is closed")
    }
}

impl std::error::Error for Detached {}

/// Handle an element uses to deliver lifecycle events.
#[derive(Clone)]
pub struct MediaEventSender {
    event_tx: mpsc::UnboundedSender<RawMediaEvent>,
}

impl MediaEventSender {
    /// Queues `event` for the controller.
    ///
    /// # Errors
    ///
    /// Returns [`Detached`] once the controller has unmounted.
    pub fn send(&self, event: RawMediaEvent) -> Result<(), Detached> {
        self.event_tx.send(event).map_err(|_| Detached)
    }

    /// Returns true while the controller still listens.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.event_tx.is_closed()
    }
}

impl fmt::Debug for MediaEventSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaEventSender")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Receiving half of a media event subscription.
#[derive(Debug)]
pub struct EventSubscription {
    event_rx: Option<mpsc::UnboundedReceiver<RawMediaEvent>>,
}

impl EventSubscription {
    /// Opens a new subscription and returns the sender to hand to the element.
    #[must_use]
    pub fn open() -> (Self, MediaEventSender) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (
            Self {
                event_rx: Some(event_rx),
            },
            MediaEventSender { event_tx },
        )
    }

    /// Takes the next queued event without blocking.
    pub fn try_next(&mut self) -> Option<RawMediaEvent> {
        self.event_rx.as_mut()?.try_recv().ok()
    }

    /// Closes the channel and discards anything still queued.
    ///
    /// Returns the number of discarded events.
    pub fn close(&mut self) -> usize {
        let Some(mut event_rx) = self.event_rx.take() else {
            return 0;
        };
        event_rx.close();
        let mut discarded = 0;
        while event_rx.try_recv().is_ok() {
            discarded += 1;
        }
        discarded
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.event_rx.is_some()
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_delivery_order() {
        let (mut subscription, sender) = EventSubscription::open();
        sender.send(RawMediaEvent::Progress).unwrap();
        sender.send(RawMediaEvent::Play).unwrap();

        assert_eq!(subscription.try_next(), Some(RawMediaEvent::Progress));
        assert_eq!(subscription.try_next(), Some(RawMediaEvent::Play));
        assert_eq!(subscription.try_next(), None);
    }

    #[test]
    fn close_detaches_every_sender() {
        let (mut subscription, sender) = EventSubscription::open();
        let clone = sender.clone();
        assert!(sender.is_attached());

        subscription.close();

        assert!(!subscription.is_open());
        assert!(!sender.is_attached());
        assert_eq!(clone.send(RawMediaEvent::Play), Err(Detached));
        assert_eq!(subscription.try_next(), None);
    }

    #[test]
    fn close_discards_queued_events() {
        let (mut subscription, sender) = EventSubscription::open();
        sender.send(RawMediaEvent::Play).unwrap();
        sender.send(RawMediaEvent::Ended).unwrap();

        assert_eq!(subscription.close(), 2);
        assert_eq!(subscription.close(), 0);
    }

    #[test]
    fn dropping_guard_detaches_sender() {
        let (subscription, sender) = EventSubscription::open();
        drop(subscription);
        assert_eq!(sender.send(RawMediaEvent::Pause), Err(Detached));
    }
}
