// SPDX-License-Identifier: MPL-2.0
//! A media element with no output, for tests and the command line.

use super::element::{MediaAttributes, MediaElement};
use super::subscription::{Detached, MediaEventSender};
use crate::domain::video::RawMediaEvent;

/// A command received by [`HeadlessMediaElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    SetSource(String),
    ApplyAttributes(MediaAttributes),
    Play,
    Pause,
    Subscribe,
    Unsubscribe,
}

/// Records every command and lets the caller inject lifecycle events.
#[derive(Debug, Default)]
pub struct HeadlessMediaElement {
    commands: Vec<MediaCommand>,
    sender: Option<MediaEventSender>,
    source: Option<String>,
    /// Answer `play()`/`pause()` with the matching event.
    echo: bool,
}

impl HeadlessMediaElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element that answers play and pause commands with the
    /// matching `play`/`pause` events, like a real element would.
    #[must_use]
    pub fn echoing() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    /// Every command received so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[MediaCommand] {
        &self.commands
    }

    /// Number of `play()` requests received.
    #[must_use]
    pub fn play_requests(&self) -> usize {
        self.count(&MediaCommand::Play)
    }

    /// Number of `pause()` requests received.
    #[must_use]
    pub fn pause_requests(&self) -> usize {
        self.count(&MediaCommand::Pause)
    }

    /// The assigned media URL, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The sender received at subscribe time.
    #[must_use]
    pub fn event_sender(&self) -> Option<&MediaEventSender> {
        self.sender.as_ref()
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.sender.as_ref().is_some_and(MediaEventSender::is_attached)
    }

    /// Delivers `event` to the subscribed controller.
    ///
    /// # Errors
    ///
    /// Returns [`Detached`] when nobody is subscribed.
    pub fn emit(&self, event: RawMediaEvent) -> Result<(), Detached> {
        self.sender.as_ref().ok_or(Detached)?.send(event)
    }

    /// Delivers events in order, stopping at the first refused one.
    ///
    /// # Errors
    ///
    /// Returns [`Detached`] when nobody is subscribed.
    pub fn emit_all<I>(&self, events: I) -> Result<(), Detached>
    where
        I: IntoIterator<Item = RawMediaEvent>,
    {
        events.into_iter().try_for_each(|event| self.emit(event))
    }

    fn count(&self, command: &MediaCommand) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }
}

impl MediaElement for HeadlessMediaElement {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
        self.commands.push(MediaCommand::SetSource(url.to_string()));
    }

    fn apply_attributes(&mut self, attributes: &MediaAttributes) {
        self.commands.push(MediaCommand::ApplyAttributes(*attributes));
    }

    fn play(&mut self) {
        self.commands.push(MediaCommand::Play);
        if self.echo {
            let _ = self.emit(RawMediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        self.commands.push(MediaCommand::Pause);
        if self.echo {
            let _ = self.emit(RawMediaEvent::Pause);
        }
    }

    fn subscribe(&mut self, sender: MediaEventSender) {
        self.sender = Some(sender);
        self.commands.push(MediaCommand::Subscribe);
    }

    fn unsubscribe(&mut self) {
        if self.sender.take().is_some() {
            self.commands.push(MediaCommand::Unsubscribe);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::EventSubscription;

    #[test]
    fn emit_without_subscription_is_detached() {
        let element = HeadlessMediaElement::new();
        assert_eq!(element.emit(RawMediaEvent::Play), Err(Detached));
    }

    #[test]
    fn echoing_element_answers_commands() {
        let (mut subscription, sender) = EventSubscription::open();
        let mut element = HeadlessMediaElement::echoing();
        element.subscribe(sender);

        element.play();
        element.pause();

        assert_eq!(subscription.try_next(), Some(RawMediaEvent::Play));
        assert_eq!(subscription.try_next(), Some(RawMediaEvent::Pause));
        assert_eq!(element.play_requests(), 1);
        assert_eq!(element.pause_requests(), 1);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let (_subscription, sender) = EventSubscription::open();
        let mut element = HeadlessMediaElement::new();
        element.subscribe(sender);
        element.unsubscribe();
        element.unsubscribe();

        assert!(!element.is_subscribed());
        assert_eq!(
            element.commands(),
            &[MediaCommand::Subscribe, MediaCommand::Unsubscribe]
        );
    }
}
