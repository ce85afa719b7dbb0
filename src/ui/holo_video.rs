// SPDX-License-Identifier: MPL-2.0
//! iced front-end of the video widget.
//!
//! The component owns a [`VideoPlayer`] and routes clicks and media events
//! to it. The live video surface is toolkit-specific, so the embedder
//! supplies it to [`State::view`].
//!
//! Events queued on the element's subscription are always drained before a
//! message is applied, so both inputs are processed in delivery order.

use iced::widget::{button, center, container, image, Space, Stack};
use iced::{Element, Length, Task};

use super::icons;
use super::styles::overlay;
use crate::domain::video::{RawMediaEvent, ScreenMode};
use crate::error::Error;
use crate::media;
use crate::render::{Overlay, RenderOutput, Surface};
use crate::video_player::{MediaElement, Notice, VideoPlayer};

/// Video widget component state.
pub struct State<E: MediaElement> {
    player: VideoPlayer<E>,

    /// Downloaded thumbnail, once available.
    thumbnail: Option<image::Handle>,
}

/// Messages for the video widget.
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // USER INTERACTION
    // ═══════════════════════════════════════════════════════════════════════
    /// The thumbnail was clicked.
    ThumbnailPressed,
    /// The player surface was clicked.
    PlayerPressed,

    // ═══════════════════════════════════════════════════════════════════════
    // MEDIA
    // ═══════════════════════════════════════════════════════════════════════
    /// The media element emitted a lifecycle event.
    Media(RawMediaEvent),
    /// The thumbnail download finished.
    ThumbnailLoaded(Result<image::Handle, Error>),

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════
    /// The widget was rendered. Emitted once by [`State::new`].
    Rendered,
}

/// Effects produced by widget messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The embedder should react to these notices, in order.
    Notify(Vec<Notice>),
}

impl Effect {
    fn from_notices(notices: Vec<Notice>) -> Self {
        if notices.is_empty() {
            Effect::None
        } else {
            Effect::Notify(notices)
        }
    }
}

impl<E: MediaElement> State<E> {
    /// Creates the component.
    ///
    /// The returned task reports the first render and, while the thumbnail
    /// is on screen, downloads it.
    pub fn new(player: VideoPlayer<E>) -> (Self, Task<Message>) {
        let thumbnail = match thumbnail_to_fetch(&player) {
            Some(url) => Task::perform(
                media::fetch_thumbnail(url.to_string()),
                Message::ThumbnailLoaded,
            ),
            None => Task::none(),
        };
        let state = Self {
            player,
            thumbnail: None,
        };
        (state, Task::batch([thumbnail, Task::done(Message::Rendered)]))
    }

    pub fn player(&self) -> &VideoPlayer<E> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut VideoPlayer<E> {
        &mut self.player
    }

    /// Returns true once the thumbnail image is available.
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }

    /// Handle a widget message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        // Earlier events from the subscription come first.
        let mut notices = self.player.pump();
        let own: Option<Notice> = match msg {
            Message::ThumbnailPressed => self.player.activate_thumbnail(),
            Message::PlayerPressed => self.player.toggle_player(),
            Message::Media(event) => self.player.handle_event(event),
            Message::ThumbnailLoaded(Ok(handle)) => {
                self.thumbnail = Some(handle);
                None
            }
            Message::ThumbnailLoaded(Err(err)) => {
                log::warn!("{}: thumbnail unavailable: {err}", self.player.video_id());
                None
            }
            Message::Rendered => self.player.observe_first_load(),
        };
        notices.extend(own);

        // Commands above may have made the element answer.
        notices.extend(self.player.pump());
        Effect::from_notices(notices)
    }

    /// Renders the widget.
    ///
    /// `surface` builds the live video element for a source URL.
    pub fn view<'a, F>(&'a self, surface: F) -> Element<'a, Message>
    where
        F: FnOnce(&str) -> Element<'a, Message>,
    {
        let RenderOutput::Widget(widget) = self.player.render() else {
            return Space::new().into();
        };

        let (base, pressed): (Element<'a, Message>, Message) = match &widget.surface {
            Surface::Thumbnail { .. } => (self.thumbnail_view(), Message::ThumbnailPressed),
            Surface::Player { source } => (surface(source), Message::PlayerPressed),
        };

        let width = overlay::to_length(widget.width);
        let height = overlay::to_length(widget.height);

        Stack::new()
            .push(container(base).width(Length::Fill).height(Length::Fill))
            .push(control(widget.overlay, pressed))
            .width(width)
            .height(height)
            .into()
    }

    fn thumbnail_view<'a>(&'a self) -> Element<'a, Message> {
        match &self.thumbnail {
            Some(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        }
    }
}

/// Thumbnail URL worth downloading: none once the player is on screen.
fn thumbnail_to_fetch<E: MediaElement>(player: &VideoPlayer<E>) -> Option<&str> {
    if player.screen() == ScreenMode::Player {
        return None;
    }
    player.urls().thumbnail.as_deref()
}

/// Full-size transparent button carrying the overlay icon.
fn control<'a>(overlay_view: Overlay, on_press: Message) -> Element<'a, Message> {
    let size = overlay_view.style.size.value();
    let content: Element<'a, Message> = match icons::for_playback(overlay_view.icon) {
        Some(icon) => icon
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(overlay::icon(overlay_view.style, overlay_view.emphasized))
            .into(),
        None => Space::new()
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
    };

    button(center(content))
        .on_press(on_press)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(overlay::control(overlay_view.style, overlay_view.emphasized))
        .into()
}
