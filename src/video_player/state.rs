// SPDX-License-Identifier: MPL-2.0
//! Playback controller for the video widget.
//!
//! Turns the noisy stream of media element events into the small set of
//! statuses the UI cares about:
//! - Screen: thumbnail first, player after activation (never back)
//! - State: the last recorded raw event category
//! - Status: loading, playing, paused, ended or error, derived from state
//!
//! The controller owns the media element and the receiving half of its
//! event subscription. Events are processed strictly one at a time.

use super::callbacks::{Callbacks, Notice};
use super::element::MediaElement;
use super::props::{CanPlayPolicy, PlayerProps};
use super::subscription::EventSubscription;
use crate::diagnostics::{DiagnosticsHandle, LifecyclePhase};
use crate::domain::video::{
    project_icon, Intent, PlaybackIcon, PlaybackState, PlaybackStatus, RawMediaEvent, ScreenMode,
    VideoIdentifier,
};
use crate::error::PlaybackError;
use crate::render::{self, RenderOutput};
use crate::resolver::{AssetResolver, AssetUrls, ClientProfile};

/// Video widget controller.
pub struct VideoPlayer<E: MediaElement> {
    /// Mount-time properties.
    props: PlayerProps,

    /// URLs resolved for `props.video_id`.
    urls: AssetUrls,

    resolver: AssetResolver,
    client: ClientProfile,

    /// The driven media element.
    element: E,

    /// Receiving half of the element's event stream.
    /// `None` for unplayable identifiers and after teardown.
    subscription: Option<EventSubscription>,

    callbacks: Callbacks,

    /// Diagnostics handle for logging state events.
    diagnostics: Option<DiagnosticsHandle>,

    // ═══════════════════════════════════════════════════════════════════════
    // PLAYBACK STATE (reset on remount)
    // ═══════════════════════════════════════════════════════════════════════
    screen: ScreenMode,
    state: PlaybackState,
    status: PlaybackStatus,

    /// Set by the first `canplay`/`canplaythrough`.
    ready: bool,

    /// Guards the ended notice until the next `play` event.
    ended_notified: bool,

    /// Whether the element has been given its source URL.
    source_assigned: bool,

    /// Most recent media error, cleared when a later event replaces the
    /// error status.
    last_error: Option<PlaybackError>,

    // ═══════════════════════════════════════════════════════════════════════
    // COMPONENT LIFETIME
    // ═══════════════════════════════════════════════════════════════════════
    /// Whether the first-load notice has fired. Survives remounts.
    first_load_fired: bool,

    /// Set once by `unmount`.
    torn_down: bool,
}

impl<E: MediaElement> VideoPlayer<E> {
    /// Mounts a widget against the default CDN and a default client.
    pub fn new(props: PlayerProps, element: E) -> Self {
        Self::mount(
            props,
            AssetResolver::default(),
            ClientProfile::default(),
            element,
        )
    }

    /// Mounts a widget.
    ///
    /// Unplayable identifiers produce an inert controller: no subscription,
    /// no commands, no callbacks, and an empty render.
    pub fn mount(
        props: PlayerProps,
        resolver: AssetResolver,
        client: ClientProfile,
        element: E,
    ) -> Self {
        let urls = resolver.resolve(&props.video_id, &client, props.extension.as_deref());
        let mut player = Self {
            screen: ScreenMode::initial(props.autoplay),
            props,
            urls,
            resolver,
            client,
            element,
            subscription: None,
            callbacks: Callbacks::default(),
            diagnostics: None,
            state: PlaybackState::default(),
            status: PlaybackStatus::default(),
            ready: false,
            ended_notified: false,
            source_assigned: false,
            last_error: None,
            first_load_fired: false,
            torn_down: false,
        };
        player.attach();
        player
    }

    /// Installs embedder callbacks, replacing any previous ones.
    #[must_use]
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Sets the diagnostics handle and records the current mount.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        if self.is_valid() && !self.torn_down {
            handle.log_lifecycle(LifecyclePhase::Mounted, &self.props.video_id);
        }
        self.diagnostics = Some(handle);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn props(&self) -> &PlayerProps {
        &self.props
    }

    pub fn video_id(&self) -> &VideoIdentifier {
        &self.props.video_id
    }

    pub fn urls(&self) -> &AssetUrls {
        &self.urls
    }

    pub fn screen(&self) -> ScreenMode {
        self.screen
    }

    /// Returns the last recorded raw event category.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Returns the overlay icon for the current screen and status.
    pub fn icon(&self) -> PlaybackIcon {
        project_icon(self.screen, self.status)
    }

    /// Returns true once media reported it can play.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_ref()
    }

    /// Returns true if the identifier resolved to playable assets.
    pub fn is_valid(&self) -> bool {
        self.urls.is_playable()
    }

    /// Returns true while the controller listens to its element.
    pub fn is_mounted(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(EventSubscription::is_open)
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Projects the current state for rendering.
    pub fn render(&self) -> RenderOutput {
        if self.torn_down {
            return RenderOutput::Empty;
        }
        render::project(&self.props, &self.urls, self.screen, self.status)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // USER INTERACTION
    // ═══════════════════════════════════════════════════════════════════════

    /// Handles a click on the thumbnail.
    ///
    /// Switches to the player, assigns the source and requests playback.
    /// Only acts while the thumbnail is shown, so repeated calls are no-ops.
    pub fn activate_thumbnail(&mut self) -> Option<Notice> {
        if !self.is_mounted() || self.screen != ScreenMode::Thumbnail {
            return None;
        }

        self.screen = ScreenMode::Player;
        self.assign_source();
        if !self.props.autoplay {
            self.element.play();
        }

        log::debug!(
            "{}: thumbnail activated ({})",
            self.props.video_id,
            if self.ready { "buffered" } else { "cold" }
        );
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_intent(Intent::Play, ScreenMode::Thumbnail);
        }
        Some(self.notify(Notice::Activity(Intent::Play)))
    }

    /// Handles a click on the player surface.
    ///
    /// Pauses while playing and plays otherwise (including after an error,
    /// which acts as a retry).
    pub fn toggle_player(&mut self) -> Option<Notice> {
        if !self.is_mounted() || self.screen != ScreenMode::Player {
            return None;
        }

        let intent = Intent::toggle_for(self.status);
        match intent {
            Intent::Play => self.element.play(),
            Intent::Pause => self.element.pause(),
        }

        log::debug!("{}: {intent} requested", self.props.video_id);
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_intent(intent, ScreenMode::Player);
        }
        Some(self.notify(Notice::Activity(intent)))
    }

    /// Reports that the widget has been rendered.
    ///
    /// The first call for the component lifetime yields [`Notice::FirstLoad`];
    /// later calls, including after a remount, do nothing.
    pub fn observe_first_load(&mut self) -> Option<Notice> {
        if self.first_load_fired || !self.is_mounted() {
            return None;
        }
        self.first_load_fired = true;

        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_lifecycle(LifecyclePhase::FirstLoad, &self.props.video_id);
        }
        Some(self.notify(Notice::FirstLoad))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MEDIA EVENTS
    // ═══════════════════════════════════════════════════════════════════════

    /// Processes one media event to completion.
    ///
    /// Events that arrive after teardown are dropped.
    pub fn handle_event(&mut self, event: RawMediaEvent) -> Option<Notice> {
        if !self.is_mounted() {
            if self.torn_down {
                log::warn!(
                    "{}: dropping '{}' event after teardown",
                    self.props.video_id,
                    event.name()
                );
            }
            return None;
        }

        if let RawMediaEvent::Error { code, message } = &event {
            return Some(self.record_error(PlaybackError::from_event(*code, message), &event));
        }

        let state = event.recorded_state()?;
        self.state = state;

        if event.signals_readiness() && !self.ready {
            self.ready = true;
            if self.props.canplay_policy == CanPlayPolicy::RevealPlayer
                && self.screen == ScreenMode::Thumbnail
            {
                log::debug!("{}: media ready, revealing player", self.props.video_id);
                self.screen = ScreenMode::Player;
                self.assign_source();
            }
        }

        if state == PlaybackState::Play {
            self.ended_notified = false;
        }

        let previous = self.status;
        self.set_status(PlaybackStatus::derive(previous, state), &event);

        if state == PlaybackState::Ended && !self.ended_notified {
            self.ended_notified = true;
            return Some(self.notify(Notice::Ended));
        }
        None
    }

    /// Drains every queued event in delivery order.
    ///
    /// Returns the notices produced along the way.
    pub fn pump(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Some(event) = self.subscription.as_mut().and_then(EventSubscription::try_next) {
            notices.extend(self.handle_event(event));
        }
        notices
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════

    /// Switches to another identifier, resetting playback state.
    ///
    /// Returns false when the identifier is unchanged or the widget has been
    /// unmounted.
    pub fn change_video_id(&mut self, video_id: impl Into<VideoIdentifier>) -> bool {
        let video_id = video_id.into();
        if self.torn_down || video_id == self.props.video_id {
            return false;
        }

        self.detach();
        self.props.video_id = video_id;
        self.urls =
            self.resolver
                .resolve(&self.props.video_id, &self.client, self.props.extension.as_deref());

        self.screen = ScreenMode::initial(self.props.autoplay);
        self.state = PlaybackState::default();
        self.status = PlaybackStatus::default();
        self.ready = false;
        self.ended_notified = false;
        self.source_assigned = false;
        self.last_error = None;

        self.attach();
        if self.is_valid() {
            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.log_lifecycle(LifecyclePhase::Remounted, &self.props.video_id);
            }
        }
        true
    }

    /// Tears the widget down.
    ///
    /// Unsubscribes from the element synchronously. Nothing queued or sent
    /// afterwards reaches the controller.
    pub fn unmount(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        let was_mounted = self.is_mounted();
        self.detach();
        if was_mounted {
            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.log_lifecycle(LifecyclePhase::Unmounted, &self.props.video_id);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // INTERNALS
    // ═══════════════════════════════════════════════════════════════════════

    fn attach(&mut self) {
        if !self.is_valid() {
            log::debug!("{}: not a playable identifier", self.props.video_id);
            return;
        }

        let (subscription, sender) = EventSubscription::open();
        self.element.subscribe(sender);
        self.subscription = Some(subscription);
        self.element.apply_attributes(&self.props.media_attributes());

        // Readiness is only observable once the element has a source;
        // revealing on canplay needs one regardless of `preload`.
        if self.screen == ScreenMode::Player
            || self.props.preload
            || self.props.canplay_policy == CanPlayPolicy::RevealPlayer
        {
            self.assign_source();
        }
        log::debug!(
            "{}: mounted on {} screen",
            self.props.video_id,
            self.screen.as_str()
        );
    }

    fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            self.element.unsubscribe();
            let discarded = subscription.close();
            if discarded > 0 {
                log::debug!(
                    "{}: discarded {discarded} pending media events",
                    self.props.video_id
                );
            }
        }
    }

    fn assign_source(&mut self) {
        if self.source_assigned {
            return;
        }
        if let Some(source) = &self.urls.source {
            self.element.set_source(source);
            self.source_assigned = true;
        }
    }

    fn set_status(&mut self, status: PlaybackStatus, cause: &RawMediaEvent) {
        let previous = self.status;
        if status == previous {
            return;
        }
        self.status = status;
        if status != PlaybackStatus::Error {
            self.last_error = None;
        }

        log::debug!(
            "{}: {previous} -> {status} on '{}'",
            self.props.video_id,
            cause.name()
        );
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_status_change(previous, status, cause);
        }
    }

    fn record_error(&mut self, error: PlaybackError, event: &RawMediaEvent) -> Notice {
        log::warn!("{}: media error: {error}", self.props.video_id);
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_media_error(&error);
        }
        self.set_status(PlaybackStatus::Error, event);
        self.last_error = Some(error.clone());
        self.notify(Notice::Error(error))
    }

    fn notify(&mut self, notice: Notice) -> Notice {
        self.callbacks.dispatch(&notice);
        notice
    }
}

impl<E: MediaElement> Drop for VideoPlayer<E> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<E: MediaElement> std::fmt::Debug for VideoPlayer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoPlayer")
            .field("video_id", &self.props.video_id)
            .field("screen", &self.screen)
            .field("state", &self.state)
            .field("status", &self.status)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}
