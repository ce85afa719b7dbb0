// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, error::TrySendError};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    LifecyclePhase, ReportMetadata, SerializableEvent,
};
use crate::domain::video::{Intent, PlaybackStatus, RawMediaEvent, ScreenMode, VideoIdentifier};
use crate::error::PlaybackError;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: mpsc::Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event of any kind.
    pub fn log(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_lifecycle(&self, phase: LifecyclePhase, video_id: &VideoIdentifier) {
        self.log(DiagnosticEventKind::Lifecycle {
            phase,
            video_id: video_id.to_string(),
        });
    }

    pub fn log_intent(&self, intent: Intent, screen: ScreenMode) {
        self.log(DiagnosticEventKind::UserIntent {
            intent: intent.as_str().to_string(),
            screen: screen.as_str().to_string(),
        });
    }

    pub fn log_status_change(&self, from: PlaybackStatus, to: PlaybackStatus, event: &RawMediaEvent) {
        self.log(DiagnosticEventKind::StatusChanged {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
            event: event.name().to_string(),
        });
    }

    pub fn log_media_error(&self, error: &PlaybackError) {
        self.log(DiagnosticEventKind::MediaError {
            category: error.category().to_string(),
            message: error.to_string(),
        });
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full, or
    /// `TrySendError::Closed` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Central collector for diagnostic events.
///
/// Events arrive through handles and are moved into the circular buffer
/// by [`DiagnosticsCollector::process_pending`].
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: mpsc::Receiver<DiagnosticEvent>,
    event_tx: mpsc::Sender<DiagnosticEvent>,
    /// Monotonic start, for event offsets.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

/// Events buffered in the channel between two `process_pending` calls.
const DEFAULT_CHANNEL_CAPACITY: usize = 128;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::from_event(event, self.collection_started_at))
            .collect();

        DiagnosticReport {
            metadata: ReportMetadata::new(
                self.collection_started_at_utc,
                collection_duration_ms,
                events.len(),
            ),
            events,
        }
    }

    /// Exports all collected events as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_new_creates_empty_buffer() {
        let collector = DiagnosticsCollector::new(BufferCapacity::new(32));
        assert!(collector.is_empty());
        assert_eq!(collector.capacity(), 32);
    }

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_intent(Intent::Play, ScreenMode::Thumbnail);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
        match &collector.iter().next().expect("one event").kind {
            DiagnosticEventKind::UserIntent { intent, screen } => {
                assert_eq!(intent, "play");
                assert_eq!(screen, "thumbnail");
            }
            other => panic!("unexpected event {other:?}"),
        };
    }

    #[test]
    fn status_change_records_cause() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_status_change(
            PlaybackStatus::Loading,
            PlaybackStatus::Playing,
            &RawMediaEvent::Play,
        );
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticEventKind::StatusChanged {
                from: "loading".into(),
                to: "playing".into(),
                event: "play".into(),
            }]
        );
    }

    #[test]
    fn media_error_uses_category() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_media_error(&PlaybackError::Network("offline".into()));
        collector.process_pending();

        match &collector.iter().next().expect("one event").kind {
            DiagnosticEventKind::MediaError { category, message } => {
                assert_eq!(category, "network");
                assert!(message.contains("offline"));
            }
            other => panic!("unexpected event {other:?}"),
        };
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY {
            handle.log_intent(Intent::Pause, ScreenMode::Player);
        }
        let overflow = handle.try_log(DiagnosticEventKind::UserIntent {
            intent: "play".into(),
            screen: "player".into(),
        });
        assert!(matches!(overflow, Err(TrySendError::Full(_))));
    }

    #[test]
    fn handle_is_clone() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.log_lifecycle(LifecyclePhase::Mounted, &VideoIdentifier::new("yoloholo-a"));
        second.log_lifecycle(LifecyclePhase::Unmounted, &VideoIdentifier::new("yoloholo-a"));
        collector.process_pending();

        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn export_json_contains_metadata_and_events() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_lifecycle(LifecyclePhase::FirstLoad, &VideoIdentifier::new("yoloholo-abc"));
        collector.process_pending();

        let json = collector.export_json().expect("export");
        let report: DiagnosticReport = serde_json::from_str(&json).expect("parse back");

        assert_eq!(report.metadata.event_count, 1);
        assert_eq!(report.events.len(), 1);
        assert_eq!(
            report.events[0].kind,
            DiagnosticEventKind::Lifecycle {
                phase: LifecyclePhase::FirstLoad,
                video_id: "yoloholo-abc".into(),
            }
        );
    }

    #[test]
    fn export_json_with_empty_buffer() {
        let collector = DiagnosticsCollector::default();
        let json = collector.export_json().expect("export");
        assert!(json.contains("\"event_count\": 0"));
    }
}
