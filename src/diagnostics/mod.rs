// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting widget activity reports.
//!
//! The playback controller reports user intents, status changes, media
//! errors and lifecycle phases through a [`DiagnosticsHandle`]. Events land
//! in a memory-bounded [`CircularBuffer`] owned by a [`DiagnosticsCollector`]
//! and can be exported as a JSON [`DiagnosticReport`].
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsHandle`]: Cloneable, non-blocking event sender

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, LifecyclePhase};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
