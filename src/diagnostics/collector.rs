// SPDX-License-Identifier: MPL-2.0
//! Event collection plumbing.
//!
//! The board (and any other producer) holds a cheap cloneable
//! [`DiagnosticsHandle`] and fires events into a bounded channel; the
//! host-owned [`DiagnosticsCollector`] drains that channel into the
//! ring buffer whenever it gets pumped. Producers never block: when the
//! channel is full the event is simply dropped.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, WarningEvent,
};

/// In-flight events the channel can hold between pumps.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Producer-side handle feeding events to a collector.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a warning. Non-blocking; dropped if the channel is full.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event: warning });
        let _ = self.event_tx.try_send(event);
    }

    /// Records an error. Non-blocking; dropped if the channel is full.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error });
        let _ = self.event_tx.try_send(event);
    }
}

/// Owns the event channel and the bounded event store.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Kept so new handles can be minted after construction.
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic collection start, for report offset computation.
    started_at: Instant,
    /// Wall-clock collection start, for report metadata.
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Mints a producer handle for this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Call on each host tick.
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

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// When collection started, on the monotonic clock.
    #[must_use]
    pub fn collection_started_at(&self) -> Instant {
        self.started_at
    }

    /// When collection started, on the wall clock.
    #[must_use]
    pub fn collection_started_at_utc(&self) -> DateTime<Utc> {
        self.started_at_utc
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
