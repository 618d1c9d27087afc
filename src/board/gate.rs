// SPDX-License-Identifier: MPL-2.0
//! Readiness gate: tracks host mount state and buffers early requests.
//!
//! Requests arriving before the presentation host exists are queued per
//! surface and flushed exactly once, in arrival order within each
//! surface, when readiness is reached. The tri-state [`Readiness`]
//! makes the in-flight mount explicit so concurrent first calls cannot
//! trigger a second mount.

use crate::notification::NotifyOptions;
use std::collections::VecDeque;

/// Mount state of the presentation host. Never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    /// No mount has been requested yet.
    #[default]
    NotReady,
    /// A mount is in flight; further init triggers are no-ops.
    Initializing,
    /// The host is mounted and accepting renders.
    Ready,
}

/// Requests buffered while the host was not ready, drained on flush.
#[derive(Debug, Default)]
pub struct QueuedRequests {
    pub notifies: Vec<NotifyOptions>,
    pub toasts: Vec<String>,
    pub alerts: Vec<String>,
}

impl QueuedRequests {
    /// Total number of buffered requests across all surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifies.len() + self.toasts.len() + self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// State machine guarding the presentation host.
#[derive(Debug, Default)]
pub struct Gate {
    readiness: Readiness,
    notify_queue: VecDeque<NotifyOptions>,
    toast_queue: VecDeque<String>,
    alert_queue: VecDeque<String>,
}

impl Gate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current readiness state.
    #[must_use]
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// Whether requests may be dispatched directly.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    /// Records that a mount is starting.
    ///
    /// Returns `true` only on the first call; while Initializing or
    /// Ready this is a no-op, which is what keeps concurrent first
    /// calls from mounting the host twice.
    pub fn begin_init(&mut self) -> bool {
        if self.readiness == Readiness::NotReady {
            self.readiness = Readiness::Initializing;
            true
        } else {
            false
        }
    }

    /// Records that the mount completed.
    ///
    /// Returns `true` on the Initializing→Ready transition; any other
    /// state leaves the gate unchanged (readiness never reverts, and a
    /// completion signal without a mount in flight is ignored).
    pub fn mark_ready(&mut self) -> bool {
        if self.readiness == Readiness::Initializing {
            self.readiness = Readiness::Ready;
            true
        } else {
            false
        }
    }

    /// Buffers a notify request for the flush.
    pub fn queue_notify(&mut self, options: NotifyOptions) {
        self.notify_queue.push_back(options);
    }

    /// Buffers a toast request for the flush.
    pub fn queue_toast(&mut self, content: String) {
        self.toast_queue.push_back(content);
    }

    /// Buffers an alert request for the flush.
    pub fn queue_alert(&mut self, message: String) {
        self.alert_queue.push_back(message);
    }

    /// Total number of buffered requests.
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.notify_queue.len() + self.toast_queue.len() + self.alert_queue.len()
    }

    /// Drains every queue, preserving FIFO order within each surface.
    #[must_use]
    pub fn take_queued(&mut self) -> QueuedRequests {
        QueuedRequests {
            notifies: self.notify_queue.drain(..).collect(),
            toasts: self.toast_queue.drain(..).collect(),
            alerts: self.alert_queue.drain(..).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_gate_is_not_ready() {
        let gate = Gate::new();
        assert_eq!(gate.readiness(), Readiness::NotReady);
        assert!(!gate.is_ready());
    }

    #[test]
    fn begin_init_transitions_exactly_once() {
        let mut gate = Gate::new();
        assert!(gate.begin_init());
        assert_eq!(gate.readiness(), Readiness::Initializing);

        // Concurrent first calls must not remount.
        assert!(!gate.begin_init());
        assert!(!gate.begin_init());
        assert_eq!(gate.readiness(), Readiness::Initializing);
    }

    #[test]
    fn mark_ready_requires_mount_in_flight() {
        let mut gate = Gate::new();
        assert!(!gate.mark_ready());
        assert_eq!(gate.readiness(), Readiness::NotReady);

        gate.begin_init();
        assert!(gate.mark_ready());
        assert!(gate.is_ready());
    }

    #[test]
    fn readiness_never_reverts() {
        let mut gate = Gate::new();
        gate.begin_init();
        gate.mark_ready();

        assert!(!gate.begin_init());
        assert!(!gate.mark_ready());
        assert!(gate.is_ready());
    }

    #[test]
    fn queues_preserve_fifo_order_per_surface() {
        let mut gate = Gate::new();
        gate.queue_notify(NotifyOptions::success("first"));
        gate.queue_toast("t1".to_string());
        gate.queue_notify(NotifyOptions::error("second"));
        gate.queue_toast("t2".to_string());
        gate.queue_alert("a1".to_string());

        let queued = gate.take_queued();
        assert_eq!(queued.notifies[0].content, "first");
        assert_eq!(queued.notifies[1].content, "second");
        assert_eq!(queued.toasts, vec!["t1".to_string(), "t2".to_string()]);
        assert_eq!(queued.alerts, vec!["a1".to_string()]);
    }

    #[test]
    fn take_queued_empties_all_queues() {
        let mut gate = Gate::new();
        gate.queue_notify(NotifyOptions::info("x"));
        gate.queue_alert("y".to_string());
        assert_eq!(gate.queued_len(), 2);

        let first = gate.take_queued();
        assert_eq!(first.len(), 2);

        let second = gate.take_queued();
        assert!(second.is_empty());
        assert_eq!(gate.queued_len(), 0);
    }
}
