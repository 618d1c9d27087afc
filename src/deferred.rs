// SPDX-License-Identifier: MPL-2.0
//! Worker-thread delay timer.
//!
//! A [`DelayWorker`] runs the wait on a dedicated thread that samples a
//! monotonic clock every [`DELAY_POLL_INTERVAL_MS`] milliseconds and
//! sends a single completion message once the requested duration has
//! elapsed. The worker owns no shared state; callers interact with it
//! only through channels. Completion therefore lands up to one polling
//! interval late, a deliberate precision/cost trade-off.

use crate::config::defaults::DELAY_POLL_INTERVAL_MS;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// An isolated timing context counting down one duration.
///
/// Dropping the worker does not stop the thread early; it exits on its
/// own once it completes or once every cancel sender is gone.
#[derive(Debug)]
pub struct DelayWorker {
    done_rx: Receiver<()>,
    cancel_tx: Sender<()>,
}

impl DelayWorker {
    /// Spawns the timing thread for the given duration.
    #[must_use]
    pub fn spawn(duration: Duration) -> Self {
        let (done_tx, done_rx) = bounded(1);
        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        let poll = Duration::from_millis(DELAY_POLL_INTERVAL_MS);

        thread::spawn(move || {
            let started = Instant::now();
            loop {
                // Sleeping on the cancel channel doubles as the sampling
                // interval; a termination signal is consumed at the next
                // polling tick rather than instantaneously.
                match cancel_rx.recv_timeout(poll) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => {}
                }
                if started.elapsed() >= duration {
                    let _ = done_tx.send(());
                    return;
                }
            }
        });

        Self { done_rx, cancel_tx }
    }

    /// Consumes the completion signal if one has arrived.
    ///
    /// Returns `true` exactly once per worker.
    #[must_use]
    pub fn poll_complete(&self) -> bool {
        self.done_rx.try_recv().is_ok()
    }

    /// Signals the timing thread to terminate. Idempotent.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.try_send(());
    }

    pub(crate) fn cancel_sender(&self) -> Sender<()> {
        self.cancel_tx.clone()
    }
}

/// Cancellation handle returned by
/// [`crate::board::Board::schedule_deferred`].
///
/// Cancellation takes effect at most once; cancelling twice, or after
/// the task has already fired, is a no-op.
#[derive(Debug, Clone)]
pub struct DeferredHandle {
    cancelled: Arc<AtomicBool>,
    cancel_tx: Sender<()>,
}

impl DeferredHandle {
    pub(crate) fn new(cancelled: Arc<AtomicBool>, cancel_tx: Sender<()>) -> Self {
        Self {
            cancelled,
            cancel_tx,
        }
    }

    /// Cancels the deferred task if it has not fired yet.
    ///
    /// If a completion signal is already in flight, the owning board
    /// still honors the cancellation: at most one of {task fired,
    /// cancel took effect} ever happens.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            let _ = self.cancel_tx.try_send(());
        }
    }

}
