// SPDX-License-Identifier: MPL-2.0
//! Pausable countdown used for auto-dismiss timers.
//!
//! A [`Countdown`] measures *active* time only: pausing freezes the
//! remainder, resuming continues from it. Repeated pause/resume cycles
//! therefore consume exactly the original duration of active time, with
//! no drift in either direction.

use std::time::{Duration, Instant};

/// A countdown that can be paused and resumed without losing time.
///
/// All methods take an explicit `now` so callers with their own clock
/// (and deterministic tests) can drive it.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Remaining active time as of `armed_at` (or as of the last pause).
    remaining: Duration,
    /// When the countdown was last armed; `None` while paused.
    armed_at: Option<Instant>,
}

impl Countdown {
    /// Creates a countdown for `total` active time, armed at `now`.
    #[must_use]
    pub fn armed(total: Duration, now: Instant) -> Self {
        Self {
            remaining: total,
            armed_at: Some(now),
        }
    }

    /// Freezes the countdown, banking the active time elapsed so far.
    ///
    /// Pausing an already-paused countdown is a no-op.
    pub fn pause(&mut self, now: Instant) {
        if let Some(armed_at) = self.armed_at.take() {
            self.remaining = self
                .remaining
                .saturating_sub(now.saturating_duration_since(armed_at));
        }
    }

    /// Re-arms a paused countdown for its banked remainder.
    ///
    /// Resuming a running countdown is a no-op.
    pub fn resume(&mut self, now: Instant) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now);
        }
    }

    /// Returns the active time left before expiry.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.armed_at {
            Some(armed_at) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(armed_at)),
            None => self.remaining,
        }
    }

    /// Returns whether the countdown has consumed all its active time.
    ///
    /// A paused countdown with time left never reports expiry.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.armed_at.is_some() && self.remaining(now).is_zero()
    }

    /// Returns whether the countdown is currently paused.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.armed_at.is_none()
    }
}
