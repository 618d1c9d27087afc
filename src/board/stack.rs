// SPDX-License-Identifier: MPL-2.0
//! Toast stack coordination.
//!
//! Insertion shifts every existing entry one spacing unit away from the
//! anchor edge and places the newcomer at offset zero. Removal deletes
//! the entry but does NOT recompact the survivors; a mid-stack removal
//! leaves a gap. That mirrors the observed product behavior and the
//! tests pin it down deliberately.
//!
//! Unlike panels, toasts have no hover semantics: a press and the fixed
//! display duration are the only dismiss triggers, and both feed the
//! same removal path.

use crate::notification::NotificationId;
use crate::render::Visual;
use crate::timer::Countdown;
use std::time::{Duration, Instant};

/// Lifecycle state of one stacked toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Showing,
    /// Hidden, waiting out the exit grace before release.
    Dismissing,
}

/// One visible toast and its vertical position.
pub struct StackEntry {
    id: NotificationId,
    offset_px: u32,
    state: ToastState,
    countdown: Countdown,
    grace: Option<Countdown>,
    visual: Box<dyn Visual>,
}

impl StackEntry {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Vertical offset from the anchor edge, in pixels.
    #[must_use]
    pub fn offset_px(&self) -> u32 {
        self.offset_px
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state
    }
}

/// Set of currently visible toasts, most recent at offset zero.
pub struct Stack {
    entries: Vec<StackEntry>,
    spacing_px: u32,
    duration: Duration,
    exit_grace: Duration,
}

impl Stack {
    #[must_use]
    pub fn new(spacing_px: u32, duration: Duration, exit_grace: Duration) -> Self {
        Self {
            entries: Vec::new(),
            spacing_px,
            duration,
            exit_grace,
        }
    }

    /// Inserts a freshly mounted toast at the anchor edge.
    ///
    /// All existing entries shift one spacing unit in the same call, so
    /// no observer ever sees a partially shifted stack.
    pub fn insert(&mut self, id: NotificationId, mut visual: Box<dyn Visual>, now: Instant) {
        for entry in &mut self.entries {
            entry.offset_px += self.spacing_px;
            entry.visual.set_offset(entry.offset_px);
        }
        visual.set_offset(0);
        visual.set_visible(true);
        self.entries.push(StackEntry {
            id,
            offset_px: 0,
            state: ToastState::Showing,
            countdown: Countdown::armed(self.duration, now),
            grace: None,
            visual,
        });
    }

    /// Dismisses a toast: hides it and arms the exit grace.
    ///
    /// Press and expiry both land here; repeated triggers are no-ops.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return;
        };
        if entry.state == ToastState::Dismissing {
            return;
        }
        entry.state = ToastState::Dismissing;
        entry.visual.set_visible(false);
        entry.grace = Some(Countdown::armed(self.exit_grace, now));
    }

    /// Expires due toasts and releases those past their exit grace.
    ///
    /// Survivors keep their offsets; gaps left by removals are not
    /// closed.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|e| e.state == ToastState::Showing && e.countdown.is_expired(now))
            .map(StackEntry::id)
            .collect();
        for id in expired {
            self.dismiss(id, now);
        }

        self.entries.retain_mut(|entry| {
            let done = entry.state == ToastState::Dismissing
                && entry.grace.as_ref().is_some_and(|g| g.is_expired(now));
            if done {
                entry.visual.remove();
            }
            !done
        });
    }

    /// Live entries in insertion order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &StackEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn state_of(&self, id: NotificationId) -> Option<ToastState> {
        self.entries.iter().find(|e| e.id == id).map(StackEntry::state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
