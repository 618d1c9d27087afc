// SPDX-License-Identifier: MPL-2.0
//! Blocking alert modals.
//!
//! A modal has no timeout, no escape path, and no programmatic
//! dismissal; pressing its single confirm action is the only way out.
//! Overlapping calls are not deduplicated: each call mounts its own
//! overlay+dialog pair and they stack.

use crate::render::Visual;
use crate::timer::Countdown;
use std::time::{Duration, Instant};

/// Unique identifier for a modal instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

impl ModalId {
    /// Creates a new unique modal ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ModalId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalState {
    Showing,
    Dismissing,
}

struct Modal {
    id: ModalId,
    state: ModalState,
    grace: Option<Countdown>,
    visual: Box<dyn Visual>,
}

/// Live overlay+dialog pairs, newest last.
pub struct ModalRegistry {
    modals: Vec<Modal>,
    exit_grace: Duration,
}

impl ModalRegistry {
    #[must_use]
    pub fn new(exit_grace: Duration) -> Self {
        Self {
            modals: Vec::new(),
            exit_grace,
        }
    }

    /// Registers a freshly mounted overlay+dialog pair.
    pub fn insert(&mut self, id: ModalId, mut visual: Box<dyn Visual>) {
        visual.set_visible(true);
        self.modals.push(Modal {
            id,
            state: ModalState::Showing,
            grace: None,
            visual,
        });
    }

    /// Handles the confirm action, the sole transition out of Showing.
    pub fn confirm(&mut self, id: ModalId, now: Instant) {
        let Some(modal) = self.modals.iter_mut().find(|m| m.id == id) else {
            return;
        };
        if modal.state == ModalState::Dismissing {
            return;
        }
        modal.state = ModalState::Dismissing;
        modal.visual.set_visible(false);
        modal.grace = Some(Countdown::armed(self.exit_grace, now));
    }

    /// Releases confirmed modals whose exit grace has run out.
    pub fn tick(&mut self, now: Instant) {
        self.modals.retain_mut(|modal| {
            let done = modal.state == ModalState::Dismissing
                && modal.grace.as_ref().is_some_and(|g| g.is_expired(now));
            if done {
                modal.visual.remove();
            }
            !done
        });
    }

    /// IDs of live modals, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.modals.iter().map(|m| m.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }
}
