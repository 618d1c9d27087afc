// SPDX-License-Identifier: MPL-2.0
//! Notification panel lifecycle.
//!
//! Each panel owns at most one armed countdown at a time. Hover pauses
//! the countdown, leave resumes it with the banked remainder, so the
//! total *active* display time before auto-dismiss always equals the
//! requested timeout. Dismissal is idempotent: it hides the visual,
//! arms a short exit grace, and only then releases the visual.

use crate::notification::{Kind, NotificationId};
use crate::render::Visual;
use crate::timer::Countdown;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle state of one panel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Visible, countdown (if any) running.
    Showing,
    /// Visible, countdown frozen under the pointer.
    Paused,
    /// Hidden, waiting out the exit grace before release.
    Dismissing,
    /// Terminal; no further timer or visual mutation occurs.
    Dismissed,
}

/// One live notification panel.
pub struct Panel {
    id: NotificationId,
    kind: Kind,
    state: PanelState,
    /// Auto-dismiss countdown; `None` when the timeout was zero.
    countdown: Option<Countdown>,
    /// Exit grace countdown; armed on dismissal.
    grace: Option<Countdown>,
    visual: Box<dyn Visual>,
}

impl Panel {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Active time left before auto-dismiss, if a countdown exists.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.countdown.as_ref().map(|c| c.remaining(now))
    }
}

/// Instance table for live panels, keyed by id.
pub struct PanelRegistry {
    panels: HashMap<NotificationId, Panel>,
    exit_grace: Duration,
}

impl PanelRegistry {
    #[must_use]
    pub fn new(exit_grace: Duration) -> Self {
        Self {
            panels: HashMap::new(),
            exit_grace,
        }
    }

    /// Registers a freshly mounted panel and arms its countdown.
    ///
    /// A zero `timeout` disables auto-dismiss; the panel then shows
    /// until an explicit dismissal.
    pub fn insert(
        &mut self,
        id: NotificationId,
        kind: Kind,
        timeout: Duration,
        mut visual: Box<dyn Visual>,
        now: Instant,
    ) {
        visual.set_visible(true);
        let countdown = if timeout.is_zero() {
            None
        } else {
            Some(Countdown::armed(timeout, now))
        };
        self.panels.insert(
            id,
            Panel {
                id,
                kind,
                state: PanelState::Showing,
                countdown,
                grace: None,
                visual,
            },
        );
    }

    /// Pauses the panel's countdown. Re-entrant enters are idempotent,
    /// and panels without a countdown ignore hover entirely.
    pub fn pointer_enter(&mut self, id: NotificationId, now: Instant) {
        let Some(panel) = self.panels.get_mut(&id) else {
            return;
        };
        if panel.state != PanelState::Showing {
            return;
        }
        if let Some(countdown) = panel.countdown.as_mut() {
            countdown.pause(now);
            panel.state = PanelState::Paused;
        }
    }

    /// Resumes the countdown with the banked remainder; dismisses
    /// immediately if nothing remains.
    pub fn pointer_leave(&mut self, id: NotificationId, now: Instant) {
        let Some(panel) = self.panels.get_mut(&id) else {
            return;
        };
        if panel.state != PanelState::Paused {
            return;
        }
        let expired = match panel.countdown.as_mut() {
            Some(countdown) => {
                if countdown.remaining(now).is_zero() {
                    true
                } else {
                    countdown.resume(now);
                    false
                }
            }
            None => false,
        };
        if expired {
            self.dismiss(id, now);
        } else if let Some(panel) = self.panels.get_mut(&id) {
            panel.state = PanelState::Showing;
        }
    }

    /// Starts dismissal: hides the visual and arms the exit grace.
    ///
    /// Idempotent; a panel already Dismissing or Dismissed (or long
    /// gone) is left alone, so the grace is never double-scheduled.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) {
        let Some(panel) = self.panels.get_mut(&id) else {
            return;
        };
        match panel.state {
            PanelState::Showing | PanelState::Paused => {
                panel.state = PanelState::Dismissing;
                panel.countdown = None;
                panel.visual.set_visible(false);
                panel.grace = Some(Countdown::armed(self.exit_grace, now));
            }
            PanelState::Dismissing | PanelState::Dismissed => {}
        }
    }

    /// Advances countdowns: expires due panels and releases visuals
    /// whose exit grace has run out.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .panels
            .values()
            .filter(|p| {
                p.state == PanelState::Showing
                    && p.countdown.as_ref().is_some_and(|c| c.is_expired(now))
            })
            .map(Panel::id)
            .collect();
        for id in expired {
            self.dismiss(id, now);
        }

        let done: Vec<NotificationId> = self
            .panels
            .values()
            .filter(|p| {
                p.state == PanelState::Dismissing
                    && p.grace.as_ref().is_some_and(|g| g.is_expired(now))
            })
            .map(Panel::id)
            .collect();
        for id in done {
            if let Some(mut panel) = self.panels.remove(&id) {
                panel.state = PanelState::Dismissed;
                panel.visual.remove();
            }
        }
    }

    /// State of a live panel; `None` once it has been released.
    #[must_use]
    pub fn state_of(&self, id: NotificationId) -> Option<PanelState> {
        self.panels.get(&id).map(Panel::state)
    }

    /// Returns the currently live panels (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    /// Number of live panels (including those waiting out the grace).
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RenderAction, RenderLog};

    const GRACE: Duration = Duration::from_millis(300);

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn registry_with_panel(
        timeout: Duration,
        now: Instant,
    ) -> (PanelRegistry, NotificationId, RenderLog) {
        let log = RenderLog::new();
        let mut registry = PanelRegistry::new(GRACE);
        let id = NotificationId::new();
        registry.insert(id, Kind::Info, timeout, log.visual(), now);
        (registry, id, log)
    }

    #[test]
    fn insert_shows_the_visual() {
        let t0 = Instant::now();
        let (registry, id, log) = registry_with_panel(ms(5000), t0);

        assert_eq!(registry.state_of(id), Some(PanelState::Showing));
        assert!(log
            .actions()
            .iter()
            .any(|a| matches!(a, RenderAction::VisibilitySet { visible: true, .. })));
    }

    #[test]
    fn natural_expiry_hides_then_releases_after_grace() {
        let t0 = Instant::now();
        let (mut registry, id, log) = registry_with_panel(ms(1000), t0);

        registry.tick(t0 + ms(999));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));

        registry.tick(t0 + ms(1000));
        assert_eq!(registry.state_of(id), Some(PanelState::Dismissing));
        assert!(log
            .actions()
            .iter()
            .any(|a| matches!(a, RenderAction::VisibilitySet { visible: false, .. })));
        assert_eq!(log.removed_count(), 0);

        registry.tick(t0 + ms(1000) + GRACE);
        assert_eq!(registry.state_of(id), None);
        assert_eq!(log.removed_count(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn zero_timeout_never_auto_dismisses() {
        let t0 = Instant::now();
        let (mut registry, id, _log) = registry_with_panel(Duration::ZERO, t0);

        registry.tick(t0 + ms(600_000));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));

        registry.dismiss(id, t0 + ms(600_000));
        assert_eq!(registry.state_of(id), Some(PanelState::Dismissing));
    }

    #[test]
    fn hover_pauses_and_leave_resumes_with_remainder() {
        let t0 = Instant::now();
        let (mut registry, id, _log) = registry_with_panel(ms(1000), t0);

        registry.pointer_enter(id, t0 + ms(400));
        assert_eq!(registry.state_of(id), Some(PanelState::Paused));

        // A long hover must not consume active time.
        registry.tick(t0 + ms(60_000));
        assert_eq!(registry.state_of(id), Some(PanelState::Paused));

        registry.pointer_leave(id, t0 + ms(60_000));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));

        // 600ms of active time remained.
        registry.tick(t0 + ms(60_599));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));
        registry.tick(t0 + ms(60_600));
        assert_eq!(registry.state_of(id), Some(PanelState::Dismissing));
    }

    #[test]
    fn repeated_hover_cycles_conserve_total_active_time() {
        let t0 = Instant::now();
        let (mut registry, id, _log) = registry_with_panel(ms(1000), t0);
        let mut now = t0;

        // Four cycles of 200ms active + 5s paused each: 800ms consumed.
        for _ in 0..4 {
            now += ms(200);
            registry.tick(now);
            registry.pointer_enter(id, now);
            now += ms(5000);
            registry.pointer_leave(id, now);
        }

        registry.tick(now + ms(199));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));
        registry.tick(now + ms(200));
        assert_eq!(registry.state_of(id), Some(PanelState::Dismissing));
    }

    #[test]
    fn reentrant_enters_are_idempotent() {
        let t0 = Instant::now();
        let (mut registry, id, _log) = registry_with_panel(ms(1000), t0);

        registry.pointer_enter(id, t0 + ms(300));
        registry.pointer_enter(id, t0 + ms(800));
        registry.pointer_leave(id, t0 + ms(900));

        // Only 300ms consumed; 700ms of active time remains.
        registry.tick(t0 + ms(1599));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));
        registry.tick(t0 + ms(1600));
        assert_eq!(registry.state_of(id), Some(PanelState::Dismissing));
    }

    #[test]
    fn leave_without_enter_is_a_noop() {
        let t0 = Instant::now();
        let (mut registry, id, _log) = registry_with_panel(ms(1000), t0);

        registry.pointer_leave(id, t0 + ms(100));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));

        registry.tick(t0 + ms(1000));
        assert_eq!(registry.state_of(id), Some(PanelState::Dismissing));
    }

    #[test]
    fn hover_is_ignored_without_a_countdown() {
        let t0 = Instant::now();
        let (mut registry, id, _log) = registry_with_panel(Duration::ZERO, t0);

        registry.pointer_enter(id, t0 + ms(100));
        assert_eq!(registry.state_of(id), Some(PanelState::Showing));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let t0 = Instant::now();
        let (mut registry, id, log) = registry_with_panel(ms(5000), t0);

        registry.dismiss(id, t0 + ms(100));
        registry.dismiss(id, t0 + ms(150));
        registry.dismiss(id, t0 + ms(200));

        // Grace armed once, at the first dismiss.
        registry.tick(t0 + ms(100) + GRACE);
        assert_eq!(registry.state_of(id), None);
        assert_eq!(log.removed_count(), 1);

        // Dismissing an already-released panel is a no-op.
        registry.dismiss(id, t0 + ms(1000));
        assert_eq!(log.removed_count(), 1);

        let hides = log
            .actions()
            .iter()
            .filter(|a| matches!(a, RenderAction::VisibilitySet { visible: false, .. }))
            .count();
        assert_eq!(hides, 1);
    }

    #[test]
    fn dismiss_while_paused_works() {
        let t0 = Instant::now();
        let (mut registry, id, _log) = registry_with_panel(ms(1000), t0);

        registry.pointer_enter(id, t0 + ms(100));
        registry.dismiss(id, t0 + ms(200));
        assert_eq!(registry.state_of(id), Some(PanelState::Dismissing));
    }
}
