// SPDX-License-Identifier: MPL-2.0
//! Board: the notification lifecycle and scheduling engine.
//!
//! A [`Board`] owns all surface state (panels, toasts, modals, system
//! popups, deferred tasks) and is mutated only by its host's loop:
//! handles returned to callers talk to it through a command channel
//! drained on the next [`Board::tick`], so there is a single writer and
//! no locks. The only parallel execution is the deferred delay worker,
//! which communicates exclusively by one-way channel messages.
//!
//! # Usage
//!
//! ```ignore
//! let mut board = Board::new(Box::new(ConsoleRenderer::new()));
//! board.begin_init();
//!
//! let handle = board.notify(NotifyOptions::success("Saved"));
//! board.toast("Copied to clipboard");
//!
//! loop {
//!     board.tick(); // pump every ~100ms
//! }
//! ```

mod event;
mod gate;
mod modal;
mod panel;
mod stack;

pub use event::Event;
pub use gate::Readiness;
pub use modal::ModalId;
pub use panel::{Panel, PanelState};
pub use stack::{StackEntry, ToastState};

use crate::config::defaults::{
    DEFAULT_EXIT_GRACE_MS, DEFAULT_PANEL_TIMEOUT_MS, DEFAULT_STACK_SPACING_PX,
    DEFAULT_TOAST_DURATION_MS,
};
use crate::config::Config;
use crate::deferred::{DeferredHandle, DelayWorker};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::notification::{NotificationId, NotifyOptions};
use crate::render::{MountStatus, PanelSpec, Renderer};
use crate::system::{Permission, PermissionOutcome, Popup, SystemBridge, SystemNote};
use crate::timer::Countdown;
use crossbeam_channel::{unbounded, Receiver, Sender};
use gate::Gate;
use modal::ModalRegistry;
use panel::PanelRegistry;
use stack::Stack;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Timing and layout parameters, derivable from [`Config`].
#[derive(Debug, Clone)]
pub struct BoardSettings {
    /// Default auto-dismiss timeout for panels built by hosts.
    pub default_panel_timeout: Duration,
    /// Fixed display duration of every toast.
    pub toast_duration: Duration,
    /// Vertical spacing between stacked toasts, in pixels.
    pub stack_spacing_px: u32,
    /// Grace period between hiding and releasing a visual.
    pub exit_grace: Duration,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            default_panel_timeout: Duration::from_millis(DEFAULT_PANEL_TIMEOUT_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            stack_spacing_px: DEFAULT_STACK_SPACING_PX,
            exit_grace: Duration::from_millis(DEFAULT_EXIT_GRACE_MS),
        }
    }
}

impl BoardSettings {
    /// Applies persisted overrides on top of the built-in defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            default_panel_timeout: config
                .panel_timeout_ms
                .map_or(defaults.default_panel_timeout, Duration::from_millis),
            toast_duration: config
                .toast_duration_ms
                .map_or(defaults.toast_duration, Duration::from_millis),
            stack_spacing_px: config.stack_spacing_px.unwrap_or(defaults.stack_spacing_px),
            exit_grace: config
                .exit_grace_ms
                .map_or(defaults.exit_grace, Duration::from_millis),
        }
    }
}

/// Commands sent from handles back to the owning board.
#[derive(Debug, Clone, Copy)]
enum Command {
    DismissPanel(NotificationId),
    DismissToast(NotificationId),
    CloseSystem(NotificationId),
}

#[derive(Debug, Clone, Copy)]
enum HandleTarget {
    Panel(NotificationId),
    Toast(NotificationId),
}

/// Dismissal handle returned by [`Board::notify`] and [`Board::toast`].
///
/// A handle for a request queued before readiness is inert: a request
/// that never rendered cannot be dismissed, so `dismiss()` does nothing.
#[derive(Debug, Clone)]
pub struct NotifyHandle {
    target: Option<HandleTarget>,
    commands: Sender<Command>,
}

impl NotifyHandle {
    /// Asks the board to dismiss this notification at its next pump.
    ///
    /// Safe to call any number of times; redundant calls are absorbed.
    pub fn dismiss(&self) {
        match self.target {
            Some(HandleTarget::Panel(id)) => {
                let _ = self.commands.send(Command::DismissPanel(id));
            }
            Some(HandleTarget::Toast(id)) => {
                let _ = self.commands.send(Command::DismissToast(id));
            }
            None => {}
        }
    }

    /// The instance this handle controls, if it rendered.
    #[must_use]
    pub fn id(&self) -> Option<NotificationId> {
        match self.target {
            Some(HandleTarget::Panel(id) | HandleTarget::Toast(id)) => Some(id),
            None => None,
        }
    }
}

/// Close handle returned by [`Board::system_notify`].
#[derive(Debug, Clone)]
pub struct SystemHandle {
    id: NotificationId,
    commands: Sender<Command>,
}

impl SystemHandle {
    /// Asks the board to close the native popup at its next pump.
    pub fn close(&self) {
        let _ = self.commands.send(Command::CloseSystem(self.id));
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }
}

struct DeferredEntry {
    worker: DelayWorker,
    cancelled: Arc<AtomicBool>,
    task: Option<Box<dyn FnOnce()>>,
    callback: Option<Box<dyn FnOnce()>>,
}

struct SystemEntry {
    id: NotificationId,
    popup: Box<dyn Popup>,
    /// Auto-close countdown; `None` when the note's timeout was zero.
    countdown: Option<Countdown>,
}

/// The notification lifecycle and scheduling engine.
pub struct Board {
    settings: BoardSettings,
    gate: Gate,
    panels: PanelRegistry,
    stack: Stack,
    modals: ModalRegistry,
    renderer: Box<dyn Renderer>,
    bridge: Option<Box<dyn SystemBridge>>,
    diagnostics: Option<DiagnosticsHandle>,
    command_tx: Sender<Command>,
    command_rx: Receiver<Command>,
    deferred: Vec<DeferredEntry>,
    popups: Vec<SystemEntry>,
    /// Notes awaiting the outcome of the one-shot permission request.
    held_notes: Vec<SystemNote>,
    permission_requested: bool,
}

impl Board {
    /// Creates a board with default settings. No mount occurs until
    /// [`Board::begin_init`] or the first gated request.
    #[must_use]
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self::with_settings(renderer, BoardSettings::default())
    }

    /// Creates a board with explicit settings.
    #[must_use]
    pub fn with_settings(renderer: Box<dyn Renderer>, settings: BoardSettings) -> Self {
        let (command_tx, command_rx) = unbounded();
        Self {
            gate: Gate::new(),
            panels: PanelRegistry::new(settings.exit_grace),
            stack: Stack::new(
                settings.stack_spacing_px,
                settings.toast_duration,
                settings.exit_grace,
            ),
            modals: ModalRegistry::new(settings.exit_grace),
            settings,
            renderer,
            bridge: None,
            diagnostics: None,
            command_tx,
            command_rx,
            deferred: Vec::new(),
            popups: Vec::new(),
            held_notes: Vec::new(),
            permission_requested: false,
        }
    }

    /// Attaches an OS notification bridge. Without one,
    /// [`Board::system_notify`] warns and returns `None`.
    pub fn set_system_bridge(&mut self, bridge: Box<dyn SystemBridge>) {
        self.bridge = Some(bridge);
    }

    /// Sets the diagnostics handle for logging absorbed failures.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    #[must_use]
    pub fn readiness(&self) -> Readiness {
        self.gate.readiness()
    }

    /// Triggers host mounting. Idempotent: while a mount is in flight
    /// or already complete this is a no-op, so concurrent first calls
    /// produce exactly one mount.
    pub fn begin_init(&mut self) {
        if self.gate.begin_init() {
            match self.renderer.mount_host() {
                MountStatus::Ready => self.finish_init(Instant::now()),
                MountStatus::Deferred => {}
            }
        }
    }

    /// Environment signal that a deferred host mount completed.
    ///
    /// Flushes every queued request exactly once, in arrival order
    /// within each surface. Redundant signals are absorbed.
    pub fn host_ready(&mut self) {
        self.finish_init(Instant::now());
    }

    fn finish_init(&mut self, now: Instant) {
        if !self.gate.mark_ready() {
            return;
        }
        let queued = self.gate.take_queued();
        for options in queued.notifies {
            self.show_panel(options, now);
        }
        for content in queued.toasts {
            self.show_toast(content, now);
        }
        for message in queued.alerts {
            self.show_modal(message);
        }
    }

    /// Shows an in-page notification panel, or queues it (and triggers
    /// initialization) while the host is not ready.
    pub fn notify(&mut self, options: NotifyOptions) -> NotifyHandle {
        if !self.gate.is_ready() {
            self.gate.queue_notify(options);
            self.begin_init();
            return NotifyHandle {
                target: None,
                commands: self.command_tx.clone(),
            };
        }
        let id = self.show_panel(options, Instant::now());
        NotifyHandle {
            target: Some(HandleTarget::Panel(id)),
            commands: self.command_tx.clone(),
        }
    }

    /// Shows a transient toast, or queues it while the host is not
    /// ready. Toasts display for the fixed configured duration.
    pub fn toast(&mut self, content: impl Into<String>) -> NotifyHandle {
        let content = content.into();
        if !self.gate.is_ready() {
            self.gate.queue_toast(content);
            self.begin_init();
            return NotifyHandle {
                target: None,
                commands: self.command_tx.clone(),
            };
        }
        let id = self.show_toast(content, Instant::now());
        NotifyHandle {
            target: Some(HandleTarget::Toast(id)),
            commands: self.command_tx.clone(),
        }
    }

    /// Shows a blocking alert modal, or queues it while the host is not
    /// ready. Always returns `false`; the value carries no outcome.
    pub fn alert(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if !self.gate.is_ready() {
            self.gate.queue_alert(message);
            self.begin_init();
            return false;
        }
        self.show_modal(message);
        false
    }

    /// Displays a native OS popup, bypassing the presentation host.
    ///
    /// Returns `None` when the facility is unsupported, permission is
    /// not granted yet, or display is denied; none of those are errors.
    pub fn system_notify(&mut self, note: SystemNote) -> Option<SystemHandle> {
        let (supported, permission) = match self.bridge.as_ref() {
            Some(bridge) => (bridge.is_supported(), bridge.permission()),
            None => (false, Permission::Undetermined),
        };
        if !supported {
            self.warn(
                WarningType::SystemUnsupported,
                "system notifications are not supported on this host",
            );
            return None;
        }
        match permission {
            Permission::Granted => {
                let id = self.show_system_note(note, Instant::now());
                Some(SystemHandle {
                    id,
                    commands: self.command_tx.clone(),
                })
            }
            Permission::Undetermined => {
                self.held_notes.push(note);
                if !self.permission_requested {
                    self.permission_requested = true;
                    if let Some(bridge) = self.bridge.as_mut() {
                        bridge.request_permission();
                    }
                }
                None
            }
            Permission::Denied => {
                self.warn(
                    WarningType::PermissionDenied,
                    "notification permission denied, skipping display",
                );
                None
            }
        }
    }

    /// Schedules `task` to run on the board's context once `duration`
    /// has elapsed on an isolated timing thread.
    ///
    /// The delay is sampled at a coarse interval, so the task fires up
    /// to one polling interval after the requested duration.
    pub fn schedule_deferred(
        &mut self,
        duration: Duration,
        task: impl FnOnce() + 'static,
    ) -> DeferredHandle {
        self.push_deferred(duration, Box::new(task), None)
    }

    /// Like [`Board::schedule_deferred`], with a completion callback
    /// invoked right after the task.
    pub fn schedule_deferred_with_callback(
        &mut self,
        duration: Duration,
        task: impl FnOnce() + 'static,
        callback: impl FnOnce() + 'static,
    ) -> DeferredHandle {
        self.push_deferred(duration, Box::new(task), Some(Box::new(callback)))
    }

    fn push_deferred(
        &mut self,
        duration: Duration,
        task: Box<dyn FnOnce()>,
        callback: Option<Box<dyn FnOnce()>>,
    ) -> DeferredHandle {
        let worker = DelayWorker::spawn(duration);
        let cancelled = Arc::new(AtomicBool::new(false));
        let handle = DeferredHandle::new(Arc::clone(&cancelled), worker.cancel_sender());
        self.deferred.push(DeferredEntry {
            worker,
            cancelled,
            task: Some(task),
            callback,
        });
        handle
    }

    /// Delivers an externally signaled event, stamped with the current
    /// time.
    pub fn update(&mut self, event: Event) {
        self.update_at(event, Instant::now());
    }

    /// Delivers an externally signaled event at an explicit time.
    pub fn update_at(&mut self, event: Event, now: Instant) {
        match event {
            Event::PointerEntered(id) => self.panels.pointer_enter(id, now),
            Event::PointerLeft(id) => self.panels.pointer_leave(id, now),
            Event::ClosePressed(id) => self.panels.dismiss(id, now),
            Event::ToastPressed(id) => self.stack.dismiss(id, now),
            Event::ModalConfirmed(id) => self.modals.confirm(id, now),
            Event::PermissionResolved(outcome) => self.resolve_permission(outcome, now),
        }
    }

    /// Pumps the board: drains handle commands and worker completions,
    /// advances countdowns, performs expiries and grace transitions.
    ///
    /// Hosts should call this periodically (every
    /// [`crate::config::defaults::TICK_INTERVAL_MS`] milliseconds or so).
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Pumps the board at an explicit time.
    pub fn tick_at(&mut self, now: Instant) {
        self.drain_commands(now);
        self.fire_deferred();
        self.panels.tick(now);
        self.stack.tick(now);
        self.modals.tick(now);
        self.tick_popups(now);
    }

    /// Whether nothing is live or pending anywhere on the board.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.gate.queued_len() == 0
            && self.panels.is_empty()
            && self.stack.is_empty()
            && self.modals.is_empty()
            && self.deferred.is_empty()
            && self.popups.is_empty()
            && self.held_notes.is_empty()
    }

    /// Live notification panels (unordered).
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// State of a live panel; `None` once released.
    #[must_use]
    pub fn panel_state(&self, id: NotificationId) -> Option<PanelState> {
        self.panels.state_of(id)
    }

    /// Live toasts in insertion order (oldest first).
    pub fn toasts(&self) -> impl Iterator<Item = &StackEntry> {
        self.stack.iter()
    }

    /// Live modal IDs, oldest first.
    pub fn modals(&self) -> impl Iterator<Item = ModalId> + '_ {
        self.modals.ids()
    }

    /// Number of live native popups.
    #[must_use]
    pub fn popup_count(&self) -> usize {
        self.popups.len()
    }

    fn drain_commands(&mut self, now: Instant) {
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                Command::DismissPanel(id) => self.panels.dismiss(id, now),
                Command::DismissToast(id) => self.stack.dismiss(id, now),
                Command::CloseSystem(id) => self.close_popup(id),
            }
        }
    }

    fn fire_deferred(&mut self) {
        // Cancellation wins over an in-flight completion signal: check
        // the flag before consuming the signal, so at most one of
        // {task fired, cancel took effect} ever happens.
        self.deferred.retain_mut(|entry| {
            if entry.cancelled.load(std::sync::atomic::Ordering::SeqCst) {
                return false;
            }
            if entry.worker.poll_complete() {
                if let Some(task) = entry.task.take() {
                    task();
                }
                if let Some(callback) = entry.callback.take() {
                    callback();
                }
                return false;
            }
            true
        });
    }

    fn tick_popups(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .popups
            .iter()
            .filter(|p| p.countdown.as_ref().is_some_and(|c| c.is_expired(now)))
            .map(|p| p.id)
            .collect();
        for id in expired {
            self.close_popup(id);
        }
    }

    fn close_popup(&mut self, id: NotificationId) {
        if let Some(pos) = self.popups.iter().position(|p| p.id == id) {
            let mut entry = self.popups.remove(pos);
            entry.popup.close();
        }
    }

    fn resolve_permission(&mut self, outcome: PermissionOutcome, now: Instant) {
        let held = std::mem::take(&mut self.held_notes);
        match outcome {
            PermissionOutcome::Granted => {
                for note in held {
                    self.show_system_note(note, now);
                }
            }
            PermissionOutcome::Denied => {
                self.warn(
                    WarningType::PermissionDenied,
                    format!("permission denied, dropping {} held note(s)", held.len()),
                );
            }
            PermissionOutcome::Dismissed => {
                self.warn(
                    WarningType::PermissionDismissed,
                    format!(
                        "permission prompt dismissed, dropping {} held note(s)",
                        held.len()
                    ),
                );
            }
        }
    }

    fn show_panel(&mut self, options: NotifyOptions, now: Instant) -> NotificationId {
        let timeout = options
            .timeout
            .unwrap_or(self.settings.default_panel_timeout);
        let spec = PanelSpec {
            kind: options.kind,
            title: options.title.clone(),
            content: options.resolved_content(),
            logo: options.logo.clone(),
            show_progress: options.show_progress,
            timeout,
        };
        let visual = self.renderer.mount_panel(&spec);
        let id = NotificationId::new();
        self.panels.insert(id, options.kind, timeout, visual, now);
        id
    }

    fn show_toast(&mut self, content: String, now: Instant) -> NotificationId {
        let visual = self.renderer.mount_toast(&content);
        let id = NotificationId::new();
        self.stack.insert(id, visual, now);
        id
    }

    fn show_modal(&mut self, message: String) {
        let visual = self.renderer.mount_alert(&message);
        self.modals.insert(ModalId::new(), visual);
    }

    fn show_system_note(&mut self, note: SystemNote, now: Instant) -> NotificationId {
        let id = NotificationId::new();
        if let Some(bridge) = self.bridge.as_mut() {
            let popup = bridge.show(&note);
            let countdown = if note.timeout.is_zero() {
                None
            } else {
                Some(Countdown::armed(note.timeout, now))
            };
            self.popups.push(SystemEntry {
                id,
                popup,
                countdown,
            });
        }
        id
    }

    fn warn(&self, warning_type: WarningType, message: impl Into<String>) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(WarningEvent::new(warning_type, message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::notification::Kind;
    use crate::test_utils::{BridgeLog, FakeBridge, RecordingRenderer, RenderAction, RenderLog};
    use std::cell::Cell;
    use std::rc::Rc;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn ready_board(log: &RenderLog) -> Board {
        let mut board = Board::new(Box::new(RecordingRenderer::ready(log.clone())));
        board.begin_init();
        board
    }

    #[test]
    fn synchronous_mount_makes_the_board_ready() {
        let log = RenderLog::new();
        let board = ready_board(&log);
        assert_eq!(board.readiness(), Readiness::Ready);
        assert!(log
            .actions()
            .iter()
            .any(|a| matches!(a, RenderAction::HostMounted)));
    }

    #[test]
    fn deferred_mount_waits_for_the_environment_signal() {
        let log = RenderLog::new();
        let mut board = Board::new(Box::new(RecordingRenderer::deferred(log.clone())));
        board.begin_init();
        assert_eq!(board.readiness(), Readiness::Initializing);

        board.host_ready();
        assert_eq!(board.readiness(), Readiness::Ready);
    }

    #[test]
    fn pre_ready_requests_flush_in_fifo_order_per_surface() {
        let log = RenderLog::new();
        let mut board = Board::new(Box::new(RecordingRenderer::deferred(log.clone())));

        board.notify(NotifyOptions::success("one"));
        board.toast("t1");
        board.notify(NotifyOptions::error("two"));
        board.alert("a1");
        assert_eq!(log.panel_count(), 0);

        board.host_ready();

        let panels: Vec<String> = log
            .actions()
            .iter()
            .filter_map(|a| match a {
                RenderAction::PanelMounted { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(panels, vec!["one".to_string(), "two".to_string()]);
        assert!(log
            .actions()
            .iter()
            .any(|a| matches!(a, RenderAction::ToastMounted { .. })));
        assert!(log
            .actions()
            .iter()
            .any(|a| matches!(a, RenderAction::AlertMounted { .. })));
    }

    #[test]
    fn many_pre_ready_calls_mount_the_host_once() {
        let log = RenderLog::new();
        let mut board = Board::new(Box::new(RecordingRenderer::deferred(log.clone())));

        for i in 0..20 {
            board.notify(NotifyOptions::info(format!("n{i}")));
        }
        board.host_ready();
        board.host_ready();

        let mounts = log
            .actions()
            .iter()
            .filter(|a| matches!(a, RenderAction::HostMounted))
            .count();
        assert_eq!(mounts, 1);
        assert_eq!(log.panel_count(), 20);
    }

    #[test]
    fn queued_handle_is_inert() {
        let log = RenderLog::new();
        let mut board = Board::new(Box::new(RecordingRenderer::deferred(log.clone())));

        let handle = board.notify(NotifyOptions::info("queued"));
        assert!(handle.id().is_none());
        handle.dismiss();
        board.host_ready();
        board.tick();

        // The flushed panel is untouched by the pre-flush handle.
        assert_eq!(board.panels().count(), 1);
    }

    #[test]
    fn handle_dismiss_lands_on_the_next_pump() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let t0 = Instant::now();

        let handle = board.notify(NotifyOptions::info("x"));
        let id = handle.id().expect("rendered notification has an id");
        assert_eq!(board.panel_state(id), Some(PanelState::Showing));

        handle.dismiss();
        handle.dismiss();
        board.tick_at(t0 + ms(10));
        assert_eq!(board.panel_state(id), Some(PanelState::Dismissing));

        board.tick_at(t0 + ms(10) + board.settings().exit_grace);
        assert_eq!(board.panel_state(id), None);
        assert_eq!(log.removed_count(), 1);
    }

    #[test]
    fn alert_always_returns_false() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        assert!(!board.alert("ready alert"));

        let mut cold = Board::new(Box::new(RecordingRenderer::deferred(RenderLog::new())));
        assert!(!cold.alert("queued alert"));
    }

    #[test]
    fn modal_confirm_releases_the_pair() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let t0 = Instant::now();

        board.alert("sure?");
        let id = board.modals().next().expect("modal is live");

        board.update_at(Event::ModalConfirmed(id), t0);
        board.tick_at(t0 + board.settings().exit_grace);
        assert_eq!(board.modals().count(), 0);
    }

    #[test]
    fn toast_press_dismisses_through_the_board() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let t0 = Instant::now();

        let handle = board.toast("tap me");
        let id = handle.id().expect("rendered toast has an id");

        board.update_at(Event::ToastPressed(id), t0);
        board.tick_at(t0 + board.settings().exit_grace);
        assert!(board.toasts().next().is_none());
        assert_eq!(log.removed_count(), 1);
    }

    #[test]
    fn system_notify_without_bridge_warns_and_returns_none() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let mut collector = DiagnosticsCollector::default();
        board.set_diagnostics(collector.handle());

        assert!(board.system_notify(SystemNote::info("hello")).is_none());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
        assert!(collector.iter().all(|e| e.is_warning()));
    }

    #[test]
    fn system_notify_unsupported_bridge_warns_and_returns_none() {
        let log = RenderLog::new();
        let bridge_log = BridgeLog::new();
        let mut board = ready_board(&log);
        board.set_system_bridge(Box::new(FakeBridge::unsupported(bridge_log.clone())));

        assert!(board.system_notify(SystemNote::info("hello")).is_none());
        assert_eq!(bridge_log.shown_count(), 0);
    }

    #[test]
    fn granted_permission_shows_immediately() {
        let log = RenderLog::new();
        let bridge_log = BridgeLog::new();
        let mut board = ready_board(&log);
        board.set_system_bridge(Box::new(FakeBridge::granted(bridge_log.clone())));

        let handle = board
            .system_notify(SystemNote::success("done").with_timeout(Duration::ZERO))
            .expect("granted permission shows the popup");
        assert_eq!(bridge_log.shown_count(), 1);
        assert_eq!(board.popup_count(), 1);

        handle.close();
        handle.close();
        board.tick();
        assert_eq!(board.popup_count(), 0);
        assert_eq!(bridge_log.closed_count(), 1);
    }

    #[test]
    fn popup_auto_closes_after_its_timeout() {
        let log = RenderLog::new();
        let bridge_log = BridgeLog::new();
        let mut board = ready_board(&log);
        board.set_system_bridge(Box::new(FakeBridge::granted(bridge_log.clone())));
        let t0 = Instant::now();

        board.system_notify(SystemNote::info("gone soon").with_timeout(ms(1000)));
        board.tick_at(t0 + ms(900));
        assert_eq!(board.popup_count(), 1);

        board.tick_at(t0 + ms(1100));
        assert_eq!(board.popup_count(), 0);
        assert_eq!(bridge_log.closed_count(), 1);
    }

    #[test]
    fn undetermined_permission_holds_notes_and_requests_once() {
        let log = RenderLog::new();
        let bridge_log = BridgeLog::new();
        let mut board = ready_board(&log);
        board.set_system_bridge(Box::new(FakeBridge::undetermined(bridge_log.clone())));

        assert!(board.system_notify(SystemNote::info("one")).is_none());
        assert!(board.system_notify(SystemNote::info("two")).is_none());
        assert_eq!(bridge_log.permission_requests(), 1);
        assert_eq!(bridge_log.shown_count(), 0);

        board.update(Event::PermissionResolved(PermissionOutcome::Granted));
        assert_eq!(bridge_log.shown_count(), 2);
    }

    #[test]
    fn denied_outcome_drops_held_notes_silently() {
        let log = RenderLog::new();
        let bridge_log = BridgeLog::new();
        let mut board = ready_board(&log);
        board.set_system_bridge(Box::new(FakeBridge::undetermined(bridge_log.clone())));

        board.system_notify(SystemNote::info("never shown"));
        board.update(Event::PermissionResolved(PermissionOutcome::Denied));

        assert_eq!(bridge_log.shown_count(), 0);
        assert!(board.is_idle());
    }

    #[test]
    fn denied_permission_skips_display_without_error() {
        let log = RenderLog::new();
        let bridge_log = BridgeLog::new();
        let mut board = ready_board(&log);
        board.set_system_bridge(Box::new(FakeBridge::denied(bridge_log.clone())));

        assert!(board.system_notify(SystemNote::error("nope")).is_none());
        assert_eq!(bridge_log.shown_count(), 0);
        assert_eq!(bridge_log.permission_requests(), 0);
    }

    #[test]
    fn deferred_task_fires_once_after_its_delay() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let fired = Rc::new(Cell::new(0u32));
        let fired_in_task = Rc::clone(&fired);

        board.schedule_deferred(ms(50), move || {
            fired_in_task.set(fired_in_task.get() + 1);
        });

        let started = Instant::now();
        while fired.get() == 0 {
            assert!(
                started.elapsed() < ms(2000),
                "deferred task never fired"
            );
            std::thread::sleep(ms(10));
            board.tick();
        }
        assert!(started.elapsed() >= ms(50));

        // Extra pumps never fire it again.
        board.tick();
        board.tick();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn deferred_callback_runs_after_the_task() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let task_order = Rc::clone(&order);
        let callback_order = Rc::clone(&order);

        board.schedule_deferred_with_callback(
            ms(50),
            move || task_order.borrow_mut().push("task"),
            move || callback_order.borrow_mut().push("callback"),
        );

        let started = Instant::now();
        while order.borrow().is_empty() && started.elapsed() < ms(2000) {
            std::thread::sleep(ms(10));
            board.tick();
        }
        assert_eq!(*order.borrow(), vec!["task", "callback"]);
    }

    #[test]
    fn immediate_cancel_prevents_the_task() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let fired = Rc::new(Cell::new(false));
        let fired_in_task = Rc::clone(&fired);

        let handle = board.schedule_deferred(ms(100), move || fired_in_task.set(true));
        handle.cancel();

        std::thread::sleep(ms(500));
        board.tick();
        board.tick();
        assert!(!fired.get());
        assert!(board.is_idle());
    }

    #[test]
    fn cancel_after_completion_signal_still_wins() {
        let log = RenderLog::new();
        let mut board = ready_board(&log);
        let fired = Rc::new(Cell::new(false));
        let fired_in_task = Rc::clone(&fired);

        let handle = board.schedule_deferred(ms(50), move || fired_in_task.set(true));

        // Let the completion signal land, then cancel before pumping.
        std::thread::sleep(ms(400));
        handle.cancel();
        board.tick();

        assert!(!fired.get());
    }

    #[test]
    fn settings_come_from_config_overrides() {
        let config = Config {
            panel_timeout_ms: Some(7000),
            toast_duration_ms: Some(1000),
            stack_spacing_px: Some(42),
            exit_grace_ms: None,
        };
        let settings = BoardSettings::from_config(&config);
        assert_eq!(settings.default_panel_timeout, ms(7000));
        assert_eq!(settings.toast_duration, ms(1000));
        assert_eq!(settings.stack_spacing_px, 42);
        assert_eq!(settings.exit_grace, ms(DEFAULT_EXIT_GRACE_MS));
    }

    #[test]
    fn queued_success_shorthand_flushes_with_defaults() {
        let log = RenderLog::new();
        let mut board = Board::new(Box::new(RecordingRenderer::deferred(log.clone())));

        board.notify(NotifyOptions::success("Saved"));
        board.host_ready();

        let mounted = log.actions().into_iter().find_map(|a| match a {
            RenderAction::PanelMounted {
                kind,
                title,
                content,
                ..
            } => Some((kind, title, content)),
            _ => None,
        });
        let (kind, title, content) = mounted.expect("panel was mounted after readiness");
        assert_eq!(kind, Kind::Success);
        assert_eq!(title, "Notification");
        assert_eq!(content, "Saved");

        let panel = board.panels().next().expect("panel is live");
        assert_eq!(
            panel.remaining(Instant::now()).map(|d| d.as_secs()),
            Some(4)
        );
    }
}
