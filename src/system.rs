// SPDX-License-Identifier: MPL-2.0
//! OS notification bridge contract.
//!
//! System popups bypass the in-page presentation host entirely; the
//! board only needs a way to query support and permission, issue a
//! one-shot permission request, and show/close native popups. Missing
//! support and denied permission are absorbed silently, never surfaced
//! as errors.

use crate::config::defaults::{DEFAULT_PANEL_TIMEOUT_MS, DEFAULT_PANEL_TITLE};
use crate::notification::Kind;
use std::time::Duration;

/// Current permission state of the OS notification facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// The user has not decided yet; a request may be issued.
    Undetermined,
}

/// Terminal outcome of a one-shot permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    /// The prompt was closed without a decision.
    Dismissed,
}

/// The default tag used when [`SystemNote::tag`] is not set.
pub const DEFAULT_NOTE_TAG: &str = "default-notification";

/// Options accepted by [`crate::board::Board::system_notify`].
#[derive(Debug, Clone)]
pub struct SystemNote {
    /// Kind, used by the bridge to pick a default icon.
    pub kind: Kind,
    /// Popup title.
    pub title: String,
    /// Popup body.
    pub body: String,
    /// Icon URL; when absent the bridge chooses a kind-based default.
    pub icon: Option<String>,
    /// Replacement tag: popups sharing a tag coalesce on most platforms.
    pub tag: String,
    /// Auto-close timeout. `Duration::ZERO` leaves the popup open.
    pub timeout: Duration,
    /// Suppress the platform notification sound.
    pub silent: bool,
}

impl Default for SystemNote {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            title: DEFAULT_PANEL_TITLE.to_string(),
            body: String::new(),
            icon: None,
            tag: DEFAULT_NOTE_TAG.to_string(),
            timeout: Duration::from_millis(DEFAULT_PANEL_TIMEOUT_MS),
            silent: true,
        }
    }
}

impl SystemNote {
    /// Creates a note with the given kind and all other fields defaulted.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Creates a success note with the given body.
    pub fn success(body: impl Into<String>) -> Self {
        Self::new(Kind::Success).with_body(body)
    }

    /// Creates an error note with the given body.
    pub fn error(body: impl Into<String>) -> Self {
        Self::new(Kind::Error).with_body(body)
    }

    /// Creates a warning note with the given body.
    pub fn warning(body: impl Into<String>) -> Self {
        Self::new(Kind::Warning).with_body(body)
    }

    /// Creates an info note with the given body.
    pub fn info(body: impl Into<String>) -> Self {
        Self::new(Kind::Info).with_body(body)
    }

    /// Sets the popup title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the popup body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets an explicit icon URL.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the replacement tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the auto-close timeout. `Duration::ZERO` leaves the popup open.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A live native popup; the engine only ever closes it.
pub trait Popup {
    /// Closes the popup. Called at most once by the engine.
    fn close(&mut self);
}

/// Bridge to the OS notification facility.
pub trait SystemBridge {
    /// Whether the platform exposes a notification facility at all.
    fn is_supported(&self) -> bool;

    /// Current permission state.
    fn permission(&self) -> Permission;

    /// Issues the one-shot permission prompt. The outcome arrives later
    /// as [`crate::board::Event::PermissionResolved`].
    fn request_permission(&mut self);

    /// Displays a native popup. Only called while permission is granted.
    fn show(&mut self, note: &SystemNote) -> Box<dyn Popup>;
}
