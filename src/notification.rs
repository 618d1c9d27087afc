// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the [`NotifyOptions`] struct and [`Kind`] enum
//! used throughout the notification system.

use crate::config::defaults::DEFAULT_PANEL_TITLE;
use std::time::Duration;

/// Unique identifier for a notification instance (panel or toast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification kind determines visual styling and the default system icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully.
    Success,
    /// Something failed and needs attention.
    Error,
    /// Something went wrong but did not block the operation.
    Warning,
    /// Informational message.
    #[default]
    Info,
}

impl Kind {
    /// Returns a stable lowercase name, usable as a style class or icon key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

/// Body of a notification panel.
///
/// Markup overrides plain text when both are supplied; the rendering
/// collaborator decides how markup is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Markup(String),
}

impl Content {
    /// Returns the raw string regardless of flavor.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(s) | Content::Markup(s) => s,
        }
    }
}

/// Options accepted by [`crate::board::Board::notify`].
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    /// Notification kind (color, icon).
    pub kind: Kind,
    /// Header title.
    pub title: String,
    /// Plain-text body.
    pub content: String,
    /// Markup body; overrides `content` when present.
    pub html: Option<String>,
    /// Auto-dismiss timeout. `None` uses the board default;
    /// `Duration::ZERO` disables auto-dismiss.
    pub timeout: Option<Duration>,
    /// Optional logo URL shown next to the kind icon.
    pub logo: Option<String>,
    /// Whether the renderer should show a countdown progress bar.
    pub show_progress: bool,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            title: DEFAULT_PANEL_TITLE.to_string(),
            content: String::new(),
            html: None,
            timeout: None,
            logo: None,
            show_progress: true,
        }
    }
}

impl NotifyOptions {
    /// Creates options with the given kind and all other fields defaulted.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Creates a success notification with the given content.
    pub fn success(content: impl Into<String>) -> Self {
        Self::new(Kind::Success).with_content(content)
    }

    /// Creates an error notification with the given content.
    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Kind::Error).with_content(content)
    }

    /// Creates a warning notification with the given content.
    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(Kind::Warning).with_content(content)
    }

    /// Creates an info notification with the given content.
    pub fn info(content: impl Into<String>) -> Self {
        Self::new(Kind::Info).with_content(content)
    }

    /// Sets the header title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the plain-text body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets a markup body, overriding plain content at render time.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Sets the auto-dismiss timeout. `Duration::ZERO` disables it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the logo URL.
    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Sets whether the renderer should show a countdown progress bar.
    #[must_use]
    pub fn with_show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Resolves the body, letting markup override plain content.
    #[must_use]
    pub fn resolved_content(&self) -> Content {
        match &self.html {
            Some(html) => Content::Markup(html.clone()),
            None => Content::Text(self.content.clone()),
        }
    }
}
