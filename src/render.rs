// SPDX-License-Identifier: MPL-2.0
//! Rendering collaborator contract.
//!
//! The engine never builds visuals itself; it hands specs to a
//! [`Renderer`] and drives the returned [`Visual`]s through their
//! lifecycle (show, reposition, hide, remove). Hover and press events
//! originate at the renderer's host and come back to the board as
//! [`crate::board::Event`]s.

use crate::notification::{Content, Kind};
use std::time::Duration;

/// Result of mounting the presentation host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountStatus {
    /// The host is mounted; the board may render immediately.
    Ready,
    /// Mounting is pending an environment signal; the host will call
    /// [`crate::board::Board::host_ready`] when it completes.
    Deferred,
}

/// Everything a renderer needs to build one notification panel.
#[derive(Debug, Clone)]
pub struct PanelSpec {
    pub kind: Kind,
    pub title: String,
    pub content: Content,
    /// Optional logo URL shown in the header.
    pub logo: Option<String>,
    /// Whether to render a countdown progress bar.
    pub show_progress: bool,
    /// Auto-dismiss timeout, for progress-bar animation. Zero disables.
    pub timeout: Duration,
}

/// A mounted visual element owned by the rendering collaborator.
///
/// The engine only ever toggles visibility, repositions, and removes;
/// what those operations look like is the collaborator's business.
pub trait Visual {
    /// Shows or hides the element (e.g., toggling an entry transition).
    fn set_visible(&mut self, visible: bool);

    /// Moves the element to a vertical offset from the anchor edge, in
    /// pixels. Only stacked toasts are ever repositioned.
    fn set_offset(&mut self, offset_px: u32);

    /// Releases the element. Called exactly once, after which the engine
    /// drops its handle.
    fn remove(&mut self);
}

/// Constructs and mounts visual elements on behalf of the engine.
pub trait Renderer {
    /// Mounts the presentation host (container). Called exactly once.
    fn mount_host(&mut self) -> MountStatus;

    /// Builds a notification panel.
    fn mount_panel(&mut self, spec: &PanelSpec) -> Box<dyn Visual>;

    /// Builds a transient toast with the given text.
    fn mount_toast(&mut self, content: &str) -> Box<dyn Visual>;

    /// Builds one overlay+dialog pair for a blocking alert.
    fn mount_alert(&mut self, message: &str) -> Box<dyn Visual>;
}

/// Line-printing renderer for terminal hosts and the demo binary.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    next_label: u64,
}

impl ConsoleRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn label(&mut self, prefix: &str) -> String {
        self.next_label += 1;
        format!("{}#{}", prefix, self.next_label)
    }
}

impl Renderer for ConsoleRenderer {
    fn mount_host(&mut self) -> MountStatus {
        // A terminal is always interactive; mount synchronously.
        MountStatus::Ready
    }

    fn mount_panel(&mut self, spec: &PanelSpec) -> Box<dyn Visual> {
        let label = self.label("panel");
        println!(
            "[{label}] {} | {} | {}",
            spec.kind.name(),
            spec.title,
            spec.content.as_str()
        );
        Box::new(ConsoleVisual { label })
    }

    fn mount_toast(&mut self, content: &str) -> Box<dyn Visual> {
        let label = self.label("toast");
        println!("[{label}] {content}");
        Box::new(ConsoleVisual { label })
    }

    fn mount_alert(&mut self, message: &str) -> Box<dyn Visual> {
        let label = self.label("alert");
        println!("[{label}] {message} [OK]");
        Box::new(ConsoleVisual { label })
    }
}

struct ConsoleVisual {
    label: String,
}

impl Visual for ConsoleVisual {
    fn set_visible(&mut self, visible: bool) {
        if !visible {
            println!("[{}] hidden", self.label);
        }
    }

    fn set_offset(&mut self, offset_px: u32) {
        println!("[{}] moved to +{offset_px}px", self.label);
    }

    fn remove(&mut self) {
        println!("[{}] removed", self.label);
    }
}
