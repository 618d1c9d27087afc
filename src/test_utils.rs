// SPDX-License-Identifier: MPL-2.0
//! Shared test doubles: a recording renderer and a fake OS bridge.
//!
//! Both expose their observations through cheaply cloneable logs so
//! tests keep a handle after moving the double into a board.

use crate::notification::Kind;
use crate::render::{MountStatus, PanelSpec, Renderer, Visual};
use crate::system::{Permission, Popup, SystemBridge, SystemNote};
use std::sync::{Arc, Mutex};

/// One observed rendering operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderAction {
    HostMounted,
    PanelMounted {
        visual: u64,
        kind: Kind,
        title: String,
        content: String,
    },
    ToastMounted {
        visual: u64,
        content: String,
    },
    AlertMounted {
        visual: u64,
        message: String,
    },
    VisibilitySet {
        visual: u64,
        visible: bool,
    },
    OffsetSet {
        visual: u64,
        offset_px: u32,
    },
    Removed {
        visual: u64,
    },
}

#[derive(Debug, Default)]
struct LogInner {
    actions: Vec<RenderAction>,
    next_visual: u64,
}

/// Shared, append-only record of every rendering operation.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    inner: Arc<Mutex<LogInner>>,
}

impl RenderLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded actions, in order.
    #[must_use]
    pub fn actions(&self) -> Vec<RenderAction> {
        self.inner.lock().unwrap().actions.clone()
    }

    /// Number of visuals released so far.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.actions()
            .iter()
            .filter(|a| matches!(a, RenderAction::Removed { .. }))
            .count()
    }

    /// Number of panels mounted so far.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.actions()
            .iter()
            .filter(|a| matches!(a, RenderAction::PanelMounted { .. }))
            .count()
    }

    /// Mints a standalone recording visual, bypassing the renderer.
    /// Useful for registry-level tests.
    #[must_use]
    pub fn visual(&self) -> Box<dyn Visual> {
        Box::new(RecordingVisual {
            id: self.next_visual(),
            log: self.clone(),
        })
    }

    fn push(&self, action: RenderAction) {
        self.inner.lock().unwrap().actions.push(action);
    }

    fn next_visual(&self) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_visual += 1;
        inner.next_visual
    }
}

/// Renderer double that records every operation into a [`RenderLog`].
#[derive(Debug)]
pub struct RecordingRenderer {
    log: RenderLog,
    host_status: MountStatus,
}

impl RecordingRenderer {
    /// A renderer whose host mounts synchronously.
    #[must_use]
    pub fn ready(log: RenderLog) -> Self {
        Self {
            log,
            host_status: MountStatus::Ready,
        }
    }

    /// A renderer whose host mount waits for an environment signal.
    #[must_use]
    pub fn deferred(log: RenderLog) -> Self {
        Self {
            log,
            host_status: MountStatus::Deferred,
        }
    }
}

impl Renderer for RecordingRenderer {
    fn mount_host(&mut self) -> MountStatus {
        self.log.push(RenderAction::HostMounted);
        self.host_status
    }

    fn mount_panel(&mut self, spec: &PanelSpec) -> Box<dyn Visual> {
        let id = self.log.next_visual();
        self.log.push(RenderAction::PanelMounted {
            visual: id,
            kind: spec.kind,
            title: spec.title.clone(),
            content: spec.content.as_str().to_string(),
        });
        Box::new(RecordingVisual {
            id,
            log: self.log.clone(),
        })
    }

    fn mount_toast(&mut self, content: &str) -> Box<dyn Visual> {
        let id = self.log.next_visual();
        self.log.push(RenderAction::ToastMounted {
            visual: id,
            content: content.to_string(),
        });
        Box::new(RecordingVisual {
            id,
            log: self.log.clone(),
        })
    }

    fn mount_alert(&mut self, message: &str) -> Box<dyn Visual> {
        let id = self.log.next_visual();
        self.log.push(RenderAction::AlertMounted {
            visual: id,
            message: message.to_string(),
        });
        Box::new(RecordingVisual {
            id,
            log: self.log.clone(),
        })
    }
}

struct RecordingVisual {
    id: u64,
    log: RenderLog,
}

impl Visual for RecordingVisual {
    fn set_visible(&mut self, visible: bool) {
        self.log.push(RenderAction::VisibilitySet {
            visual: self.id,
            visible,
        });
    }

    fn set_offset(&mut self, offset_px: u32) {
        self.log.push(RenderAction::OffsetSet {
            visual: self.id,
            offset_px,
        });
    }

    fn remove(&mut self) {
        self.log.push(RenderAction::Removed { visual: self.id });
    }
}

#[derive(Debug, Default)]
struct BridgeInner {
    shown: Vec<SystemNote>,
    permission_requests: usize,
    closed: usize,
}

/// Shared record of everything a [`FakeBridge`] was asked to do.
#[derive(Debug, Clone, Default)]
pub struct BridgeLog {
    inner: Arc<Mutex<BridgeInner>>,
}

impl BridgeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes shown so far, in order.
    #[must_use]
    pub fn shown(&self) -> Vec<SystemNote> {
        self.inner.lock().unwrap().shown.clone()
    }

    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.inner.lock().unwrap().shown.len()
    }

    /// Number of permission prompts issued.
    #[must_use]
    pub fn permission_requests(&self) -> usize {
        self.inner.lock().unwrap().permission_requests
    }

    /// Number of popups closed.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.inner.lock().unwrap().closed
    }
}

/// OS bridge double with scripted support and permission state.
#[derive(Debug)]
pub struct FakeBridge {
    supported: bool,
    permission: Permission,
    log: BridgeLog,
}

impl FakeBridge {
    #[must_use]
    pub fn granted(log: BridgeLog) -> Self {
        Self {
            supported: true,
            permission: Permission::Granted,
            log,
        }
    }

    #[must_use]
    pub fn undetermined(log: BridgeLog) -> Self {
        Self {
            supported: true,
            permission: Permission::Undetermined,
            log,
        }
    }

    #[must_use]
    pub fn denied(log: BridgeLog) -> Self {
        Self {
            supported: true,
            permission: Permission::Denied,
            log,
        }
    }

    #[must_use]
    pub fn unsupported(log: BridgeLog) -> Self {
        Self {
            supported: false,
            permission: Permission::Undetermined,
            log,
        }
    }
}

impl SystemBridge for FakeBridge {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) {
        self.log.inner.lock().unwrap().permission_requests += 1;
    }

    fn show(&mut self, note: &SystemNote) -> Box<dyn Popup> {
        self.log.inner.lock().unwrap().shown.push(note.clone());
        Box::new(FakePopup {
            log: self.log.clone(),
        })
    }
}

struct FakePopup {
    log: BridgeLog,
}

impl Popup for FakePopup {
    fn close(&mut self) {
        self.log.inner.lock().unwrap().closed += 1;
    }
}
