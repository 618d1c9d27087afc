// SPDX-License-Identifier: MPL-2.0
//! `noticeboard` is a notification lifecycle and scheduling engine.
//!
//! It drives four presentation surfaces (in-page notification panels,
//! transient stacked toasts, blocking alert modals, and native OS
//! popups) behind pluggable rendering and OS-bridge traits, plus a
//! worker-backed deferred-execution helper. The engine owns all timing
//! semantics: queuing before the host is ready, pause-on-hover with
//! exact remaining-time accounting, toast stacking, idempotent
//! dismissal. What things look like is the host's business.

#![doc(html_root_url = "https://docs.rs/noticeboard/0.1.0")]

pub mod board;
pub mod config;
pub mod deferred;
pub mod diagnostics;
pub mod error;
pub mod notification;
pub mod render;
pub mod system;
pub mod test_utils;
pub mod timer;

pub use board::{Board, BoardSettings, Event, NotifyHandle, SystemHandle};
pub use notification::{Kind, NotifyOptions};
pub use system::SystemNote;
