// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Panel**: auto-dismiss timeout for in-page notification panels
//! - **Toast**: display duration and stack spacing for transient messages
//! - **Exit**: grace period between hiding a visual and releasing it
//! - **Scheduling**: polling cadence of the delay worker and host tick

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Default auto-dismiss timeout for notification panels (in milliseconds).
/// A timeout of zero disables auto-dismiss entirely.
pub const DEFAULT_PANEL_TIMEOUT_MS: u64 = 5000;

/// Minimum configurable panel timeout (in milliseconds).
pub const MIN_PANEL_TIMEOUT_MS: u64 = 500;

/// Maximum configurable panel timeout (in milliseconds).
pub const MAX_PANEL_TIMEOUT_MS: u64 = 600_000;

/// Default title used when a notification does not provide one.
pub const DEFAULT_PANEL_TITLE: &str = "Notification";

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Display duration for toast messages (in milliseconds).
/// Toasts are not user-configurable per call; this is the stack-wide value.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum configurable toast duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum configurable toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Vertical spacing between stacked toasts (in pixels).
pub const DEFAULT_STACK_SPACING_PX: u32 = 60;

/// Minimum configurable stack spacing (in pixels).
pub const MIN_STACK_SPACING_PX: u32 = 10;

/// Maximum configurable stack spacing (in pixels).
pub const MAX_STACK_SPACING_PX: u32 = 400;

// ==========================================================================
// Exit Grace Defaults
// ==========================================================================

/// Time between hiding a dismissed visual and removing it (in milliseconds).
/// Gives the rendering collaborator room for an exit transition.
pub const DEFAULT_EXIT_GRACE_MS: u64 = 300;

/// Minimum configurable exit grace (in milliseconds).
pub const MIN_EXIT_GRACE_MS: u64 = 0;

/// Maximum configurable exit grace (in milliseconds).
pub const MAX_EXIT_GRACE_MS: u64 = 5000;

// ==========================================================================
// Scheduling Defaults
// ==========================================================================

/// Sampling interval of the deferred-delay worker (in milliseconds).
/// Completion may arrive up to one interval after the requested duration;
/// the positive skew is a deliberate precision/cost trade-off.
pub const DELAY_POLL_INTERVAL_MS: u64 = 100;

/// Recommended cadence for hosts to pump [`crate::board::Board::tick`]
/// (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Panel validation
    assert!(MIN_PANEL_TIMEOUT_MS > 0);
    assert!(MAX_PANEL_TIMEOUT_MS >= MIN_PANEL_TIMEOUT_MS);
    assert!(DEFAULT_PANEL_TIMEOUT_MS >= MIN_PANEL_TIMEOUT_MS);
    assert!(DEFAULT_PANEL_TIMEOUT_MS <= MAX_PANEL_TIMEOUT_MS);

    // Toast validation
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MAX_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(MIN_STACK_SPACING_PX > 0);
    assert!(MAX_STACK_SPACING_PX >= MIN_STACK_SPACING_PX);
    assert!(DEFAULT_STACK_SPACING_PX >= MIN_STACK_SPACING_PX);
    assert!(DEFAULT_STACK_SPACING_PX <= MAX_STACK_SPACING_PX);

    // Exit grace validation
    assert!(MAX_EXIT_GRACE_MS >= MIN_EXIT_GRACE_MS);
    assert!(DEFAULT_EXIT_GRACE_MS >= MIN_EXIT_GRACE_MS);
    assert!(DEFAULT_EXIT_GRACE_MS <= MAX_EXIT_GRACE_MS);

    // Scheduling validation
    assert!(DELAY_POLL_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS > 0);
};
