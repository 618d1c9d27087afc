// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting engine activity reports.
//!
//! The engine absorbs redundant and racy calls by design (double
//! dismiss, denied permission, unsupported bridge), so this module is
//! the only place those paths leave a trace. Events flow from cloneable
//! [`DiagnosticsHandle`]s through a bounded channel into a
//! memory-bounded circular buffer, and can be exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Warning/error events with monotonic timestamps
//! - [`DiagnosticsCollector`]: Owns the buffer, drains the channel
//! - [`DiagnosticReport`]: Pretty-JSON export with summary metadata

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent, WarningType,
};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
