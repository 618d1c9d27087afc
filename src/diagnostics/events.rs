// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for engine activity tracking.
//!
//! The engine never surfaces absorbed failures (unsupported bridge,
//! denied permission, dropped notes) to callers; it records them here
//! instead so hosts can export a report when something looks off.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Categories of warnings the engine can emit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The platform has no OS notification facility.
    SystemUnsupported,
    /// Notification permission is denied; display was skipped.
    PermissionDenied,
    /// The permission prompt was closed without a decision.
    PermissionDismissed,
    /// Uncategorized warning.
    Other,
}

/// Categories of errors the engine can emit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Configuration could not be loaded or saved.
    Config,
    /// Uncategorized error.
    Other,
}

/// A warning event with its category and human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error event with its category and human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// Payload of a recorded diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A diagnostic event stamped with the monotonic time it was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event was recorded (monotonic, for offset computation).
    pub recorded_at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            recorded_at: Instant::now(),
            kind,
        }
    }

    /// Returns whether this event is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Warning { .. })
    }

    /// Returns whether this event is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticEventKind::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_event_serializes_with_snake_case_tag() {
        let warning = WarningEvent::new(WarningType::SystemUnsupported, "no facility");
        let json = serde_json::to_string(&warning).expect("serialization should succeed");
        assert!(json.contains("system_unsupported"));

        let back: WarningEvent =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, warning);
    }

    #[test]
    fn event_kind_round_trips() {
        let kind = DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::Config, "bad toml"),
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        let back: DiagnosticEventKind =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, kind);
    }

    #[test]
    fn classification_helpers_match_kind() {
        let warning = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::Other, "w"),
        });
        let error = DiagnosticEvent::new(DiagnosticEventKind::Error {
            event: ErrorEvent::new(ErrorType::Other, "e"),
        });

        assert!(warning.is_warning() && !warning.is_error());
        assert!(error.is_error() && !error.is_warning());
    }
}
