// SPDX-License-Identifier: MPL-2.0
//! JSON report generation from collected diagnostic events.
//!
//! Monotonic timestamps are converted to millisecond offsets from the
//! start of collection so reports carry no absolute event times.

use serde::Serialize;

use super::{DiagnosticEventKind, DiagnosticsCollector};

/// Metadata describing the report as a whole.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Version of the engine that produced the report.
    pub app_version: String,
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    /// When collection started (RFC 3339).
    pub collection_started_at: String,
    /// Total number of events in the report.
    pub event_count: usize,
    /// Number of warning events.
    pub warning_count: usize,
    /// Number of error events.
    pub error_count: usize,
}

/// A single event as it appears in the exported report.
#[derive(Debug, Clone, Serialize)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// A complete exportable diagnostics report.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    /// Builds a report from everything currently stored in the collector.
    #[must_use]
    pub fn from_collector(collector: &DiagnosticsCollector) -> Self {
        let started_at = collector.collection_started_at();
        let events: Vec<SerializableEvent> = collector
            .iter()
            .map(|event| SerializableEvent {
                offset_ms: event
                    .recorded_at
                    .saturating_duration_since(started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        let warning_count = collector.iter().filter(|e| e.is_warning()).count();
        let error_count = collector.iter().filter(|e| e.is_error()).count();

        Self {
            metadata: ReportMetadata {
                app_version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: chrono::Utc::now().to_rfc3339(),
                collection_started_at: collector.collection_started_at_utc().to_rfc3339(),
                event_count: events.len(),
                warning_count,
                error_count,
            },
            events,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
