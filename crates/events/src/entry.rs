use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use stockledger_core::Severity;

use crate::event::Event;

/// One timestamped line of the transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub recorded_at: DateTime<Local>,
    pub severity: Severity,
    pub event_type: String,
    pub message: String,
    #[serde(default)]
    pub inline_marker: bool,
}

impl LogEntry {
    pub fn from_event<E: Event>(event: &E) -> Self {
        Self {
            recorded_at: event.occurred_at(),
            severity: event.severity(),
            event_type: event.event_type().to_string(),
            message: event.describe(),
            inline_marker: event.inline_marker(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// `<timestamp>: <message>` for informational entries,
/// `<timestamp>: <SEVERITY> - <message>` otherwise, or
/// `<timestamp>: <SEVERITY> <message>` when the marker is inline.
impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ts = self.recorded_at.format("%Y-%m-%d %H:%M:%S%.6f");
        match self.severity {
            Severity::Info => write!(f, "{ts}: {}", self.message),
            other if self.inline_marker => write!(f, "{ts}: {other} {}", self.message),
            other => write!(f, "{ts}: {other} - {}", self.message),
        }
    }
}
