use chrono::{DateTime, Local};

use stockledger_core::Severity;

/// Something that happened to the ledger and deserves a log line.
///
/// Events are facts: immutable once created and only ever appended.
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;

    /// Severity the event is recorded at.
    fn severity(&self) -> Severity;

    /// Human-readable description written to the transaction log.
    fn describe(&self) -> String;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Local>;

    /// Render the severity marker directly in front of the description
    /// (`ERROR saving data: ...`) rather than as a `ERROR - ...` prefix.
    fn inline_marker(&self) -> bool {
        false
    }
}
