use stockledger_core::Severity;

use crate::entry::LogEntry;
use crate::event::Event;

/// Append-only, in-memory record of every ledger operation and its outcome.
///
/// There is no API to remove or rewrite entries; the log lives as long as the
/// ledger that owns it.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Vec<LogEntry>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event; the new entry is then [`TransactionLog::last`].
    pub fn record<E: Event>(&mut self, event: &E) {
        let entry = LogEntry::from_event(event);
        match entry.severity {
            Severity::Info => tracing::info!(event_type = %entry.event_type, "{}", entry.message),
            Severity::Warning => tracing::warn!(event_type = %entry.event_type, "{}", entry.message),
            Severity::Error => tracing::error!(event_type = %entry.event_type, "{}", entry.message),
        }
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|e| e.severity == severity).count()
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a LogEntry;
    type IntoIter = core::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
