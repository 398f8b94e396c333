//! Events recorded by the ledger into its transaction log.

use chrono::{DateTime, Local};

use stockledger_core::{LedgerError, Quantity, Severity};
use stockledger_events::Event;

/// Ledger operation an event originated from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    AddItem,
    RemoveItem,
    LoadData,
    SaveData,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AddItem => "add_item",
            Operation::RemoveItem => "remove_item",
            Operation::LoadData => "load_data",
            Operation::SaveData => "save_data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    ItemAdded {
        item: String,
        qty: Quantity,
        occurred_at: DateTime<Local>,
    },
    ItemRemoved {
        item: String,
        qty: Quantity,
        occurred_at: DateTime<Local>,
    },
    /// A removal brought the item to zero and its entry was deleted.
    ItemDepleted {
        item: String,
        occurred_at: DateTime<Local>,
    },
    DataLoaded {
        items: usize,
        occurred_at: DateTime<Local>,
    },
    DataSaved {
        items: usize,
        occurred_at: DateTime<Local>,
    },
    Rejected {
        operation: Operation,
        error: LedgerError,
        occurred_at: DateTime<Local>,
    },
}

impl LedgerEvent {
    pub fn rejected(operation: Operation, error: LedgerError) -> Self {
        LedgerEvent::Rejected {
            operation,
            error,
            occurred_at: Local::now(),
        }
    }
}

impl Event for LedgerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::ItemAdded { .. } => "inventory.item.added",
            LedgerEvent::ItemRemoved { .. } => "inventory.item.removed",
            LedgerEvent::ItemDepleted { .. } => "inventory.item.depleted",
            LedgerEvent::DataLoaded { .. } => "inventory.data.loaded",
            LedgerEvent::DataSaved { .. } => "inventory.data.saved",
            LedgerEvent::Rejected { .. } => "inventory.operation.rejected",
        }
    }

    fn severity(&self) -> Severity {
        match self {
            LedgerEvent::Rejected { error, .. } => error.severity(),
            _ => Severity::Info,
        }
    }

    fn describe(&self) -> String {
        match self {
            LedgerEvent::ItemAdded { item, qty, .. } => format!("Added {qty} of {item}"),
            LedgerEvent::ItemRemoved { item, qty, .. } => format!("Removed {qty} of {item}"),
            LedgerEvent::ItemDepleted { item, .. } => {
                format!("Item {item} stock reached zero and was removed.")
            }
            LedgerEvent::DataLoaded { .. } => "Data loaded successfully.".to_string(),
            LedgerEvent::DataSaved { .. } => "Data saved successfully.".to_string(),
            LedgerEvent::Rejected { operation, error, .. } => describe_rejection(*operation, error),
        }
    }

    fn occurred_at(&self) -> DateTime<Local> {
        match self {
            LedgerEvent::ItemAdded { occurred_at, .. }
            | LedgerEvent::ItemRemoved { occurred_at, .. }
            | LedgerEvent::ItemDepleted { occurred_at, .. }
            | LedgerEvent::DataLoaded { occurred_at, .. }
            | LedgerEvent::DataSaved { occurred_at, .. }
            | LedgerEvent::Rejected { occurred_at, .. } => *occurred_at,
        }
    }

    fn inline_marker(&self) -> bool {
        matches!(
            self,
            LedgerEvent::Rejected {
                error: LedgerError::MalformedData(_) | LedgerError::Io(_),
                ..
            }
        )
    }
}

fn describe_rejection(operation: Operation, error: &LedgerError) -> String {
    match error {
        LedgerError::InvalidInput(detail) => format!(
            "Invalid input for {}: {detail}. Item must be text and quantity must be a non-negative integer.",
            operation.as_str()
        ),
        LedgerError::InsufficientStock {
            item,
            requested,
            available,
        } => format!(
            "Insufficient stock to remove {requested} of {item}. Current stock: {available}."
        ),
        LedgerError::ItemNotFound(item) => {
            format!("Attempted to remove non-existent item: {item}")
        }
        LedgerError::MissingFile(_) => "Data file not found.".to_string(),
        LedgerError::MalformedData(detail) => format!("decoding JSON: {detail}"),
        LedgerError::Io(detail) => match operation {
            Operation::SaveData => format!("saving data: {detail}"),
            _ => format!("accessing file: {detail}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_events_are_informational() {
        let ev = LedgerEvent::ItemAdded {
            item: "apple".to_string(),
            qty: Quantity::new(10),
            occurred_at: Local::now(),
        };
        assert_eq!(ev.severity(), Severity::Info);
        assert_eq!(ev.describe(), "Added 10 of apple");
        assert_eq!(ev.event_type(), "inventory.item.added");
    }

    #[test]
    fn depletion_is_described_as_removal_of_the_entry() {
        let ev = LedgerEvent::ItemDepleted {
            item: "grape".to_string(),
            occurred_at: Local::now(),
        };
        assert_eq!(ev.describe(), "Item grape stock reached zero and was removed.");
    }

    #[test]
    fn rejection_takes_severity_from_error() {
        let warn = LedgerEvent::rejected(
            Operation::RemoveItem,
            LedgerError::insufficient_stock("orange", 1, 0),
        );
        assert_eq!(warn.severity(), Severity::Warning);
        assert_eq!(
            warn.describe(),
            "Insufficient stock to remove 1 of orange. Current stock: 0."
        );

        let err = LedgerEvent::rejected(Operation::AddItem, LedgerError::invalid_input("qty -3"));
        assert_eq!(err.severity(), Severity::Error);
        assert!(err.describe().starts_with("Invalid input for add_item: qty -3."));
    }

    #[test]
    fn io_rejection_names_the_failing_side() {
        let save = LedgerEvent::rejected(Operation::SaveData, LedgerError::io("denied"));
        let load = LedgerEvent::rejected(Operation::LoadData, LedgerError::io("denied"));
        assert_eq!(save.describe(), "saving data: denied");
        assert_eq!(load.describe(), "accessing file: denied");
        assert!(save.inline_marker());
        assert!(load.inline_marker());
    }

    #[test]
    fn decode_failure_renders_as_error_decoding_json() {
        let ev = LedgerEvent::rejected(Operation::LoadData, LedgerError::malformed("EOF"));
        let entry = stockledger_events::LogEntry::from_event(&ev);
        assert!(entry.to_string().ends_with(": ERROR decoding JSON: EOF"));
    }

    #[test]
    fn shortfalls_keep_the_dashed_marker() {
        let ev = LedgerEvent::rejected(
            Operation::RemoveItem,
            LedgerError::insufficient_stock("orange", 1, 0),
        );
        assert!(!ev.inline_marker());
        let entry = stockledger_events::LogEntry::from_event(&ev);
        assert!(entry.to_string().contains(": WARNING - Insufficient stock"));
    }
}
