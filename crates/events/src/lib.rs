//! Transaction log: events describing ledger operations, and the append-only
//! log they are recorded into.

pub mod entry;
pub mod event;
pub mod log;

pub use entry::LogEntry;
pub use event::Event;
pub use log::TransactionLog;
