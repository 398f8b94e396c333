//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod store;

use stockledger_inventory::Ledger;

pub use config::LedgerConfig;
pub use store::{InMemoryStockStore, JsonFileStore};

/// Open the file-backed ledger described by `config`, loading existing stock.
///
/// Load problems (missing or unreadable file) are recorded in the ledger's
/// transaction log and the ledger starts empty.
pub fn open_ledger(config: &LedgerConfig) -> Ledger<JsonFileStore> {
    tracing::info!(path = %config.data_file.display(), "opening stock ledger");
    Ledger::open(JsonFileStore::new(&config.data_file))
}
