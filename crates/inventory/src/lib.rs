//! Inventory domain: the stock map, the ledger that mutates it, and the
//! persistence port it is saved through.
//!
//! No storage lives here; adapters for [`StockStore`] are in `stockledger-infra`.

pub mod event;
pub mod ledger;
pub mod report;
pub mod stock;
pub mod store;

pub use event::{LedgerEvent, Operation};
pub use ledger::{DEFAULT_LOW_STOCK_THRESHOLD, Ledger};
pub use report::ItemsReport;
pub use stock::StockMap;
pub use store::StockStore;
