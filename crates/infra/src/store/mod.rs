//! Storage adapters for the `StockStore` port.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryStockStore;
pub use json_file::JsonFileStore;
