//! `stockledger-core`: foundation building blocks for the stock ledger.
//!
//! Pure types only (no IO).

pub mod error;
pub mod quantity;
pub mod severity;
pub mod value_object;

pub use error::{LedgerError, LedgerResult};
pub use quantity::Quantity;
pub use severity::Severity;
pub use value_object::ValueObject;
