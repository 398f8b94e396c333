//! Persistence port for the stock map.

use stockledger_core::LedgerResult;

use crate::stock::StockMap;

/// Where a ledger loads its stock from and saves it to.
///
/// Implementations live in the infrastructure layer; the ledger only sees this
/// boundary.
pub trait StockStore {
    /// Read the persisted stock.
    ///
    /// - `Ok(Some(stock))`: a document was read and decoded
    /// - `Ok(None)`: the backing source exists but is empty
    /// - `Err(LedgerError::MissingFile)`: nothing has been persisted yet
    fn load(&self) -> LedgerResult<Option<StockMap>>;

    /// Overwrite the persisted stock with `stock`.
    fn save(&self, stock: &StockMap) -> LedgerResult<()>;
}

impl<S: StockStore + ?Sized> StockStore for &S {
    fn load(&self) -> LedgerResult<Option<StockMap>> {
        (**self).load()
    }

    fn save(&self, stock: &StockMap) -> LedgerResult<()> {
        (**self).save(stock)
    }
}

impl<S: StockStore + ?Sized> StockStore for Box<S> {
    fn load(&self) -> LedgerResult<Option<StockMap>> {
        (**self).load()
    }

    fn save(&self, stock: &StockMap) -> LedgerResult<()> {
        (**self).save(stock)
    }
}
