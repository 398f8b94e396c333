use std::sync::RwLock;

use stockledger_core::{LedgerError, LedgerResult};
use stockledger_inventory::{StockMap, StockStore};

/// In-memory stock store.
///
/// Intended for tests/dev. Starts out "missing" until the first save, the same
/// way a fresh data file path would.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    saved: RwLock<Option<StockMap>>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(stock: StockMap) -> Self {
        Self {
            saved: RwLock::new(Some(stock)),
        }
    }

    /// Last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<StockMap> {
        self.saved.read().ok().and_then(|saved| saved.clone())
    }
}

impl StockStore for InMemoryStockStore {
    fn load(&self) -> LedgerResult<Option<StockMap>> {
        let saved = self
            .saved
            .read()
            .map_err(|_| LedgerError::io("lock poisoned"))?;
        match saved.as_ref() {
            Some(stock) => Ok(Some(stock.clone())),
            None => Err(LedgerError::missing_file("<memory>")),
        }
    }

    fn save(&self, stock: &StockMap) -> LedgerResult<()> {
        let mut saved = self
            .saved
            .write()
            .map_err(|_| LedgerError::io("lock poisoned"))?;
        *saved = Some(stock.clone());
        Ok(())
    }
}
