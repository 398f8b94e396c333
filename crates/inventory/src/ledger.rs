use std::io::Write;

use chrono::Local;

use stockledger_core::{LedgerError, LedgerResult, Quantity};
use stockledger_events::TransactionLog;

use crate::event::{LedgerEvent, Operation};
use crate::report::ItemsReport;
use crate::stock::StockMap;
use crate::store::StockStore;

/// Threshold used by [`Ledger::low_items`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Inventory ledger: owns the stock map, the transaction log and the store
/// the stock is persisted to.
///
/// Every mutation and every load/save appends to the transaction log, whether
/// it succeeds or not. Failures are also returned to the caller as
/// [`LedgerError`]; ignoring the result still leaves the audit trail intact.
#[derive(Debug)]
pub struct Ledger<S> {
    stock: StockMap,
    log: TransactionLog,
    store: S,
}

impl<S: StockStore> Ledger<S> {
    /// Empty ledger; nothing is read from `store` until [`Ledger::load_data`].
    pub fn new(store: S) -> Self {
        Self {
            stock: StockMap::new(),
            log: TransactionLog::new(),
            store,
        }
    }

    /// Construct and immediately load from `store`.
    ///
    /// The outcome of the load is only visible in the transaction log; a
    /// missing or unreadable file leaves the ledger empty.
    pub fn open(store: S) -> Self {
        let mut ledger = Self::new(store);
        if let Err(e) = ledger.load_data() {
            tracing::debug!(error = %e, "starting with empty stock");
        }
        ledger
    }

    /// Add `qty` units of `item`, creating the entry if needed.
    ///
    /// Negative quantities are rejected. An empty item name is a silent no-op.
    pub fn add_item(&mut self, item: &str, qty: i64) -> LedgerResult<()> {
        let qty = Quantity::try_from(qty).map_err(|e| self.reject(Operation::AddItem, e))?;

        if item.is_empty() {
            return Ok(());
        }

        let updated = self
            .stock
            .get(item)
            .checked_add(qty)
            .map_err(|e| self.reject(Operation::AddItem, e))?;

        // Adding zero of an unknown item records the call but creates no entry.
        self.stock.set(item, updated);
        self.log.record(&LedgerEvent::ItemAdded {
            item: item.to_string(),
            qty,
            occurred_at: Local::now(),
        });
        Ok(())
    }

    /// Remove `qty` units of `item`. The entry is deleted when it reaches zero.
    pub fn remove_item(&mut self, item: &str, qty: i64) -> LedgerResult<()> {
        let qty = Quantity::try_from(qty).map_err(|e| self.reject(Operation::RemoveItem, e))?;

        let current = self.stock.get(item);
        let Some(remaining) = current.checked_sub(qty) else {
            let err = LedgerError::insufficient_stock(item, qty.get(), current.get());
            return Err(self.reject(Operation::RemoveItem, err));
        };

        // Only reachable with qty == 0: the shortfall check passes, but there
        // is no entry to take the units from.
        if !self.stock.contains(item) {
            return Err(self.reject(Operation::RemoveItem, LedgerError::item_not_found(item)));
        }

        self.stock.set(item, remaining);
        let event = if remaining.is_zero() {
            LedgerEvent::ItemDepleted {
                item: item.to_string(),
                occurred_at: Local::now(),
            }
        } else {
            LedgerEvent::ItemRemoved {
                item: item.to_string(),
                qty,
                occurred_at: Local::now(),
            }
        };
        self.log.record(&event);
        Ok(())
    }

    /// Quantity on hand, zero for unknown items.
    pub fn get_qty(&self, item: &str) -> u64 {
        self.stock.get(item).get()
    }

    /// Names of items with strictly fewer than `threshold` units, in stock order.
    pub fn check_low_items(&self, threshold: u64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| qty.get() < threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    /// [`Ledger::check_low_items`] with [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn low_items(&self) -> Vec<String> {
        self.check_low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Replace the stock with what the store holds.
    ///
    /// On failure the current stock is kept. An empty backing file loads
    /// nothing and records nothing.
    pub fn load_data(&mut self) -> LedgerResult<()> {
        match self.store.load() {
            Ok(Some(stock)) => {
                let items = stock.len();
                self.stock = stock;
                self.log.record(&LedgerEvent::DataLoaded {
                    items,
                    occurred_at: Local::now(),
                });
                Ok(())
            }
            Ok(None) => {
                tracing::debug!("data file is empty; nothing loaded");
                Ok(())
            }
            Err(e) => Err(self.reject(Operation::LoadData, e)),
        }
    }

    /// Overwrite the store with the current stock.
    pub fn save_data(&mut self) -> LedgerResult<()> {
        match self.store.save(&self.stock) {
            Ok(()) => {
                self.log.record(&LedgerEvent::DataSaved {
                    items: self.stock.len(),
                    occurred_at: Local::now(),
                });
                Ok(())
            }
            Err(e) => Err(self.reject(Operation::SaveData, e)),
        }
    }

    /// Print the items report to standard output.
    pub fn print_data(&self) {
        print!("{}", self.report());
    }

    pub fn report(&self) -> ItemsReport<'_> {
        ItemsReport::new(&self.stock)
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self.report())
    }

    pub fn stock(&self) -> &StockMap {
        &self.stock
    }

    pub fn transaction_log(&self) -> &TransactionLog {
        &self.log
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn reject(&mut self, operation: Operation, error: LedgerError) -> LedgerError {
        self.log.record(&LedgerEvent::rejected(operation, error.clone()));
        error
    }
}
