use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockledger_core::{LedgerError, LedgerResult};
use stockledger_inventory::{StockMap, StockStore};

/// Stock persisted as a single JSON object (`{"apple": 7, ...}`).
///
/// Saves rewrite the whole file with 4-space indentation. Loads accept any
/// layout. No locking: two stores on the same path simply overwrite each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: impl core::fmt::Display) -> LedgerError {
        LedgerError::io(format!("{}: {err}", self.path.display()))
    }
}

impl StockStore for JsonFileStore {
    fn load(&self) -> LedgerResult<Option<StockMap>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LedgerError::missing_file(&self.path));
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.is_empty() {
            return Ok(None);
        }

        let stock: StockMap =
            serde_json::from_str(&contents).map_err(|e| LedgerError::malformed(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), items = stock.len(), "stock file read");
        Ok(Some(stock))
    }

    fn save(&self, stock: &StockMap) -> LedgerResult<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        stock.serialize(&mut ser).map_err(|e| self.io_error(e))?;

        fs::write(&self.path, buf).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), items = stock.len(), "stock file written");
        Ok(())
    }
}
