//! Ledger configuration.
//!
//! Defaults match a plain `inventory.json` in the working directory; the
//! environment can override each field.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use stockledger_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Overrides `data_file`.
pub const DATA_FILE_ENV: &str = "STOCKLEDGER_FILE";

/// Overrides `low_stock_threshold`.
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKLEDGER_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub data_file: PathBuf,
    pub low_stock_threshold: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl LedgerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank keys keep defaults;
    /// an unparsable threshold is ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV).filter(|v| !v.trim().is_empty()) {
            match raw.trim().parse::<u64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "{} is not a non-negative integer; using {}",
                    LOW_STOCK_THRESHOLD_ENV,
                    config.low_stock_threshold
                ),
            }
        }

        config
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: u64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}
