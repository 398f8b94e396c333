//! End-to-end: a ledger backed by a real JSON file.

use std::fs;

use stockledger_core::{LedgerError, Severity};
use stockledger_infra::{JsonFileStore, LedgerConfig, open_ledger};
use stockledger_inventory::Ledger;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> LedgerConfig {
    LedgerConfig::default().with_data_file(dir.path().join("inventory.json"))
}

#[test]
fn save_and_reopen_yields_identical_stock() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mut ledger = open_ledger(&config);
    ledger.add_item("apple", 10).unwrap();
    ledger.add_item("banana", 15).unwrap();
    ledger.add_item("grape", 5).unwrap();
    ledger.remove_item("apple", 3).unwrap();
    ledger.save_data().unwrap();

    let reopened = open_ledger(&config);
    assert_eq!(reopened.stock(), ledger.stock());
    assert_eq!(
        reopened.transaction_log().last().unwrap().message,
        "Data loaded successfully."
    );
}

#[test]
fn fresh_path_starts_empty_with_a_warning() {
    let dir = TempDir::new().unwrap();
    let ledger = open_ledger(&config_in(&dir));

    assert!(ledger.stock().is_empty());
    assert_eq!(ledger.transaction_log().count(Severity::Warning), 1);
    assert!(!dir.path().join("inventory.json").exists());
}

#[test]
fn nothing_is_written_without_an_explicit_save() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mut ledger = open_ledger(&config);
    ledger.add_item("apple", 1).unwrap();
    drop(ledger);

    assert!(!config.data_file.exists());
}

#[test]
fn corrupt_file_keeps_current_stock_and_logs_error() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.data_file, "not json").unwrap();

    let mut ledger = Ledger::new(JsonFileStore::new(&config.data_file));
    ledger.add_item("pear", 2).unwrap();

    let err = ledger.load_data().unwrap_err();
    assert!(matches!(err, LedgerError::MalformedData(_)));
    assert_eq!(ledger.get_qty("pear"), 2);

    let entry = ledger.transaction_log().last().unwrap();
    assert!(entry.is_error());
    assert!(entry.to_string().contains(": ERROR decoding JSON: "));
}

#[test]
fn saved_file_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mut ledger = open_ledger(&config);
    ledger.add_item("apple", 7).unwrap();
    ledger.save_data().unwrap();

    assert_eq!(
        fs::read_to_string(&config.data_file).unwrap(),
        "{\n    \"apple\": 7\n}"
    );
}

#[test]
fn depleted_items_are_not_persisted() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mut ledger = open_ledger(&config);
    ledger.add_item("apple", 2).unwrap();
    ledger.add_item("fig", 1).unwrap();
    ledger.remove_item("fig", 1).unwrap();
    ledger.save_data().unwrap();

    let written = fs::read_to_string(&config.data_file).unwrap();
    assert!(!written.contains("fig"));
    assert_eq!(open_ledger(&config).get_qty("fig"), 0);
}
