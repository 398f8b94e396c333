//! `stockledger`: drive a file-backed stock ledger from the command line.
//!
//! Every run opens the ledger (loading the data file if present), performs one
//! command, and prints the transaction log it produced. Mutating commands save
//! explicitly before exiting; queries never write.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use stockledger_infra::{JsonFileStore, LedgerConfig, open_ledger};
use stockledger_inventory::Ledger;

#[derive(Parser, Debug)]
#[command(name = "stockledger")]
#[command(version, about = "Track item quantities in a JSON file", long_about = None)]
struct Cli {
    /// Path to the JSON data file (overrides STOCKLEDGER_FILE)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Human-readable diagnostics instead of JSON
    #[arg(long, default_value_t = false)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the reference scenario and print the resulting log
    Demo,
    /// Add units of an item, then save
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove units of an item, then save
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Print the quantity held for an item
    Qty { item: String },
    /// List items below the low-stock threshold
    Low {
        #[arg(short, long)]
        threshold: Option<u64>,
    },
    /// Print the items report
    Report,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.pretty {
        stockledger_observability::init_pretty();
    } else {
        stockledger_observability::init();
    }

    let mut config = LedgerConfig::from_env();
    if let Some(file) = cli.file {
        config = config.with_data_file(file);
    }

    tracing::info!(command = ?cli.command, path = %config.data_file.display(), "running command");
    let mut ledger = open_ledger(&config);

    match cli.command {
        Command::Demo => run_demo(&mut ledger),
        // Failures are already in the log printed below.
        Command::Add { item, qty } => {
            if ledger.add_item(&item, qty).is_ok() {
                save(&mut ledger);
            }
        }
        Command::Remove { item, qty } => {
            if ledger.remove_item(&item, qty).is_ok() {
                save(&mut ledger);
            }
        }
        Command::Qty { item } => println!("{item}: {}", ledger.get_qty(&item)),
        Command::Low { threshold } => {
            let threshold = threshold.unwrap_or(config.low_stock_threshold);
            for item in ledger.check_low_items(threshold) {
                println!("{item}");
            }
        }
        Command::Report => ledger.print_data(),
    }

    print_log(&ledger).context("failed to write transaction log")?;
    Ok(())
}

/// Mirrors the walkthrough shipped with the ledger: a few additions (one of
/// them invalid), removals that hit every outcome, then a save.
fn run_demo(ledger: &mut Ledger<JsonFileStore>) {
    let _ = ledger.add_item("apple", 10);
    let _ = ledger.add_item("banana", 15);
    let _ = ledger.add_item("widget", -10);
    let _ = ledger.add_item("grape", 5);
    let _ = ledger.remove_item("apple", 3);
    let _ = ledger.remove_item("orange", 1);
    let _ = ledger.remove_item("grape", 10);

    println!("Apple stock: {}", ledger.get_qty("apple"));
    println!("Low items: {:?}", ledger.low_items());
    save(ledger);
}

fn save(ledger: &mut Ledger<JsonFileStore>) {
    if let Err(e) = ledger.save_data() {
        tracing::warn!(error = %e, path = %ledger.store().path().display(), "stock not saved");
    }
}

fn print_log(ledger: &Ledger<JsonFileStore>) -> std::io::Result<()> {
    use std::io::Write;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    writeln!(out, "--- Transaction Logs ---")?;
    for entry in ledger.transaction_log() {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_quantities_reach_the_ledger() {
        let cli = Cli::try_parse_from(["stockledger", "add", "apple", "-3"]).unwrap();
        match cli.command {
            Command::Add { item, qty } => {
                assert_eq!(item, "apple");
                assert_eq!(qty, -3);
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn file_flag_is_optional() {
        let cli = Cli::try_parse_from(["stockledger", "--file", "shop.json", "report"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("shop.json")));
        assert!(matches!(cli.command, Command::Report));
    }
}
