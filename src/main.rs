//! Expense Tracker CLI
//!
//! Interactive command-line tool for recording expenses to a CSV ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --file ~/finances/expenses.csv
//! cargo run -- --log-level debug
//! ```
//!
//! The ledger (`expenses.csv` in the working directory by default) is created
//! with a header row on first run. Diagnostics go to stderr; the menu uses
//! stdout.
//!
//! # Exit Codes
//!
//! - 0: Normal exit
//! - 1: The ledger file could not be created

use expense_tracker::cli::{self, Menu};
use expense_tracker::ExpenseTracker;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_level.directive()))
        .with_writer(io::stderr)
        .init();

    // Without a ledger there is nothing to do
    let tracker = match ExpenseTracker::open(args.ledger_path) {
        Ok(tracker) => tracker,
        Err(e) => {
            tracing::error!(error = %e, "could not initialize ledger");
            println!("{}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&tracker, stdin.lock(), stdout.lock());
    if let Err(e) = menu.run() {
        tracing::error!(error = %e, "terminal I/O failed");
    }
}
