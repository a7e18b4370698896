use clap::Parser;
use std::path::PathBuf;

/// Ledger file used when `--file` is not given
pub const DEFAULT_LEDGER_PATH: &str = "expenses.csv";

/// Record expenses to a CSV ledger, list them and view the total
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(about = "Record expenses to a CSV ledger, list them and view the total", long_about = None)]
pub struct CliArgs {
    /// Ledger CSV file, created with a header row if it does not exist
    #[arg(
        long = "file",
        value_name = "PATH",
        default_value = DEFAULT_LEDGER_PATH,
        help = "Path to the ledger CSV file"
    )]
    pub ledger_path: PathBuf,

    /// Log level for diagnostics written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: error, warn, info, debug or trace"
    )]
    pub log_level: LogLevel,
}

/// Log verbosity accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive scoping the level to this crate
    pub fn directive(self) -> String {
        let level = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        format!("expense_tracker={}", level)
    }
}
