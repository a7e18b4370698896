// CLI module
// Command-line arguments and the interactive menu

mod args;
mod menu;

pub use args::{CliArgs, LogLevel, DEFAULT_LEDGER_PATH};
pub use menu::{LineSource, Menu, MenuAction};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
