// CLI module
// Command-line interface, argument parsing and the interactive filter prompt

mod args;
pub mod prompt;

pub use args::{CliArgs, LogFormatArg};
pub use prompt::InteractivePrompt;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments or --help flag), clap displays
/// an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
