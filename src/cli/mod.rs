//! CLI module for gifgrid.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - The line-oriented browser
//!
//! # Usage
//!
//! ```ignore
//! use gifgrid::cli::{parse_args, run_cli_command, CliAction};
//!
//! match run_cli_command(parse_args(std::env::args())) {
//!     CliAction::Browse { api_key } => { /* build config, run_browser */ }
//!     CliAction::UsageError(message) => { /* print, exit 2 */ }
//! }
//! ```

pub mod args;
pub mod browse;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use browse::{detail_views, format_detail, format_list, parse_input, run_browser, BrowseInput};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// What `main` should do after argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Start the browser, optionally overriding the API key
    Browse { api_key: Option<String> },
    /// Print the message and usage, exit with status 2
    UsageError(String),
}

/// Run a CLI command if applicable.
///
/// `Version` and `Help` print and exit without returning. Everything else is
/// handed back to the caller as a [`CliAction`].
pub fn run_cli_command(command: CliCommand) -> CliAction {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Browse { api_key } => CliAction::Browse { api_key },
        CliCommand::Usage(message) => CliAction::UsageError(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_passes_override_through() {
        let action = run_cli_command(CliCommand::Browse {
            api_key: Some("k".to_string()),
        });
        assert_eq!(
            action,
            CliAction::Browse {
                api_key: Some("k".to_string())
            }
        );
    }

    #[test]
    fn test_usage_becomes_usage_error() {
        let action = run_cli_command(CliCommand::Usage("bad".to_string()));
        assert_eq!(action, CliAction::UsageError("bad".to_string()));
    }
}
