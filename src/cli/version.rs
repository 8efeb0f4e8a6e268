//! Version and usage output.

/// The current version of gifgrid, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: gifgrid [--api-key <KEY>]

Browse GIFs from the terminal. Type a search and press Enter.

Commands inside the browser:
  <text>      search for <text> (an empty line clears the search)
  :open N     show details for result N
  :quit       exit

Options:
  --api-key <KEY>  provider API key (default: $TENOR_API_KEY)
  -h, --help       show this help
  -V, --version    show version

Environment:
  TENOR_API_KEY         provider API key
  GIFGRID_BASE_URL      provider base URL (default: https://g.tenor.com/v1)
  GIFGRID_TIMEOUT_SECS  per-request timeout in seconds
  GIFGRID_LOG           log filter, e.g. debug or gifgrid=trace (default: warn)";

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("gifgrid {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}", USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_lists_env_vars() {
        for var in ["TENOR_API_KEY", "GIFGRID_BASE_URL", "GIFGRID_TIMEOUT_SECS", "GIFGRID_LOG"] {
            assert!(USAGE.contains(var), "usage should mention {}", var);
        }
    }
}
