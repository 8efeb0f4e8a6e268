//! Command-line argument parsing for gifgrid.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the browser (default)
    Browse {
        /// API key given on the command line, overriding the environment
        api_key: Option<String>,
    },
    /// Arguments could not be understood
    Usage(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use gifgrid::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["gifgrid".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_key = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-key" => match args.next() {
                Some(value) if !value.starts_with('-') => api_key = Some(value),
                _ => return CliCommand::Usage("--api-key requires a value".to_string()),
            },
            other => {
                if let Some(value) = other.strip_prefix("--api-key=") {
                    api_key = Some(value.to_string());
                } else {
                    return CliCommand::Usage(format!("unknown argument '{}'", other));
                }
            }
        }
    }

    CliCommand::Browse { api_key }
}
