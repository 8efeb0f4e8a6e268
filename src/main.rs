use color_eyre::Result;
use gifgrid::cli::{parse_args, run_browser, run_cli_command, CliAction};
use gifgrid::config::BrowserConfig;
use gifgrid::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let api_key = match run_cli_command(parse_args(std::env::args())) {
        CliAction::Browse { api_key } => api_key,
        CliAction::UsageError(message) => {
            eprintln!("gifgrid: {}", message);
            eprintln!("Try 'gifgrid --help' for more information.");
            std::process::exit(2);
        }
    };

    init_logging();

    let mut config = BrowserConfig::from_env()?;
    if let Some(api_key) = api_key {
        config = config.with_api_key(api_key);
    }
    config.validate()?;

    run_browser(config).await
}
