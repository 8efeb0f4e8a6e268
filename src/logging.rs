//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with the result lists on
//! stdout. The filter comes from `GIFGRID_LOG` and defaults to `warn`, which
//! is the level request failures are reported at.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "GIFGRID_LOG";

/// Filter used when `GIFGRID_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `GIFGRID_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Only the first call takes effect; later calls are ignored.
pub fn init_logging() {
    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    // Err means a global subscriber is already installed.
    subscriber.try_init().ok();
}
