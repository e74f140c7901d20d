//! Logging setup.
//!
//! Logs go to stderr so that the report on stdout stays machine readable.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

fn filter_from_config(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if config.verbose { "debug" } else { "warn" })
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
