use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install the global fmt subscriber with the default filter.
pub fn init() {
    init_with_config(&Config::default());
}

/// Install the global fmt subscriber using the filter from `config`.
///
/// `RUST_LOG` wins over the configured filter. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init_with_config(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("Global subscriber already installed");
    }
}
