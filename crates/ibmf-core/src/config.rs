use crate::logging::DEFAULT_FILTER;

/// Process-wide configuration for tools built on the IBMF crates.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is absent.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are disabled
    Off,
    /// Profiling scopes are recorded and served to 'puffin_viewer' over HTTP
    WithWebserver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_log_filter("ibmf_text=trace")
            .with_profiling(ProfilingMode::WithWebserver);
        assert_eq!(config.log_filter, "ibmf_text=trace");
        assert_eq!(config.profiling, ProfilingMode::WithWebserver);
    }
}
