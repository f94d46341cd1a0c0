//! Runtime configuration of the `example-function` binary.

use crate::Error;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "EXFN_LOG";

/// Filter applied when [`LOG_ENV`] is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Defines the runtime configuration. It is built once and passed explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Log filter directives, in `tracing_subscriber::EnvFilter` syntax.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through the given variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(filter) = lookup(LOG_ENV) {
            let filter = filter.trim();
            if filter.is_empty() {
                return Err(Error::Config(format!("{LOG_ENV} is set but empty")));
            }

            config.log_filter = filter.into();
        }

        Ok(config)
    }
}
