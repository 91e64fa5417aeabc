//! Structured logging configuration.
//!
//! Logs go to stderr so stdout carries only the report. The level comes
//! from `RUST_LOG` when set, otherwise from [`TracingConfig`].

use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "ENV_VALIDATOR_LOG_LEVEL";

/// Environment variable enabling JSON log output.
pub const LOG_JSON_VAR: &str = "ENV_VALIDATOR_LOG_JSON";

/// Tracing configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Initialize tracing with the given configuration.
///
/// Initialization is skipped if a global subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = if config.json {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        Registry::default().with(env_filter).with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);

        Registry::default().with(env_filter).with(fmt_layer).try_init()
    };

    if result.is_ok() {
        tracing::debug!("Tracing initialized: level={}, json={}", config.level, config.json);
    }
}

/// Get tracing configuration from environment variables.
///
/// Respects these environment variables:
/// - `ENV_VALIDATOR_LOG_LEVEL` - Log level (default: "warn")
/// - `ENV_VALIDATOR_LOG_JSON` - Enable JSON output (default: false)
#[must_use]
pub fn config_from_env() -> TracingConfig {
    config_from_vars(
        std::env::var(LOG_LEVEL_VAR).ok(),
        std::env::var(LOG_JSON_VAR).ok(),
    )
}

fn config_from_vars(level: Option<String>, json: Option<String>) -> TracingConfig {
    let defaults = TracingConfig::default();
    TracingConfig {
        level: level.unwrap_or(defaults.level),
        json: json
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(defaults.json),
    }
}
