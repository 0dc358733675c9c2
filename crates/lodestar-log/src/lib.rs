//! Structured logging setup for the Lodestar tools.
//!
//! Console logging via the `tracing` ecosystem: timestamps, module paths,
//! and severity levels, filterable through `RUST_LOG` or the config file's
//! `debug.log_level` setting.

use lodestar_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

/// Initialize the global tracing subscriber.
///
/// Filter precedence: the `RUST_LOG` environment variable wins; otherwise
/// the config's `debug.log_level` is used if non-empty, falling back to
/// `info`. Call once at process start; a second call panics (the global
/// subscriber is already set).
pub fn init_logging(config: Option<&Config>) {
    let filter_str = config
        .map(|c| c.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer())
        .init();
}

/// The console fmt layer: module targets, severity levels, thread names,
/// and time since process start.
fn console_layer<S>() -> fmt::Layer<
    S,
    fmt::format::DefaultFields,
    fmt::format::Format<fmt::format::Full, fmt::time::Uptime>,
> {
    fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_names(true)
        .with_timer(fmt::time::uptime())
}

/// An `EnvFilter` with the default filter string, for tests and for
/// consistent defaults.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        let filter = default_env_filter();
        assert!(format!("{}", filter).contains("info"));
    }

    #[test]
    fn test_filter_strings_parse() {
        let valid = ["info", "debug,lodestar_select=trace", "warn", "error"];
        for filter_str in &valid {
            assert!(
                EnvFilter::try_from(*filter_str).is_ok(),
                "failed to parse filter: {filter_str}"
            );
        }
    }

    #[test]
    fn test_console_layer_stacks_onto_registry() {
        // Builds (without installing) the exact subscriber init_logging
        // assembles: env filter plus the thread-name-aware console layer.
        let _subscriber = tracing_subscriber::registry()
            .with(default_env_filter())
            .with(console_layer());
    }

    #[test]
    fn test_config_level_feeds_filter() {
        let mut config = Config::default();
        config.debug.log_level = "trace".to_string();
        // The same selection logic init_logging uses.
        let level = Some(&config)
            .map(|c| c.debug.log_level.as_str())
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_FILTER);
        assert_eq!(level, "trace");
    }
}
