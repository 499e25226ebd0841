//! Logger initialization.
//!
//! The contract operations themselves never log; activation failures
//! surface to the caller, not to the log. This module only wires the `log`
//! facade to an `env_logger` backend for hosts, demos, and backend
//! implementations that do want output.

use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "tiamat_drawable=trace,warn"). When unset, `RUST_LOG` is honored and
/// the fallback level is `warn`, keeping the library quiet by default.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; calls after the first are ignored. Intended usage is early
/// in the host's `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.write_style(config.style);
        builder.init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        // The second call must be a no-op rather than a double-init panic.
        init_logging(LoggingConfig {
            filter: Some("tiamat_drawable=trace".into()),
            ..LoggingConfig::default()
        });
    }
}
