//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Pick the log level from config unless `RUST_LOG` overrides it
//! - Pick the line format (full, compact, pretty)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};

/// Build the env filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("switch_admin_ui={}", config.log_level)))
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine readable. Calling twice is a no-op.
pub fn init_logging(config: &ObservabilityConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));
    let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let result = match config.log_format {
        LogFormat::Full => registry.with(fmt).try_init(),
        LogFormat::Compact => registry.with(fmt.compact()).try_init(),
        LogFormat::Pretty => registry.with(fmt.pretty()).try_init(),
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}
