//! Structured logging setup.
//!
//! The library itself only emits `tracing` events. Applications that want
//! them printed call [`init_logging`] once at startup.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Installs a global fmt subscriber
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `Ok(())`
/// without replacing anything if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json_format {
        tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))
    } else {
        tracing::subscriber::set_global_default(registry.with(fmt::layer()))
    };

    match installed {
        Ok(()) => Ok(()),
        Err(_) => {
            warn!(app = %config.app_name, "global subscriber already installed");
            Ok(())
        }
    }
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_ascii_lowercase()))
}
