// SPDX-License-Identifier: MPL-2.0
//! Console logging setup.
//!
//! `RUST_LOG` takes precedence over the level coming from the CLI or
//! `settings.toml`.

use crate::error::{Error, Result};
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Builds the filter for `level`, letting `RUST_LOG` override it.
pub fn filter(level: &str) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => {
            EnvFilter::try_new(directives).map_err(|e| Error::Logging(e.to_string()))
        }
        _ => EnvFilter::try_new(level).map_err(|e| Error::Logging(e.to_string())),
    }
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(level: &str) -> Result<()> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter(level)?);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(%level, "logging initialized");
    Ok(())
}
