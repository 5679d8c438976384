//! Tracing setup shared by the `seed` and `shopping-drills` binaries.
//!
//! Environment variables:
//!   RUST_LOG    # Log filter (default: info)
//!
//! Logs go to stderr so `shopping-drills` keeps stdout for JSON.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from a `RUST_LOG` value, falling back to [`DEFAULT_FILTER`].
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber.
pub fn init_tracing() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}
