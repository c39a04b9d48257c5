// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber initialization.
//!
//! Logs go to stderr. `RUST_LOG` takes precedence over the `--log` flag, which
//! in turn overrides [`DEFAULT_FILTER`].

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `--log` is given.
pub const DEFAULT_FILTER: &str = "photofolio=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Builds the filter without installing anything.
pub fn build_filter(cli_filter: Option<&str>) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = cli_filter.unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directives).map_err(|err| LoggingError::InvalidFilter {
        filter: directives.to_string(),
        reason: err.to_string(),
    })
}

/// Installs the global fmt subscriber.
pub fn init(cli_filter: Option<&str>) -> Result<(), LoggingError> {
    let env_filter = build_filter(cli_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
