//! Logging setup
//!
//! Logs go to stderr so they never interleave with the board on stdout.
//! `RUST_LOG` takes precedence over the filter passed on the command line.

use tracing_subscriber::EnvFilter;

use crate::core::error::{CoreError, CoreResult};

/// Install the global fmt subscriber
pub fn init_logging(default_filter: &str) -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| CoreError::Logging {
            message: e.to_string(),
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CoreError::Logging {
            message: e.to_string(),
        })
}
