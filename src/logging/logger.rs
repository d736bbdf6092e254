// file: src/logging/logger.rs
// version: 1.0.0
// guid: b7e2a958-4c06-4f71-a3d9-16c8e0b5f724

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// `--quiet` and `--verbose` take precedence; otherwise the level comes
/// from `RUST_LOG`, defaulting to `info`.
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::ConfigToolError::Config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}
