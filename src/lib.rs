// file: src/lib.rs
// version: 1.0.0
// guid: d50c3a87-29e1-4b6f-90d4-7a8f2c1e6b35

//! # Nextcloud POTD Config
//!
//! Command-line configuration tool for the Plasma Nextcloud
//! picture-of-the-day wallpaper provider. Reads and writes the provider's
//! config file, validates it, and builds the shell command line that pipes
//! the rendered configuration into a save script.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;
pub mod utils;

pub use error::{ConfigToolError, Result};

/// Version information for the tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
