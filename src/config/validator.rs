// file: src/config/validator.rs
// version: 1.0.0
// guid: e1f7a3c9-8d26-4b54-a970-6c3e5f8b2d41

//! Semantic validation of the provider configuration
//!
//! The rules mirror what the wallpaper provider itself requires before it
//! can fetch images: either a usable local directory, or a complete set of
//! Nextcloud credentials with a well-formed server URL.

use super::ProviderConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Validate the complete configuration
pub fn validate_config(config: &ProviderConfig) -> Result<()> {
    info!("Validating provider configuration");

    if config.use_local_path {
        validate_local_path(&config.local_path)?;
    } else {
        validate_server_url(&config.url)?;
        validate_required_entry("WebDAV path", &config.path)?;
        validate_required_entry("Username", &config.username)?;
        validate_required_entry("Password", &config.password)?;
    }

    info!("Configuration is valid");
    Ok(())
}

/// Validate the local image directory for local-path mode
fn validate_local_path(local_path: &str) -> Result<()> {
    debug!("Validating local path: {}", local_path);

    if local_path.is_empty() {
        bail!("Local path is required when using local path mode");
    }
    if !Path::new(local_path).is_dir() {
        bail!("Local path does not exist: {}", local_path);
    }
    Ok(())
}

/// Validate the Nextcloud server URL
fn validate_server_url(url: &str) -> Result<()> {
    debug!("Validating server URL: {}", url);

    if url.is_empty() {
        bail!("Nextcloud URL is required");
    }
    let parsed = Url::parse(url).with_context(|| format!("Invalid Nextcloud URL: {}", url))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => bail!("Nextcloud URL must use http or https, got {}://", scheme),
    }
}

/// Require a non-empty entry for remote mode
fn validate_required_entry(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        bail!("{} is required", name);
    }
    Ok(())
}
