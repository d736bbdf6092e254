// file: src/config/mod.rs
// version: 1.0.0
// guid: a4d91e70-2b3c-4c8f-9e56-1f0a7b82d634

//! Provider configuration module
//!
//! Models the `[Nextcloud]` group of `nextcloudprovider.conf`, the file the
//! picture-of-the-day wallpaper provider reads at startup.

pub mod loader;
pub mod validator;

pub use loader::ConfigLoader;

use crate::error::ConfigToolError;
use serde::{Deserialize, Serialize};

/// Entry keys of the `[Nextcloud]` config group, as the provider spells them
pub const ENTRY_KEYS: &[&str] = &[
    "Url",
    "Path",
    "Username",
    "Password",
    "UseLocalPath",
    "LocalPath",
    "MaxImages",
];

/// Configuration for the Nextcloud wallpaper provider
///
/// The derived defaults (empty strings, false, 0) match the provider's
/// readEntry fallbacks for a missing config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Nextcloud server base URL
    #[serde(rename = "Url", default)]
    pub url: String,
    /// WebDAV path of the image folder on the server
    #[serde(rename = "Path", default)]
    pub path: String,
    /// Account username
    #[serde(rename = "Username", default)]
    pub username: String,
    /// Account password or app password
    #[serde(rename = "Password", default)]
    pub password: String,
    /// Pick images from a local directory instead of the server
    #[serde(rename = "UseLocalPath", default)]
    pub use_local_path: bool,
    /// Local image directory (only used when `use_local_path` is set)
    #[serde(rename = "LocalPath", default)]
    pub local_path: String,
    /// Maximum number of images to rotate through, 0 for unlimited
    #[serde(rename = "MaxImages", default)]
    pub max_images: u32,
}

impl ProviderConfig {
    /// Read one entry as its config-file string representation
    pub fn entry(&self, key: &str) -> Option<String> {
        match key {
            "Url" => Some(self.url.clone()),
            "Path" => Some(self.path.clone()),
            "Username" => Some(self.username.clone()),
            "Password" => Some(self.password.clone()),
            "UseLocalPath" => Some(self.use_local_path.to_string()),
            "LocalPath" => Some(self.local_path.clone()),
            "MaxImages" => Some(self.max_images.to_string()),
            _ => None,
        }
    }

    /// Update one entry from its config-file string representation
    pub fn set_entry(&mut self, key: &str, value: &str) -> crate::Result<()> {
        match key {
            "Url" => self.url = value.to_string(),
            "Path" => self.path = value.to_string(),
            "Username" => self.username = value.to_string(),
            "Password" => self.password = value.to_string(),
            "UseLocalPath" => {
                self.use_local_path = parse_bool(value).ok_or_else(|| {
                    ConfigToolError::validation(format!(
                        "UseLocalPath must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            "LocalPath" => self.local_path = value.to_string(),
            "MaxImages" => {
                self.max_images = value.parse().map_err(|_| {
                    ConfigToolError::validation(format!(
                        "MaxImages must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
            }
            _ => {
                return Err(ConfigToolError::validation(format!(
                    "Unknown config entry '{}', valid entries: {}",
                    key,
                    ENTRY_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Parse a boolean the way KConfig reads entries
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
