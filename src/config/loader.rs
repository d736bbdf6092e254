// file: src/config/loader.rs
// version: 1.0.0
// guid: c8b5f2a1-6e94-4d07-8c3b-f47a90d1e265

//! Configuration file loading, rendering, and saving
//!
//! The provider stores its settings in KConfig INI syntax at
//! `<config dir>/plasma_engine_potd/nextcloudprovider.conf`, all entries in
//! a single `[Nextcloud]` group. KConfig may add bookkeeping entries and
//! other groups to the same file, so parsing tolerates anything it does not
//! recognize and rendering only ever emits the provider's own group.

use super::{ProviderConfig, ENTRY_KEYS};
use crate::error::ConfigToolError;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory under the user config dir, shared with the POTD engine
const CONFIG_SUBDIR: &str = "plasma_engine_potd";
/// Config file name the provider opens
const CONFIG_FILE: &str = "nextcloudprovider.conf";
/// Group holding the provider's entries
const CONFIG_GROUP: &str = "Nextcloud";

/// Loader for the provider configuration file
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the provider's default config location
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigToolError::config("Could not determine the user config directory")
        })?;
        Ok(Self {
            path: base.join(CONFIG_SUBDIR).join(CONFIG_FILE),
        })
    }

    /// Create a loader for an explicit config path, with tilde expansion
    pub fn with_path(path: &str) -> Self {
        Self {
            path: PathBuf::from(shellexpand::tilde(path).into_owned()),
        }
    }

    /// The config file path this loader reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the provider config, falling back to defaults when the file
    /// does not exist yet (same behavior as the provider's readEntry calls)
    pub fn load(&self) -> Result<ProviderConfig> {
        if !self.path.exists() {
            debug!(
                "Config file {} not found, using defaults",
                self.path.display()
            );
            return Ok(ProviderConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ConfigToolError::config(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(parse_conf(&content))
    }

    /// Save the provider config, creating parent directories as needed
    pub fn save(&self, config: &ProviderConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigToolError::config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&self.path, render_conf(config)).map_err(|e| {
            ConfigToolError::config(format!(
                "Failed to write config file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Wrote config to {}", self.path.display());
        Ok(())
    }
}

/// Parse the `[Nextcloud]` group out of KConfig INI text
pub fn parse_conf(content: &str) -> ProviderConfig {
    let mut config = ProviderConfig::default();
    let mut in_group = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(group) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_group = group == CONFIG_GROUP;
            continue;
        }
        if !in_group {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            warn!("Skipping malformed config line: {}", line);
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if !ENTRY_KEYS.contains(&key) {
            // KConfig bookkeeping entries and future keys land here.
            debug!("Ignoring unknown config entry: {}", key);
            continue;
        }
        if let Err(e) = config.set_entry(key, value) {
            warn!("Ignoring invalid config entry {}: {}", key, e);
        }
    }

    config
}

/// Render the config as KConfig INI text, entries sorted by key
///
/// This rendered text is exactly what gets piped into the save script.
pub fn render_conf(config: &ProviderConfig) -> String {
    let mut keys: Vec<&str> = ENTRY_KEYS.to_vec();
    keys.sort_unstable();

    let mut out = String::new();
    out.push('[');
    out.push_str(CONFIG_GROUP);
    out.push_str("]\n");
    for key in keys {
        // entry() covers every key in ENTRY_KEYS
        if let Some(value) = config.entry(key) {
            out.push_str(key);
            out.push('=');
            out.push_str(&value);
            out.push('\n');
        }
    }
    out
}
