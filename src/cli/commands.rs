// file: src/cli/commands.rs
// version: 1.0.0
// guid: 6e3b80c7-f415-4d92-a06e-b8c24d7f1a50

//! Command implementations for the CLI

use crate::{
    config::{loader, validator, ConfigLoader},
    error::ConfigToolError,
    shell, utils, Result,
};
use tracing::{error, info, warn};

/// Build a loader for either the explicit or the default config location
fn make_loader(config_path: Option<&str>) -> Result<ConfigLoader> {
    match config_path {
        Some(path) => Ok(ConfigLoader::with_path(path)),
        None => ConfigLoader::new(),
    }
}

/// Show the current configuration
pub async fn show_command(config_path: Option<&str>, json_output: bool) -> Result<()> {
    let loader = make_loader(config_path)?;
    let config = loader.load()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", loader::render_conf(&config));
    }
    Ok(())
}

/// Set a single config entry and write the file back
pub async fn set_command(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let loader = make_loader(config_path)?;
    let mut config = loader.load()?;

    config.set_entry(key, value)?;
    loader.save(&config)?;

    info!("Set {}={} in {}", key, value, loader.path().display());
    Ok(())
}

/// Validate the configuration
pub async fn validate_command(config_path: Option<&str>) -> Result<()> {
    let loader = make_loader(config_path)?;
    let config = loader.load()?;

    validator::validate_config(&config)
        .map_err(|e| ConfigToolError::validation(format!("{:#}", e)))?;
    Ok(())
}

/// Save the configuration through the save script
///
/// Renders the config, builds the `echo '<config>' | bash <script>` command
/// line, and either prints it (dry run) or executes it under `bash -c`.
pub async fn save_command(config_path: Option<&str>, script: &str, dry_run: bool) -> Result<()> {
    let loader = make_loader(config_path)?;
    let config = loader.load()?;

    let script_path = utils::expand_path(script);
    let config_text = loader::render_conf(&config);
    let command = shell::build_save_command(&config_text, &script_path.to_string_lossy());

    if dry_run {
        info!("DRY RUN: would execute save command");
        println!("{}", command);
        return Ok(());
    }

    if !script_path.exists() {
        warn!("Save script {} does not exist", script_path.display());
    }

    info!("Running save script {}", script_path.display());
    let status = tokio::process::Command::new("bash")
        .arg("-c")
        .arg(&command)
        .status()
        .await
        .map_err(|e| ConfigToolError::execution(format!("Failed to run save command: {}", e)))?;

    if !status.success() {
        error!("Save script exited with {}", status);
        return Err(ConfigToolError::execution(format!(
            "Save script failed with {}",
            status
        )));
    }

    info!("Configuration saved");
    Ok(())
}

/// Verify a directory accepts writes by creating and removing a marker file
fn check_dir_writable(dir: &std::path::Path) -> std::io::Result<()> {
    let marker = dir.join(".nextcloud-potd-config-write-check");
    std::fs::write(&marker, b"")?;
    std::fs::remove_file(&marker)?;
    Ok(())
}

/// Check system prerequisites
pub async fn check_prerequisites_command(config_path: Option<&str>) -> Result<()> {
    info!("Checking prerequisites for saving provider configuration");

    let mut ok = true;

    if utils::command_exists("bash") {
        info!("✓ bash is available");
    } else {
        error!("✗ bash not found in PATH");
        ok = false;
    }

    let loader = make_loader(config_path)?;
    match loader.path().parent() {
        Some(parent) if parent.exists() => match check_dir_writable(parent) {
            Ok(()) => {
                info!("✓ Config directory {} is writable", parent.display());
            }
            Err(e) => {
                error!(
                    "✗ Config directory {} is not writable: {}",
                    parent.display(),
                    e
                );
                ok = false;
            }
        },
        Some(parent) => {
            // save() creates it on demand, so this is informational only.
            info!(
                "⚠ Config directory {} does not exist yet (it will be created on save)",
                parent.display()
            );
        }
        None => {
            error!("✗ Config path {} has no parent directory", loader.path().display());
            ok = false;
        }
    }

    if !ok {
        return Err(ConfigToolError::execution(
            "Prerequisite check failed".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_then_show_round_trip() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nextcloudprovider.conf");
        let path_str = path.to_string_lossy().into_owned();

        set_command(Some(&path_str), "Username", "alice").await?;
        set_command(Some(&path_str), "MaxImages", "5").await?;

        let config = ConfigLoader::with_path(&path_str).load()?;
        assert_eq!(config.username, "alice");
        assert_eq!(config.max_images, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_set_rejects_unknown_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nextcloudprovider.conf");
        let path_str = path.to_string_lossy().into_owned();

        let result = set_command(Some(&path_str), "Frequency", "daily").await;
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_validate_reports_incomplete_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nextcloudprovider.conf");
        let path_str = path.to_string_lossy().into_owned();

        // Default config: remote mode with everything empty.
        let result = validate_command(Some(&path_str)).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Nextcloud URL is required"));
    }

    #[tokio::test]
    async fn test_save_executes_script_with_config_on_stdin() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nextcloudprovider.conf");
        let config_str = config_path.to_string_lossy().into_owned();
        set_command(Some(&config_str), "Username", "alice").await?;

        // Script copies stdin to a capture file so the test can inspect
        // what the built command actually piped through.
        let capture = temp_dir.path().join("captured.txt");
        let script = temp_dir.path().join("save.sh");
        std::fs::write(&script, format!("cat > {}\n", capture.display()))?;

        save_command(Some(&config_str), &script.to_string_lossy(), false).await?;

        let captured = std::fs::read_to_string(&capture)?;
        // echo flattened the newlines to literal backslash-n and added one
        // trailing newline of its own.
        assert!(captured.contains("Username=alice"));
        assert!(captured.contains("\\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_check_prereqs_fails_when_config_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        // Occupy the config directory path with a regular file so writes
        // into it cannot succeed for any user.
        let dir_path = temp_dir.path().join("plasma_engine_potd");
        std::fs::write(&dir_path, b"not a directory").unwrap();
        let config_path = dir_path.join("nextcloudprovider.conf");

        let result =
            check_prerequisites_command(Some(&config_path.to_string_lossy())).await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_prereqs_fails_for_read_only_config_dir() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let dir_path = temp_dir.path().join("plasma_engine_potd");
        std::fs::create_dir(&dir_path).unwrap();
        std::fs::set_permissions(&dir_path, std::fs::Permissions::from_mode(0o555)).unwrap();

        // Mode bits do not bind root, so only assert when the restriction
        // actually took effect.
        if std::fs::write(dir_path.join("marker"), b"").is_ok() {
            return;
        }

        let config_path = dir_path.join("nextcloudprovider.conf");
        let result =
            check_prerequisites_command(Some(&config_path.to_string_lossy())).await;
        assert!(result.is_err());

        std::fs::set_permissions(&dir_path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[tokio::test]
    async fn test_check_prereqs_passes_for_writable_config_dir() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nextcloudprovider.conf");

        check_prerequisites_command(Some(&config_path.to_string_lossy())).await?;
        // The writability marker must not be left behind.
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_propagates_script_failure() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nextcloudprovider.conf");
        let script = temp_dir.path().join("fail.sh");
        std::fs::write(&script, "exit 3\n").unwrap();

        let result = save_command(
            Some(&config_path.to_string_lossy()),
            &script.to_string_lossy(),
            false,
        )
        .await;
        assert!(result.is_err());
    }
}
