//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use draftsmith::{DraftsmithError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for DraftsmithError {
    fn from(err: ConfigError) -> Self {
        DraftsmithError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (draftsmith/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DraftsmithError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("draftsmith/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "draftsmith", "draftsmith") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, DraftsmithError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;

    Ok(config)
}

/// Checks values the type system cannot express.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(package) = config.emit().package() {
        if !is_package_name(package) {
            return Err(ConfigError::Validation(format!(
                "`{package}` is not a valid package name"
            )));
        }
    }
    Ok(())
}

/// Dot-separated identifiers, each starting with a letter, `_` or `$`.
fn is_package_name(name: &str) -> bool {
    name.trim().split('.').all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, content).expect("Failed to write config");
        (dir, path)
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let (_dir, path) = write_config("[emit]\nindent = 2\npackage = \"com.example\"\n");

        let config = load_config(Some(&path)).expect("config loads");
        assert_eq!(config.emit().indent(), 2);
        assert_eq!(config.emit().package(), Some("com.example"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let result = load_config(Some(dir.path().join("absent.toml")));

        let err = result.expect_err("missing file must fail");
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let (_dir, path) = write_config("[emit\nindent = 2\n");

        let err = load_config(Some(&path)).expect_err("bad toml must fail");
        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }

    #[test]
    fn test_invalid_package_is_rejected() {
        let (_dir, path) = write_config("[emit]\npackage = \"com.1example\"\n");

        let err = load_config(Some(&path)).expect_err("bad package must fail");
        assert!(err.to_string().contains("not a valid package name"));
    }

    #[test]
    fn test_package_names() {
        assert!(is_package_name("fleet"));
        assert!(is_package_name("com.example.fleet_v2"));
        assert!(!is_package_name("com..example"));
        assert!(!is_package_name("com.example."));
        assert!(!is_package_name("my-app"));
    }
}
