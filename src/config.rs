use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};
use crate::gradle::{validate_marker, DEFAULT_DELEGATION_MARKER};

/// Project-local config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "buildbump.toml";

/// Represents the complete configuration for build-bump.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub gradle: GradleConfig,
}

fn default_pubspec_path() -> PathBuf {
    PathBuf::from("pubspec.yaml")
}

fn default_gradle_path() -> PathBuf {
    PathBuf::from("android/app/build.gradle")
}

/// Locations of the two files that get rewritten.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_pubspec_path")]
    pub pubspec: PathBuf,

    #[serde(default = "default_gradle_path")]
    pub gradle: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            pubspec: default_pubspec_path(),
            gradle: default_gradle_path(),
        }
    }
}

fn default_delegation_marker() -> String {
    DEFAULT_DELEGATION_MARKER.to_string()
}

fn default_enabled() -> bool {
    true
}

/// Controls how the Gradle file is treated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GradleConfig {
    /// Set to false for projects without an Android module
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_delegation_marker")]
    pub delegation_marker: String,
}

impl Default for GradleConfig {
    fn default() -> Self {
        GradleConfig {
            enabled: default_enabled(),
            delegation_marker: default_delegation_marker(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `buildbump.toml` in current directory
/// 3. `.buildbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let source = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(".buildbump.toml");
        if user_config.exists() {
            user_config
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&source).map_err(|e| {
        BumpError::config(format!("cannot read {}: {}", source.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| BumpError::config(format!("cannot parse {}: {}", source.display(), e)))?;
    validate_marker(&config.gradle.delegation_marker)?;

    Ok(config)
}
