//! Configuration management for ratekit
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (RATEKIT_*)
//! 3. Config file (~/.config/ratekit/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Gate for the native review capability
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// Minimum platform version the native review flow supports
    pub min_platform_version: u32,

    /// Package identifier of the platform's official store application
    pub store_package: String,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            min_platform_version: 21,
            store_package: "com.android.vending".to_string(),
        }
    }
}

/// Store-listing endpoints used by the navigation fallback
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Deep-link base URI for the native store application
    pub native_uri: String,

    /// Base URL of the store's public web listing page
    pub web_uri: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            native_uri: "market://details".to_string(),
            web_uri: "https://play.google.com/store/apps/details".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Native review availability gate
    pub availability: AvailabilityConfig,

    /// Store navigation endpoints
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/ratekit/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ratekit").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - RATEKIT_STORE_PACKAGE: Store application package identifier
    /// - RATEKIT_MIN_PLATFORM_VERSION: Minimum platform version
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(package) = std::env::var("RATEKIT_STORE_PACKAGE") {
            self.availability.store_package = package;
        }

        if let Ok(version) = std::env::var("RATEKIT_MIN_PLATFORM_VERSION") {
            if let Ok(version) = version.parse() {
                self.availability.min_platform_version = version;
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        store_package: Option<String>,
        min_platform_version: Option<u32>,
    ) -> Self {
        if let Some(package) = store_package {
            self.availability.store_package = package;
        }

        if let Some(version) = min_platform_version {
            self.availability.min_platform_version = version;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        store_package: Option<String>,
        min_platform_version: Option<u32>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(store_package, min_platform_version))
    }
}
