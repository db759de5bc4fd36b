//! Top-level application configuration.
//!
//! Configuration is stored as YAML in the platform config directory and
//! includes:
//! - Directory server URL (overridable via `GROUPDECK_SERVER`)
//! - Default page size for listings
//! - HTTP timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{GroupdeckError, Result};
use crate::types::{DEFAULT_PAGE_SIZE, PAGE_SIZE_CHOICES};

/// Server URL used when neither the environment nor the config file
/// provides one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000/api";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the directory server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    /// Default page size for listings (must be one of the fixed choices)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// HTTP timeout in seconds (default: 30)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: None,
            page_size: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "groupdeck").ok_or_else(|| {
            GroupdeckError::Config("could not determine config directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            GroupdeckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GroupdeckError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            GroupdeckError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Set restrictive permissions on Unix (owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions).map_err(|e| {
                GroupdeckError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Get the server URL from the environment variable or config file
    pub fn server_url(&self) -> String {
        if let Ok(url) = env::var("GROUPDECK_SERVER")
            && !url.is_empty()
        {
            return url;
        }

        self.server_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    /// Get the default page size, falling back when the configured value
    /// is not one of the fixed choices
    pub fn page_size(&self) -> usize {
        match self.page_size {
            Some(size) if PAGE_SIZE_CHOICES.contains(&size) => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }

    /// Get the HTTP timeout duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Set the server URL
    pub fn set_server_url(&mut self, url: String) {
        self.server_url = Some(url);
    }

    /// Set the default page size
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = Some(size);
    }

    /// Set the HTTP timeout in seconds
    pub fn set_timeout_seconds(&mut self, seconds: u64) {
        self.timeout_seconds = seconds;
    }
}
