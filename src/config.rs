//! Configuration handling for the engine

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default delay before a success notification is cleared, in milliseconds
pub const DEFAULT_CLEAR_MS: u64 = 1000;

/// User configuration for the registration engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Create-user endpoint URL
    pub endpoint: Option<String>,
    /// Milliseconds before a success notification is cleared
    pub notification_clear_ms: Option<u64>,
}

impl EngineConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "regform", "regform")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: EngineConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Notification clear delay as a duration
    pub fn clear_delay(&self) -> Duration {
        Duration::from_millis(self.notification_clear_ms.unwrap_or(DEFAULT_CLEAR_MS))
    }
}
