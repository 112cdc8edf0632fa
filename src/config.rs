//! Application configuration management.
//!
//! This module handles loading and saving the client configuration,
//! which currently holds only the restaurant-list endpoint URL.
//!
//! Configuration is stored at `~/.config/dinecache/config.json`; the
//! local restaurant cache lives under the platform cache directory.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "dinecache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default restaurant-list endpoint of the directory backend
const DEFAULT_BASE_URL: &str = "http://localhost:1337/restaurants";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Endpoint serving the full restaurant list.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the local restaurant cache. `None` when the
    /// platform offers no cache directory; caching is then disabled.
    pub fn cache_dir(&self) -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(APP_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_configured_base_url_wins() {
        let config = Config {
            base_url: Some("https://directory.example.com/restaurants".to_string()),
        };
        assert_eq!(config.base_url(), "https://directory.example.com/restaurants");
    }
}
