//! Configuration for the preptrack client
//!
//! The API base URL is resolved once at startup and held immutable for the
//! process lifetime: the `PREPTRACK_API_URL` environment variable wins over
//! the config file, which wins over the compiled development default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the tracker API, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Default config path
    pub fn default_path() -> Result<PathBuf> {
        // Check environment variable first
        if let Ok(env_path) = std::env::var("PREPTRACK_CONFIG") {
            return Ok(PathBuf::from(env_path));
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("preptrack");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        // Add helpful comments
        let with_comments = format!(
            "# preptrack configuration\n\
             # Point base_url at your tracker API deployment.\n\n\
             {}\n\
             # The PREPTRACK_API_URL environment variable overrides base_url.\n",
            content
        );

        std::fs::write(path, with_comments).context("Failed to write config file")?;

        Ok(())
    }

    /// Resolve the effective base URL: env var, then config file, then the
    /// development default.
    pub fn resolved_base_url(&self) -> String {
        std::env::var("PREPTRACK_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.api.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_development_url() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);

        let config: Config =
            toml::from_str("[api]\nbase_url = \"https://prep.example.com/api\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://prep.example.com/api");
    }

    #[test]
    fn save_round_trips_through_load() {
        let dir = std::env::temp_dir().join("preptrack-config-test");
        let path = dir.join("config.toml");
        let config = Config {
            api: ApiConfig {
                base_url: "https://prep.example.com/api".to_string(),
            },
        };
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "https://prep.example.com/api");
        std::fs::remove_dir_all(&dir).ok();
    }
}
