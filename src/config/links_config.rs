//! Stream Links configuration
//!
//! Stored in ~/.stream-links/config.toml. The secret key can be overridden
//! from the environment so deployments never have to write it to disk.

use crate::core::error::{Result, StreamLinksError};
use crate::core::types::{SecretKey, MIN_KEY_LEN};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding a hex secret key
pub const SECRET_KEY_ENV: &str = "STREAM_LINKS_SECRET_KEY";

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:7095";

/// Configuration for Stream Links
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinksConfig {
    /// Key material
    #[serde(default)]
    pub keys: KeysConfig,
    /// Link rendering
    #[serde(default)]
    pub links: LinkSettings,
}

/// Key configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeysConfig {
    /// Secret key (hex encoded)
    pub secret_key: Option<String>,
}

/// Link rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkSettings {
    /// Base URL prepended to stream paths
    pub base_url: Option<String>,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
        }
    }
}

/// Configuration key for setting values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    SecretKey,
    BaseUrl,
}

impl ConfigKey {
    pub fn from_str(key: &str) -> Option<Self> {
        match key {
            "keys.secret_key" => Some(ConfigKey::SecretKey),
            "links.base_url" => Some(ConfigKey::BaseUrl),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            ConfigKey::SecretKey => "keys.secret_key",
            ConfigKey::BaseUrl => "links.base_url",
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            keys: KeysConfig::default(),
            links: LinkSettings::default(),
        }
    }
}

impl LinksConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: LinksConfig = toml::from_str(&content).map_err(|e| {
            StreamLinksError::configuration(format!("Failed to parse config: {}", e))
        })?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            StreamLinksError::configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let user_dirs = UserDirs::new().ok_or(StreamLinksError::HomeDirectoryNotFound)?;
        Ok(user_dirs
            .home_dir()
            .join(".stream-links")
            .join("config.toml"))
    }

    /// Get a configuration value
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::SecretKey => self.keys.secret_key.as_deref(),
            ConfigKey::BaseUrl => self.links.base_url.as_deref(),
        }
    }

    /// Set a configuration value
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::SecretKey => {
                validate_secret_hex(value)?;
                self.keys.secret_key = Some(value.trim().to_string());
            },
            ConfigKey::BaseUrl => {
                let value = value.trim();
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(StreamLinksError::configuration(
                        "links.base_url must start with http:// or https://",
                    ));
                }
                self.links.base_url = Some(value.trim_end_matches('/').to_string());
            },
        }
        Ok(())
    }

    /// Unset a configuration value
    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::SecretKey => self.keys.secret_key = None,
            ConfigKey::BaseUrl => self.links.base_url = None,
        }
    }

    /// List configuration values, with the secret key masked
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();

        if let Some(secret) = &self.keys.secret_key {
            entries.push((
                ConfigKey::SecretKey.to_str().to_string(),
                format!("<{} hex chars>", secret.len()),
            ));
        }
        if let Some(base_url) = &self.links.base_url {
            entries.push((ConfigKey::BaseUrl.to_str().to_string(), base_url.clone()));
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Base URL for rendered links
    pub fn base_url(&self) -> &str {
        self.links.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Resolve the process secret key.
    ///
    /// `STREAM_LINKS_SECRET_KEY` wins over the file value.
    pub fn secret_key(&self) -> Result<SecretKey> {
        let env_value = std::env::var(SECRET_KEY_ENV).ok();
        self.secret_key_with_override(env_value.as_deref())
    }

    /// Same as [`secret_key`](Self::secret_key) with an explicit override
    pub fn secret_key_with_override(&self, override_hex: Option<&str>) -> Result<SecretKey> {
        let hex_key = match override_hex.filter(|v| !v.trim().is_empty()) {
            Some(value) => {
                debug!("Using secret key from environment");
                value
            },
            None => self
                .keys
                .secret_key
                .as_deref()
                .ok_or(StreamLinksError::SecretKeyMissing)?,
        };

        validate_secret_hex(hex_key)?;
        SecretKey::from_hex(hex_key)
    }
}

fn validate_secret_hex(value: &str) -> Result<()> {
    let bytes = hex::decode(value.trim()).map_err(|_| {
        StreamLinksError::invalid_secret_key("secret key must be a hex string")
    })?;

    if bytes.len() < MIN_KEY_LEN {
        return Err(StreamLinksError::invalid_secret_key(format!(
            "secret key must be at least {} bytes, got {}",
            MIN_KEY_LEN,
            bytes.len()
        )));
    }
    Ok(())
}
