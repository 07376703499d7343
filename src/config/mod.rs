//! Configuration management for Stream Links
//!
//! Key provisioning and link settings, stored in ~/.stream-links/config.toml

pub mod links_config;

// Re-export commonly used items
pub use links_config::{ConfigKey, LinksConfig, DEFAULT_BASE_URL, SECRET_KEY_ENV};
