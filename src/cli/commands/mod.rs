//! CLI command implementations

pub mod config;
pub mod decode;
pub mod encode;
pub mod keygen;

use crate::config::LinksConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolve the configuration file path from `--config` or the default location
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(LinksConfig::get_config_path()?),
    }
}

/// Load configuration from `--config` or the default location
pub fn load_config(explicit: Option<&Path>) -> Result<LinksConfig> {
    Ok(LinksConfig::load_from(&config_path(explicit)?)?)
}
