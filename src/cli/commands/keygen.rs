//! Key generation command implementation

use crate::cli::commands::{config_path, load_config};
use crate::config::ConfigKey;
use crate::core::types::SecretKey;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the keygen command
pub fn execute(bytes: usize, save: bool, config: Option<&Path>, json: bool) -> Result<()> {
    let (key, key_hex) = SecretKey::generate(bytes)?;

    let saved_to = if save {
        let path = config_path(config)?;
        let mut cfg = load_config(config)?;
        cfg.set(ConfigKey::SecretKey, &key_hex)?;
        cfg.save_to(&path)?;
        info!(path = %path.display(), "Stored new secret key");
        Some(path)
    } else {
        None
    };

    if json {
        let output = serde_json::json!({
            "secret_key": key_hex,
            "bytes": key.len(),
            "saved_to": saved_to.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", key_hex);

    if let Some(path) = saved_to {
        eprintln!(
            "{} Key saved to {}",
            "✓".green(),
            path.display().to_string().bright_white()
        );
        eprintln!(
            "  {} Tokens minted with the previous key no longer verify",
            "•".yellow()
        );
    }

    Ok(())
}
