//! Configuration command implementation

use crate::cli::commands::{config_path, load_config};
use crate::config::{ConfigKey, LinksConfig};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the config command
pub fn execute(
    key: Option<String>,
    value: Option<String>,
    list: bool,
    unset: bool,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let path = config_path(config)?;
    let mut cfg = load_config(config)?;

    if list || key.is_none() {
        return list_configuration(&cfg, json);
    }

    let key_str = key.unwrap_or_default();
    let config_key = ConfigKey::from_str(&key_str)
        .ok_or_else(|| anyhow::anyhow!("Invalid configuration key: {}", key_str))?;

    if unset {
        cfg.unset(config_key);
        cfg.save_to(&path)?;

        if json {
            println!(
                "{}",
                serde_json::json!({ "action": "unset", "key": key_str, "status": "success" })
            );
        } else {
            println!("{} {}", "✓".green(), format!("Unset {}", key_str).bold());
        }
    } else if let Some(value_str) = value {
        cfg.set(config_key, &value_str)?;
        cfg.save_to(&path)?;

        let shown = display_value(config_key, &value_str);
        if json {
            println!(
                "{}",
                serde_json::json!({ "action": "set", "key": key_str, "value": shown, "status": "success" })
            );
        } else {
            println!("{} {} = {}", "✓".green(), key_str.bold(), shown.cyan());
        }
    } else {
        match cfg.get(config_key) {
            Some(v) => {
                let shown = display_value(config_key, v);
                if json {
                    println!("{}", serde_json::json!({ "key": key_str, "value": shown }));
                } else {
                    println!("{}", shown);
                }
            },
            None => {
                if json {
                    println!("{}", serde_json::json!({ "key": key_str, "value": null }));
                } else {
                    eprintln!("{} {} is not set", "•".yellow(), key_str);
                }
            },
        }
    }

    Ok(())
}

fn display_value(key: ConfigKey, value: &str) -> String {
    match key {
        ConfigKey::SecretKey => format!("<{} hex chars>", value.trim().len()),
        ConfigKey::BaseUrl => value.to_string(),
    }
}

fn list_configuration(cfg: &LinksConfig, json: bool) -> Result<()> {
    let entries = cfg.list();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else if entries.is_empty() {
        println!("{}", "No configuration values set".dimmed());
    } else {
        for (k, v) in entries {
            println!("{}={}", k.bold(), v);
        }
    }

    Ok(())
}
