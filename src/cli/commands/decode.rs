//! Decode command implementation

use crate::cli::commands::load_config;
use crate::core::types::SecretKey;
use crate::ids::IdShape;
use crate::links::accept_token;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the decode command
pub fn execute(shape: IdShape, token: &str, config: Option<&Path>, json: bool) -> Result<()> {
    let cfg = load_config(config)?;
    let key = cfg.secret_key()?;

    let ids = decode_as(shape, token.trim(), &key).map_err(|e| match e.token_kind() {
        Some(kind) => anyhow::anyhow!("Token rejected ({}): {}", kind, e),
        None => e.into(),
    })?;

    if json {
        let output = match shape {
            IdShape::Single => serde_json::json!({ "id": ids[0] }),
            IdShape::Pair => serde_json::json!({
                "stream_group_id": ids[0],
                "profile_id": ids[1],
            }),
            IdShape::Triple => serde_json::json!({
                "stream_group_id": ids[0],
                "profile_id": ids[1],
                "channel_id": ids[2],
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let labels: &[&str] = match shape {
            IdShape::Single => &["id"],
            IdShape::Pair => &["stream_group_id", "profile_id"],
            IdShape::Triple => &["stream_group_id", "profile_id", "channel_id"],
        };
        for (label, id) in labels.iter().zip(&ids) {
            println!("{}: {}", label.bold(), id.to_string().cyan());
        }
    }

    Ok(())
}

fn decode_as(shape: IdShape, token: &str, key: &SecretKey) -> crate::core::error::Result<Vec<u32>> {
    Ok(match shape {
        IdShape::Single => vec![accept_token::<u32>(token, key)?],
        IdShape::Pair => {
            let (a, b) = accept_token::<(u32, u32)>(token, key)?;
            vec![a, b]
        },
        IdShape::Triple => {
            let (a, b, c) = accept_token::<(u32, u32, u32)>(token, key)?;
            vec![a, b, c]
        },
    })
}
