//! Encode command implementation

use crate::cli::commands::load_config;
use crate::cli::EncodeTarget;
use crate::ids::{encode_pair, encode_single, StreamLink};
use crate::links::stream_url;
use anyhow::Result;
use std::path::Path;

/// Execute the encode command
pub fn execute(target: EncodeTarget, config: Option<&Path>, json: bool) -> Result<()> {
    let cfg = load_config(config)?;
    let key = cfg.secret_key()?;

    let (token, url, ids) = match target {
        EncodeTarget::Single { id } => (encode_single(id, &key), None, vec![id]),
        EncodeTarget::Pair {
            stream_group_id,
            profile_id,
        } => (
            encode_pair(stream_group_id, profile_id, &key),
            None,
            vec![stream_group_id, profile_id],
        ),
        EncodeTarget::Triple {
            stream_group_id,
            profile_id,
            channel_id,
            name,
        } => {
            let link = StreamLink::new(stream_group_id, profile_id, channel_id);
            let url = name.map(|n| stream_url(cfg.base_url(), &link, &key, &n));
            (link.encode(&key), url, vec![stream_group_id, profile_id, channel_id])
        },
    };

    if json {
        let output = serde_json::json!({
            "ids": ids,
            "token": token,
            "url": url,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", url.unwrap_or(token));
    }

    Ok(())
}
