//! Command-line interface for Stream Links

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::types::DEFAULT_KEY_LEN;
use crate::ids::IdShape;

pub mod commands;

/// Stream Links - tamper-evident tokens for stream identifiers
#[derive(Parser)]
#[command(
    name = "stream-links",
    version,
    about = "Mint and verify URL tokens for stream-group, profile and channel ids",
    long_about = "Stream Links packs stream identifiers into HMAC-signed, URL-safe tokens and verifies tokens handed back by clients."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (default: ~/.stream-links/config.toml)
    #[arg(long, global = true, env = "STREAM_LINKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new secret key
    Keygen {
        /// Key length in bytes
        #[arg(long, default_value_t = DEFAULT_KEY_LEN)]
        bytes: usize,

        /// Store the key in the configuration file
        #[arg(long)]
        save: bool,
    },

    /// Encode identifiers into a token
    Encode {
        #[command(subcommand)]
        target: EncodeTarget,
    },

    /// Verify a token and print the identifiers it carries
    Decode {
        /// Payload shape the token is expected to carry
        #[arg(value_enum)]
        shape: ShapeArg,

        /// Token to decode
        token: String,
    },

    /// Get and set configuration values
    Config {
        /// Configuration key (keys.secret_key, links.base_url)
        key: Option<String>,

        /// Value to set
        value: Option<String>,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,

        /// Unset a configuration value
        #[arg(long)]
        unset: bool,
    },
}

#[derive(Subcommand)]
pub enum EncodeTarget {
    /// A single id, e.g. a profile id
    Single { id: u32 },

    /// Stream-group id and profile id
    Pair {
        stream_group_id: u32,
        profile_id: u32,
    },

    /// Stream-group id, profile id and channel id
    Triple {
        stream_group_id: u32,
        profile_id: u32,
        channel_id: u32,

        /// Channel name; prints the full stream URL instead of the bare token
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Single,
    Pair,
    Triple,
}

impl From<ShapeArg> for IdShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Single => IdShape::Single,
            ShapeArg::Pair => IdShape::Pair,
            ShapeArg::Triple => IdShape::Triple,
        }
    }
}
