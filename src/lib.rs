//! Stream Links - tamper-evident URL tokens for stream identifiers
//!
//! Internal numeric identifiers (stream group, stream-group profile, channel)
//! are handed to untrusted clients as short, URL-safe tokens. A token is an
//! HMAC-SHA256 tag followed by the packed identifiers, rendered as unpadded
//! URL-safe Base64. Any modification is rejected when the token comes back.
//!
//! # Layers
//!
//! - **Keyed integrity codec** ([`crypto::codec`]): payload bytes in, token
//!   out, and back, with constant-time MAC verification.
//! - **Identifier packing** ([`ids`]): big-endian `u32` payload shapes
//!   (single, pair, triple) and the typed [`StreamLink`].
//! - **Links** ([`links`]): resolving decoded ids against storage and
//!   rendering shareable stream URLs.
//!
//! Tokens give integrity, not confidentiality: the ids inside are readable by
//! anyone who Base64-decodes them.
//!
//! # Example Usage
//!
//! ```rust
//! use stream_links::{SecretKey, StreamLink, TokenErrorKind};
//!
//! let key = SecretKey::from_hex("000102030405060708090a0b0c0d0e0f")?;
//!
//! let link = StreamLink::new(7, 3, 42);
//! let token = link.encode(&key);
//! assert_eq!(StreamLink::decode(&token, &key)?, link);
//!
//! let err = StreamLink::decode("not-a-token", &key).unwrap_err();
//! assert_eq!(err.kind(), TokenErrorKind::Malformed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;
pub mod ids;
pub mod links;

// Re-export commonly used types
pub use crate::core::{
    error::{DecodeError, Result, StreamLinksError, TokenError, TokenErrorKind, UnpackError},
    types::{SecretKey, MAC_SIZE},
};

pub use ids::{decode_identifiers, encode_identifiers, IdShape, Identifiers, StreamLink};

pub use links::{resolve_stream_link, stream_url, StreamGroupResolver};

/// Current version of Stream Links
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
