//! Token cryptography
//!
//! This module provides:
//! - URL-safe, unpadded Base64 with padding restoration
//! - The keyed integrity codec (HMAC-SHA256 prefix + payload)
//! - Unauthenticated URL-safe text encoding

pub mod base64url;
pub mod codec;
pub mod text;

pub use codec::{decode, encode, token_len};
pub use text::{decode_text, encode_text};
