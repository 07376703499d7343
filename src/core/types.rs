//! Core data types for Stream Links

use crate::core::error::{Result, StreamLinksError};
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use std::fmt;

/// Keyed hash used for token authentication
pub type HmacSha256 = Hmac<Sha256>;

/// Length of the MAC prefix of every authenticated blob
pub const MAC_SIZE: usize = 32;

/// Shortest key accepted from configuration or generation
pub const MIN_KEY_LEN: usize = 16;

/// Length of keys produced by `keygen` unless asked otherwise
pub const DEFAULT_KEY_LEN: usize = 32;

/// Process-wide secret used to sign and verify tokens.
///
/// The key material is absorbed into a keyed HMAC state at construction
/// time and never exposed again; cloning shares nothing mutable, so a key
/// can be handed to any number of threads.
#[derive(Clone)]
pub struct SecretKey {
    mac: HmacSha256,
    len: usize,
}

impl SecretKey {
    /// Create a key from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(StreamLinksError::invalid_secret_key("key must not be empty"));
        }

        let mac = HmacSha256::new_from_slice(bytes)
            .map_err(|e| StreamLinksError::invalid_secret_key(e.to_string()))?;

        Ok(Self {
            mac,
            len: bytes.len(),
        })
    }

    /// Create a key from a hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex.trim())?;
        Self::from_bytes(&bytes)
    }

    /// Generate a random key, returning it with its hex encoding for storage
    pub fn generate(len: usize) -> Result<(Self, String)> {
        if len < MIN_KEY_LEN {
            return Err(StreamLinksError::invalid_secret_key(format!(
                "key must be at least {} bytes, got {}",
                MIN_KEY_LEN, len
            )));
        }

        let mut bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut bytes);
        let key = Self::from_bytes(&bytes)?;
        Ok((key, hex::encode(&bytes)))
    }

    /// Length of the key material in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fresh MAC state keyed with this secret
    pub(crate) fn mac(&self) -> HmacSha256 {
        self.mac.clone()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<{} bytes redacted>)", self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::digest::OutputSizeUser;

    #[test]
    fn test_mac_size_matches_digest() {
        assert_eq!(MAC_SIZE, Sha256::output_size());
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            SecretKey::from_bytes(&[]),
            Err(StreamLinksError::InvalidSecretKey { .. })
        ));
    }

    #[test]
    fn test_from_hex() {
        let key = SecretKey::from_hex("00112233445566778899aabbccddeeff").unwrap();
        assert_eq!(key.len(), 16);

        assert!(matches!(
            SecretKey::from_hex("not hex"),
            Err(StreamLinksError::HexError(_))
        ));
    }

    #[test]
    fn test_generate() {
        let (key, hex_key) = SecretKey::generate(DEFAULT_KEY_LEN).unwrap();
        assert_eq!(key.len(), DEFAULT_KEY_LEN);
        assert_eq!(hex_key.len(), DEFAULT_KEY_LEN * 2);

        let (_, other) = SecretKey::generate(DEFAULT_KEY_LEN).unwrap();
        assert_ne!(hex_key, other);

        assert!(SecretKey::generate(MIN_KEY_LEN - 1).is_err());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::from_hex("00112233445566778899aabbccddeeff").unwrap();
        let rendered = format!("{:?}", key);
        assert_eq!(rendered, "SecretKey(<16 bytes redacted>)");
        assert!(!rendered.contains("0011"));
    }
}
