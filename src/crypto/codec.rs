//! Keyed integrity codec
//!
//! Turns an arbitrary payload into a tamper-evident, URL-safe token:
//!
//! ```text
//! token = base64url_nopad( HMAC-SHA256(key, payload) || payload )
//! ```
//!
//! The MAC is a fixed-size prefix, so decoding slices it off without looking
//! at the payload. Payload bytes are handed back only after the MAC has been
//! verified in constant time. The codec knows nothing about what the payload
//! means.

use crate::core::error::DecodeError;
use crate::core::types::{SecretKey, MAC_SIZE};
use crate::crypto::base64url;
use hmac::Mac;

/// Sign `payload` with `key` and render it as a token
pub fn encode(payload: &[u8], key: &SecretKey) -> String {
    let mut mac = key.mac();
    mac.update(payload);
    let tag = mac.finalize().into_bytes();

    let mut blob = Vec::with_capacity(MAC_SIZE + payload.len());
    blob.extend_from_slice(&tag);
    blob.extend_from_slice(payload);

    base64url::encode(&blob)
}

/// Verify `token` against `key` and return the payload it carries
pub fn decode(token: &str, key: &SecretKey) -> Result<Vec<u8>, DecodeError> {
    let blob = base64url::decode(token)?;

    if blob.len() < MAC_SIZE {
        return Err(DecodeError::malformed(format!(
            "decoded {} bytes, need at least {}",
            blob.len(),
            MAC_SIZE
        )));
    }

    let (claimed, payload) = blob.split_at(MAC_SIZE);

    let mut mac = key.mac();
    mac.update(payload);
    mac.verify_slice(claimed)
        .map_err(|_| DecodeError::IntegrityFailure)?;

    Ok(payload.to_vec())
}

/// Length of the token [`encode`] produces for a payload of `payload_len` bytes
pub fn token_len(payload_len: usize) -> usize {
    let blob_len = MAC_SIZE + payload_len;
    (blob_len * 4 + 2) / 3
}
