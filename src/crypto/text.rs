//! Plain URL-safe text encoding
//!
//! Renders a UTF-8 string as URL-safe, unpadded Base64 so it can travel in a
//! path segment. There is no MAC here: anyone can decode or forge these, so
//! they are only for values that are not secret and not trusted.

use crate::core::error::{DecodeError, Result, StreamLinksError};
use crate::crypto::base64url;

/// Encode a non-blank string
pub fn encode_text(input: &str) -> Result<String> {
    if input.trim().is_empty() {
        return Err(StreamLinksError::invalid_input(
            "input cannot be empty or whitespace",
        ));
    }

    Ok(base64url::encode(input.as_bytes()))
}

/// Decode a string produced by [`encode_text`]
pub fn decode_text(token: &str) -> std::result::Result<String, DecodeError> {
    let bytes = base64url::decode(token)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::malformed(e.to_string()))
}
