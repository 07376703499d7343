//! URL-safe, unpadded Base64
//!
//! Tokens drop their `=` padding so they can sit in a path segment as-is.
//! Decoding puts the padding back from the length modulo 4 and then decodes
//! with the URL-safe alphabet (`-` and `_` in place of `+` and `/`).

use crate::core::error::DecodeError;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;
use std::borrow::Cow;

/// Encode bytes as URL-safe Base64 without padding
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Append the padding stripped by [`encode`].
///
/// A length of `4n + 1` can never come out of an encoder and is rejected.
pub fn restore_padding(token: &str) -> Result<Cow<'_, str>, DecodeError> {
    match token.len() % 4 {
        0 => Ok(Cow::Borrowed(token)),
        2 => Ok(Cow::Owned(format!("{}==", token))),
        3 => Ok(Cow::Owned(format!("{}=", token))),
        _ => Err(DecodeError::malformed(format!(
            "invalid token length {}",
            token.len()
        ))),
    }
}

/// Decode a string produced by [`encode`]
pub fn decode(token: &str) -> Result<Vec<u8>, DecodeError> {
    let padded = restore_padding(token)?;
    URL_SAFE
        .decode(padded.as_bytes())
        .map_err(|e| DecodeError::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_restoration() {
        assert_eq!(restore_padding("").unwrap(), "");
        assert_eq!(restore_padding("AAAA").unwrap(), "AAAA");
        assert_eq!(restore_padding("AA").unwrap(), "AA==");
        assert_eq!(restore_padding("AAA").unwrap(), "AAA=");
        assert!(restore_padding("A").is_err());
        assert!(restore_padding("AAAAA").is_err());
    }

    #[test]
    fn test_url_safe_alphabet() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet
        let encoded = encode(&[0xfb, 0xff]);
        assert_eq!(encoded, "-_8");
        assert_eq!(decode(&encoded).unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_standard_alphabet_rejected() {
        assert!(matches!(
            decode("+/8"),
            Err(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn test_non_canonical_trailing_bits_rejected() {
        // "AB" decodes to a single byte whose low bits must be zero
        assert!(decode("AA").is_ok());
        assert!(decode("AB").is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        for input in ["%%%%", "a b c", "ab\u{e9}", "A=AA"] {
            assert!(
                matches!(decode(input), Err(DecodeError::Malformed { .. })),
                "expected malformed for {:?}",
                input
            );
        }
    }
}
