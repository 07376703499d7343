//! Identifier tokens
//!
//! Glue between the payload shapes and the keyed codec. Decoding verifies the
//! MAC before the payload is unpacked, and a failure at either step is
//! returned as-is; no default identifiers are ever substituted.

use crate::core::error::{TokenError, UnpackError};
use crate::core::types::SecretKey;
use crate::crypto::codec;
use crate::ids::packing::{self, IdShape};

/// A set of identifiers with a fixed payload shape
pub trait Identifiers: Sized {
    const SHAPE: IdShape;

    fn pack(&self) -> Vec<u8>;

    fn unpack(payload: &[u8]) -> Result<Self, UnpackError>;
}

impl Identifiers for u32 {
    const SHAPE: IdShape = IdShape::Single;

    fn pack(&self) -> Vec<u8> {
        packing::pack_single(*self).to_vec()
    }

    fn unpack(payload: &[u8]) -> Result<Self, UnpackError> {
        packing::unpack_single(payload)
    }
}

impl Identifiers for (u32, u32) {
    const SHAPE: IdShape = IdShape::Pair;

    fn pack(&self) -> Vec<u8> {
        packing::pack_pair(self.0, self.1).to_vec()
    }

    fn unpack(payload: &[u8]) -> Result<Self, UnpackError> {
        packing::unpack_pair(payload)
    }
}

impl Identifiers for (u32, u32, u32) {
    const SHAPE: IdShape = IdShape::Triple;

    fn pack(&self) -> Vec<u8> {
        packing::pack_triple(self.0, self.1, self.2).to_vec()
    }

    fn unpack(payload: &[u8]) -> Result<Self, UnpackError> {
        packing::unpack_triple(payload)
    }
}

/// Produce the token for `ids`
pub fn encode_identifiers<I: Identifiers>(ids: &I, key: &SecretKey) -> String {
    codec::encode(&ids.pack(), key)
}

/// Authenticate `token` and unpack it as `I`
pub fn decode_identifiers<I: Identifiers>(token: &str, key: &SecretKey) -> Result<I, TokenError> {
    let payload = codec::decode(token, key)?;
    Ok(I::unpack(&payload)?)
}

pub fn encode_single(id: u32, key: &SecretKey) -> String {
    encode_identifiers(&id, key)
}

pub fn decode_single(token: &str, key: &SecretKey) -> Result<u32, TokenError> {
    decode_identifiers(token, key)
}

pub fn encode_pair(stream_group_id: u32, profile_id: u32, key: &SecretKey) -> String {
    encode_identifiers(&(stream_group_id, profile_id), key)
}

pub fn decode_pair(token: &str, key: &SecretKey) -> Result<(u32, u32), TokenError> {
    decode_identifiers(token, key)
}

pub fn encode_triple(
    stream_group_id: u32,
    profile_id: u32,
    channel_id: u32,
    key: &SecretKey,
) -> String {
    encode_identifiers(&(stream_group_id, profile_id, channel_id), key)
}

pub fn decode_triple(token: &str, key: &SecretKey) -> Result<(u32, u32, u32), TokenError> {
    decode_identifiers(token, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{DecodeError, TokenErrorKind};

    fn key() -> SecretKey {
        SecretKey::from_hex("000102030405060708090a0b0c0d0e0f").unwrap()
    }

    #[test]
    fn test_triple_round_trip() {
        let k = key();
        let token = encode_triple(7, 3, 42, &k);
        assert_eq!(decode_triple(&token, &k).unwrap(), (7, 3, 42));
    }

    #[test]
    fn test_shapes_do_not_cross() {
        let k = key();
        let single = encode_single(5, &k);

        let err = decode_triple(&single, &k).unwrap_err();
        assert_eq!(err.kind(), TokenErrorKind::WrongLength);

        let triple = encode_triple(1, 2, 3, &k);
        let err = decode_pair(&triple, &k).unwrap_err();
        assert_eq!(
            err,
            TokenError::Unpack(UnpackError::WrongLength {
                expected: 8,
                actual: 12
            })
        );
    }

    #[test]
    fn test_codec_errors_surface() {
        let k = key();
        let err = decode_single("!!!!", &k).unwrap_err();
        assert!(matches!(err, TokenError::Decode(DecodeError::Malformed { .. })));
    }
}
