//! Identifier packing layer
//!
//! Packs stream-group, profile and channel identifiers into fixed-width
//! payloads and drives the keyed codec to turn them into URL tokens.

pub mod packing;
pub mod token;

use crate::core::error::TokenError;
use crate::core::types::SecretKey;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use packing::{
    pack_pair, pack_single, pack_triple, unpack_pair, unpack_single, unpack_triple, IdShape,
};
pub use token::{
    decode_identifiers, decode_pair, decode_single, decode_triple, encode_identifiers,
    encode_pair, encode_single, encode_triple, Identifiers,
};

/// The identifiers behind a shareable stream URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamLink {
    pub stream_group_id: u32,
    pub profile_id: u32,
    pub channel_id: u32,
}

impl StreamLink {
    pub fn new(stream_group_id: u32, profile_id: u32, channel_id: u32) -> Self {
        Self {
            stream_group_id,
            profile_id,
            channel_id,
        }
    }

    /// Token for this link
    pub fn encode(&self, key: &SecretKey) -> String {
        encode_identifiers(self, key)
    }

    /// Recover a link from its token
    pub fn decode(token: &str, key: &SecretKey) -> Result<Self, TokenError> {
        decode_identifiers(token, key)
    }
}

impl Identifiers for StreamLink {
    const SHAPE: IdShape = IdShape::Triple;

    fn pack(&self) -> Vec<u8> {
        pack_triple(self.stream_group_id, self.profile_id, self.channel_id).to_vec()
    }

    fn unpack(payload: &[u8]) -> Result<Self, crate::core::error::UnpackError> {
        let (stream_group_id, profile_id, channel_id) = unpack_triple(payload)?;
        Ok(Self::new(stream_group_id, profile_id, channel_id))
    }
}

impl From<(u32, u32, u32)> for StreamLink {
    fn from((stream_group_id, profile_id, channel_id): (u32, u32, u32)) -> Self {
        Self::new(stream_group_id, profile_id, channel_id)
    }
}

impl fmt::Display for StreamLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stream_group={} profile={} channel={}",
            self.stream_group_id, self.profile_id, self.channel_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_link_matches_triple() {
        let key = SecretKey::from_hex("ffeeddccbbaa99887766554433221100").unwrap();
        let link = StreamLink::new(7, 3, 42);

        assert_eq!(link.encode(&key), encode_triple(7, 3, 42, &key));
        assert_eq!(StreamLink::decode(&link.encode(&key), &key).unwrap(), link);
    }
}
