//! Fixed-width payload shapes
//!
//! Every identifier is a `u32` written big-endian. Shapes are told apart
//! only by length, so each unpack function checks the exact length before
//! reading anything.

use crate::core::error::UnpackError;

/// Width of one packed identifier
pub const ID_LEN: usize = 4;

/// Payload shapes understood by the identifier layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdShape {
    /// One identifier, e.g. a profile id
    Single,
    /// Stream-group id, profile id
    Pair,
    /// Stream-group id, profile id, channel id
    Triple,
}

impl IdShape {
    /// Number of identifiers in this shape
    pub fn arity(&self) -> usize {
        match self {
            IdShape::Single => 1,
            IdShape::Pair => 2,
            IdShape::Triple => 3,
        }
    }

    /// Payload length in bytes
    pub fn payload_len(&self) -> usize {
        self.arity() * ID_LEN
    }

    pub fn name(&self) -> &'static str {
        match self {
            IdShape::Single => "single",
            IdShape::Pair => "pair",
            IdShape::Triple => "triple",
        }
    }
}

pub fn pack_single(id: u32) -> [u8; 4] {
    id.to_be_bytes()
}

pub fn unpack_single(payload: &[u8]) -> Result<u32, UnpackError> {
    let [id] = read_ids::<1>(payload)?;
    Ok(id)
}

pub fn pack_pair(stream_group_id: u32, profile_id: u32) -> [u8; 8] {
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&stream_group_id.to_be_bytes());
    out[4..].copy_from_slice(&profile_id.to_be_bytes());
    out
}

pub fn unpack_pair(payload: &[u8]) -> Result<(u32, u32), UnpackError> {
    let [stream_group_id, profile_id] = read_ids::<2>(payload)?;
    Ok((stream_group_id, profile_id))
}

/// Pack `(stream_group_id, profile_id, channel_id)` in that order
pub fn pack_triple(stream_group_id: u32, profile_id: u32, channel_id: u32) -> [u8; 12] {
    let mut out = [0u8; 12];
    out[..4].copy_from_slice(&stream_group_id.to_be_bytes());
    out[4..8].copy_from_slice(&profile_id.to_be_bytes());
    out[8..].copy_from_slice(&channel_id.to_be_bytes());
    out
}

/// Inverse of [`pack_triple`]; fields come back in the same order
pub fn unpack_triple(payload: &[u8]) -> Result<(u32, u32, u32), UnpackError> {
    let [stream_group_id, profile_id, channel_id] = read_ids::<3>(payload)?;
    Ok((stream_group_id, profile_id, channel_id))
}

fn read_ids<const N: usize>(payload: &[u8]) -> Result<[u32; N], UnpackError> {
    let expected = N * ID_LEN;
    if payload.len() != expected {
        return Err(UnpackError::WrongLength {
            expected,
            actual: payload.len(),
        });
    }

    let mut ids = [0u32; N];
    for (slot, chunk) in ids.iter_mut().zip(payload.chunks_exact(ID_LEN)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(ids)
}
