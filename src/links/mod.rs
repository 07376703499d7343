//! Caller-side link handling
//!
//! The codec only proves a token was minted with our key. Whether the
//! stream group it names still exists is up to storage, which is reached
//! through the [`StreamGroupResolver`] capability. A lookup miss is reported
//! as [`StreamLinksError::NotFound`], never as a token failure.
//!
//! This is also the only layer that logs token rejections: integrity
//! failures are evidence of tampering or a stale key and go out at `warn`,
//! malformed input is just noise and goes out at `debug`.

use crate::core::error::{Result, StreamLinksError, TokenErrorKind};
use crate::core::types::SecretKey;
use crate::ids::{decode_identifiers, Identifiers, StreamLink};
use tracing::{debug, trace, warn};

/// Path prefix for stream URLs
pub const STREAM_PATH: &str = "api/videostreams/stream";

/// Looks up a stream group by id
pub trait StreamGroupResolver {
    type Entity;

    fn resolve(&self, stream_group_id: u32) -> Option<Self::Entity>;
}

impl<F, E> StreamGroupResolver for F
where
    F: Fn(u32) -> Option<E>,
{
    type Entity = E;

    fn resolve(&self, stream_group_id: u32) -> Option<E> {
        self(stream_group_id)
    }
}

/// Decode an inbound token, logging rejections by kind
pub fn accept_token<I: Identifiers>(token: &str, key: &SecretKey) -> Result<I> {
    decode_identifiers::<I>(token, key).map_err(|err| {
        match err.kind() {
            TokenErrorKind::IntegrityFailure => warn!(
                shape = I::SHAPE.name(),
                token_len = token.len(),
                "Rejected token with invalid MAC"
            ),
            kind => debug!(
                shape = I::SHAPE.name(),
                token_len = token.len(),
                kind = kind.as_str(),
                error = %err,
                "Rejected token"
            ),
        }
        StreamLinksError::Token(err)
    })
}

/// Decode a stream token and resolve its stream group
pub fn resolve_stream_link<R: StreamGroupResolver>(
    token: &str,
    key: &SecretKey,
    resolver: &R,
) -> Result<(R::Entity, StreamLink)> {
    let link: StreamLink = accept_token(token, key)?;

    let group = resolver.resolve(link.stream_group_id).ok_or_else(|| {
        debug!(stream_group_id = link.stream_group_id, "Stream group not found");
        StreamLinksError::not_found("Stream group", link.stream_group_id)
    })?;

    trace!(%link, "Resolved stream link");
    Ok((group, link))
}

/// Shareable URL for a stream:
/// `{base_url}/api/videostreams/stream/{token}/{clean_name}`
pub fn stream_url(base_url: &str, link: &StreamLink, key: &SecretKey, name: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        base_url.trim_end_matches('/'),
        STREAM_PATH,
        link.encode(key),
        clean_file_name(name)
    )
}

/// Reduce a channel name to something safe for the last path segment.
///
/// ASCII letters, digits, `-`, `_` and `.` are kept; each run of whitespace
/// becomes a single `_`; everything else is dropped. Leading and trailing
/// whitespace is ignored.
pub fn clean_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_gap = false;

    for c in name.trim().chars() {
        if c.is_whitespace() {
            pending_gap = true;
            continue;
        }
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            if pending_gap && !out.is_empty() {
                out.push('_');
            }
            pending_gap = false;
            out.push(c);
        }
    }

    out
}
