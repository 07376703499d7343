//! Core types and error handling for Stream Links
//!
//! This module holds the secret key type, the MAC constants and the
//! error taxonomy shared by the codec and the identifier layer.

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{DecodeError, Result, StreamLinksError, TokenError, TokenErrorKind, UnpackError};
pub use types::{SecretKey, DEFAULT_KEY_LEN, MAC_SIZE, MIN_KEY_LEN};
