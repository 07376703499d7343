//! Error types for Stream Links
//!
//! Token failures are split by layer: [`DecodeError`] comes from the keyed
//! codec, [`UnpackError`] from identifier unpacking, and [`TokenError`]
//! carries either one tagged by kind. [`StreamLinksError`] is the crate-wide
//! error used by configuration, link resolution and the CLI.

use std::fmt;
use thiserror::Error;

/// Failure to authenticate a token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not valid URL-safe Base64, or too short to hold a MAC
    #[error("Malformed token: {reason}")]
    Malformed { reason: String },

    /// Well-formed, but the MAC does not match the payload
    #[error("Token integrity check failed")]
    IntegrityFailure,
}

impl DecodeError {
    /// Create a new malformed token error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Failure to unpack an authenticated payload into identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnpackError {
    #[error("Wrong payload length: expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Error returned by the identifier token entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Unpack(#[from] UnpackError),
}

/// Flat classification of a [`TokenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenErrorKind {
    Malformed,
    IntegrityFailure,
    WrongLength,
}

impl TokenError {
    /// The kind of failure, independent of which layer produced it
    pub fn kind(&self) -> TokenErrorKind {
        match self {
            TokenError::Decode(DecodeError::Malformed { .. }) => TokenErrorKind::Malformed,
            TokenError::Decode(DecodeError::IntegrityFailure) => TokenErrorKind::IntegrityFailure,
            TokenError::Unpack(UnpackError::WrongLength { .. }) => TokenErrorKind::WrongLength,
        }
    }
}

impl TokenErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenErrorKind::Malformed => "malformed",
            TokenErrorKind::IntegrityFailure => "integrity_failure",
            TokenErrorKind::WrongLength => "wrong_length",
        }
    }
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for Stream Links operations
#[derive(Error, Debug)]
pub enum StreamLinksError {
    /// Token errors
    #[error("Invalid token: {0}")]
    Token(#[from] TokenError),

    /// Key errors
    #[error("Invalid secret key: {reason}")]
    InvalidSecretKey { reason: String },

    #[error("No secret key configured")]
    SecretKeyMissing,

    /// Resolution errors
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u32 },

    /// Input errors
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Hex encoding/decoding errors
    #[error("Hex encoding error: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl StreamLinksError {
    /// Create a new invalid secret key error
    pub fn invalid_secret_key(reason: impl Into<String>) -> Self {
        Self::InvalidSecretKey {
            reason: reason.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(kind: &'static str, id: u32) -> Self {
        Self::NotFound { kind, id }
    }

    /// Create a new invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Token error kind, if this error came from token decoding
    pub fn token_kind(&self) -> Option<TokenErrorKind> {
        match self {
            StreamLinksError::Token(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<DecodeError> for StreamLinksError {
    fn from(err: DecodeError) -> Self {
        StreamLinksError::Token(err.into())
    }
}

impl From<UnpackError> for StreamLinksError {
    fn from(err: UnpackError) -> Self {
        StreamLinksError::Token(err.into())
    }
}

/// Result type alias for Stream Links operations
pub type Result<T> = std::result::Result<T, StreamLinksError>;
