//! # Error Types
//!
//! Error handling for the type-codec layer.
//!
//! Every codec operation returns [`Result`], and every failure is synchronous
//! and local to the call that produced it. A failed `send` may already have
//! appended bytes to the buffer; callers discard the buffer rather than
//! assume atomicity.
//!
//! ## Error Categories
//! - **Contract violations**: a context-dependent codec used without a context
//! - **Type mismatches**: a value whose shape does not fit the codec
//! - **Decode failures**: truncated input, malformed VarInts, bad UUIDs, bad UTF-8
//! - **Range errors**: values or lengths outside the codec's domain
//! - **Configuration errors**: malformed or invalid configuration
//! - **I/O errors**: stream failures surfaced through the frame codec
//!
//! Use [`ProtocolError::kind`] to branch on the category without matching
//! every variant.
//!
//! ## Example Usage
//! ```rust
//! use craftwire::core::buffer::PacketBuffer;
//! use craftwire::error::ErrorKind;
//! use craftwire::types::{ContextFree, VarInt};
//!
//! let mut empty = PacketBuffer::new();
//! let err = VarInt::read(&mut empty).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Decode);
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Decode errors
    pub const ERR_VARINT_TOO_BIG: &str = "VarInt is too big";
    pub const ERR_VARLONG_TOO_BIG: &str = "VarLong is too big";

    /// Range errors
    pub const ERR_VARINT_RANGE: &str = "Integer outside the VarInt domain";
    pub const ERR_VARLONG_RANGE: &str = "Integer outside the VarLong domain";
    pub const ERR_NON_FINITE: &str = "Value is not a finite number";
    pub const ERR_FIXED_POINT_RANGE: &str = "Scaled value does not fit a 32-bit integer";
}

/// Coarse category of a [`ProtocolError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Programming error: an operation the codec does not support
    ContractViolation,
    /// The value handed to a codec has the wrong shape
    TypeMismatch,
    /// The input bytes are truncated or malformed
    Decode,
    /// The value is outside the codec's domain
    Range,
    /// Configuration could not be loaded or is invalid
    Config,
    /// The underlying stream failed
    Io,
}

// ProtocolError is the error type for every codec operation
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("Contract violation: {0} requires a connection context")]
    ContextRequired(String),

    #[error("Type mismatch: {codec} expects {expected}, got {found}")]
    TypeMismatch {
        codec: String,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of buffer: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("Malformed variable-length integer: {0}")]
    MalformedVarInt(String),

    #[error("Invalid length prefix: {0}")]
    InvalidLength(i64),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Length {length} exceeds maximum of {max}")]
    LengthExceeded { length: usize, max: usize },

    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(i32),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ProtocolError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProtocolError::ContextRequired(_) => ErrorKind::ContractViolation,
            ProtocolError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            ProtocolError::UnexpectedEof { .. }
            | ProtocolError::MalformedVarInt(_)
            | ProtocolError::InvalidLength(_)
            | ProtocolError::InvalidUuid(_)
            | ProtocolError::InvalidUtf8(_) => ErrorKind::Decode,
            ProtocolError::OutOfRange(_)
            | ProtocolError::LengthExceeded { .. }
            | ProtocolError::UnsupportedVersion(_) => ErrorKind::Range,
            ProtocolError::ConfigError(_) => ErrorKind::Config,
            ProtocolError::Io(_) => ErrorKind::Io,
        }
    }

    /// True for errors caused by the bytes on the wire rather than by the caller
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }
}

// io::Error is neither Clone nor serializable, so only its message is kept
impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        ProtocolError::Io(err.to_string())
    }
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
