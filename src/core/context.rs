//! # Connection Context
//!
//! Immutable snapshot of everything that changes how a value is laid out on
//! the wire: the negotiated protocol version and the length limits in force.
//!
//! Codecs only ever borrow a context. The handshake logic that negotiates a
//! version builds a new context instead of mutating the one in use.

use crate::config::{CodecLimits, DEFAULT_PROTOCOL_VERSION};
use crate::error::{ProtocolError, Result};
use crate::versions;

/// Negotiated protocol state passed to every context-aware codec call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionContext {
    protocol_version: i32,
    limits: CodecLimits,
}

impl Default for ConnectionContext {
    fn default() -> Self {
        Self::new(DEFAULT_PROTOCOL_VERSION)
    }
}

impl ConnectionContext {
    /// Context for `protocol_version` with default limits
    ///
    /// Any version is accepted; use [`ConnectionContext::checked`] to restrict
    /// to known releases.
    pub fn new(protocol_version: i32) -> Self {
        Self {
            protocol_version,
            limits: CodecLimits::default(),
        }
    }

    /// Context for a supported protocol version
    ///
    /// # Errors
    /// Returns `ProtocolError::UnsupportedVersion` for unknown versions.
    pub fn checked(protocol_version: i32) -> Result<Self> {
        if versions::is_supported(protocol_version) {
            Ok(Self::new(protocol_version))
        } else {
            Err(ProtocolError::UnsupportedVersion(protocol_version))
        }
    }

    /// Context for a release name such as `"1.12.2"`
    pub fn for_release(name: &str) -> Option<Self> {
        versions::protocol_for_release(name).map(Self::new)
    }

    /// Replaces the codec limits
    pub fn with_limits(mut self, limits: CodecLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn protocol_version(&self) -> i32 {
        self.protocol_version
    }

    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    /// `protocol_version >= other`
    #[inline]
    pub fn protocol_later_eq(&self, other: i32) -> bool {
        self.protocol_version >= other
    }

    /// `protocol_version > other`
    #[inline]
    pub fn protocol_later(&self, other: i32) -> bool {
        self.protocol_version > other
    }

    /// `protocol_version < other`
    #[inline]
    pub fn protocol_earlier(&self, other: i32) -> bool {
        self.protocol_version < other
    }

    /// `protocol_version <= other`
    #[inline]
    pub fn protocol_earlier_eq(&self, other: i32) -> bool {
        self.protocol_version <= other
    }

    /// `start <= protocol_version < end`
    #[inline]
    pub fn protocol_in_range(&self, start: i32, end: i32) -> bool {
        start <= self.protocol_version && self.protocol_version < end
    }
}
