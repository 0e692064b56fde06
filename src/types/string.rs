//! # String Codec
//!
//! VarInt byte length followed by UTF-8 bytes.
//!
//! The protocol bounds strings by character count, measured in UTF-16 code
//! units. The limit comes from the context's [`CodecLimits`]; the context-free
//! forms use the default limit of 32767.
//!
//! [`CodecLimits`]: crate::config::CodecLimits

use crate::core::buffer::PacketBuffer;
use crate::core::context::ConnectionContext;
use crate::error::{ProtocolError, Result};
use crate::types::varint::VarInt;
use crate::types::{bounds, ContextFree, Type};

/// Longest UTF-8 encoding of one UTF-16 code unit's worth of text
const MAX_BYTES_PER_UNIT: usize = 4;

/// Length-prefixed UTF-8 string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringType;

impl StringType {
    /// Sends borrowed text under the context's length limit
    pub fn send_str(
        value: &str,
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<()> {
        let max = context.limits().max_string_length;
        bounds::within_limit(Self::NAME, value.encode_utf16().count(), max)?;

        let length: i32 = bounds::narrow(Self::NAME, value.len() as i128)?;
        VarInt::send(&length, buffer)?;
        buffer.write(value.as_bytes());
        Ok(())
    }
}

impl Type for StringType {
    type Value = String;
    const NAME: &'static str = "String";

    fn read_with_context(buffer: &mut PacketBuffer, context: &ConnectionContext) -> Result<String> {
        let max = context.limits().max_string_length;
        let length = bounds::length_prefix(Self::NAME, VarInt::read(buffer)?)?;
        // reject before touching the payload
        bounds::within_limit(
            Self::NAME,
            length,
            max.saturating_mul(MAX_BYTES_PER_UNIT),
        )?;

        let text = std::str::from_utf8(buffer.read(length)?)
            .map_err(|e| ProtocolError::InvalidUtf8(e.to_string()))?;
        bounds::within_limit(Self::NAME, text.encode_utf16().count(), max)?;
        Ok(text.to_owned())
    }

    fn send_with_context(
        value: &String,
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<()> {
        Self::send_str(value, buffer, context)
    }
}

impl ContextFree for StringType {
    fn read(buffer: &mut PacketBuffer) -> Result<String> {
        Self::read_with_context(buffer, &ConnectionContext::default())
    }

    fn send(value: &String, buffer: &mut PacketBuffer) -> Result<()> {
        Self::send_str(value, buffer, &ConnectionContext::default())
    }
}
