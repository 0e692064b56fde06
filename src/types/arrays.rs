//! Raw byte-array codecs: short-prefixed, VarInt-prefixed and trailing.

use crate::config::MAX_SHORT_ARRAY_LENGTH;
use crate::core::buffer::PacketBuffer;
use crate::core::context::ConnectionContext;
use crate::error::Result;
use crate::types::numeric::UnsignedShort;
use crate::types::varint::VarInt;
use crate::types::{bounds, ContextFree, Type};

/// `UnsignedShort` byte count followed by the bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortPrefixedByteArray;

impl ShortPrefixedByteArray {
    pub fn send_bytes(value: &[u8], buffer: &mut PacketBuffer) -> Result<()> {
        let length = bounds::within_limit(Self::NAME, value.len(), MAX_SHORT_ARRAY_LENGTH)?;
        UnsignedShort::send(&(length as u16), buffer)?;
        buffer.write(value);
        Ok(())
    }
}

impl ContextFree for ShortPrefixedByteArray {
    fn read(buffer: &mut PacketBuffer) -> Result<Vec<u8>> {
        let length = UnsignedShort::read(buffer)?;
        Ok(buffer.read(usize::from(length))?.to_vec())
    }

    fn send(value: &Vec<u8>, buffer: &mut PacketBuffer) -> Result<()> {
        Self::send_bytes(value, buffer)
    }
}

context_free_type!(ShortPrefixedByteArray, Vec<u8>, "ShortPrefixedByteArray");

/// `VarInt` byte count followed by the bytes
///
/// Bounded by the context's `max_byte_array_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VarIntPrefixedByteArray;

impl VarIntPrefixedByteArray {
    pub fn send_bytes(
        value: &[u8],
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<()> {
        let max = context.limits().max_byte_array_length;
        let length = bounds::within_limit(Self::NAME, value.len(), max)?;
        VarInt::send(&bounds::narrow::<i32>(Self::NAME, length as i128)?, buffer)?;
        buffer.write(value);
        Ok(())
    }
}

impl Type for VarIntPrefixedByteArray {
    type Value = Vec<u8>;
    const NAME: &'static str = "VarIntPrefixedByteArray";

    fn read_with_context(
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<Vec<u8>> {
        let length = bounds::length_prefix(Self::NAME, VarInt::read(buffer)?)?;
        bounds::within_limit(Self::NAME, length, context.limits().max_byte_array_length)?;
        Ok(buffer.read(length)?.to_vec())
    }

    fn send_with_context(
        value: &Vec<u8>,
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<()> {
        Self::send_bytes(value, buffer, context)
    }
}

impl ContextFree for VarIntPrefixedByteArray {
    fn read(buffer: &mut PacketBuffer) -> Result<Vec<u8>> {
        Self::read_with_context(buffer, &ConnectionContext::default())
    }

    fn send(value: &Vec<u8>, buffer: &mut PacketBuffer) -> Result<()> {
        Self::send_bytes(value, buffer, &ConnectionContext::default())
    }
}

/// Unprefixed bytes running to the end of the buffer
///
/// Only meaningful as the last field of a buffer that holds exactly one packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrailingByteArray;

impl ContextFree for TrailingByteArray {
    fn read(buffer: &mut PacketBuffer) -> Result<Vec<u8>> {
        Ok(buffer.read_remaining().to_vec())
    }

    fn send(value: &Vec<u8>, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write(value);
        Ok(())
    }
}

context_free_type!(TrailingByteArray, Vec<u8>, "TrailingByteArray");
