//! # Variable-Length Integers
//!
//! Base-128 encoding, least significant group first. Each byte carries seven
//! value bits; the high bit is set on every byte except the last.
//!
//! Negative values are encoded as their two's-complement bit pattern, so a
//! negative VarInt always takes 5 bytes and a negative VarLong 10.
//!
//! ```text
//! 300 -> 0xAC 0x02
//!  -1 -> 0xFF 0xFF 0xFF 0xFF 0x0F
//! ```

use crate::core::buffer::PacketBuffer;
use crate::error::{constants, ProtocolError, Result};
use crate::types::{bounds, ContextFree};
use tracing::debug;

const SEGMENT_BITS: u8 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

/// Reads up to `max_bytes` groups of a `value_bits`-wide integer
fn read_groups(
    buffer: &mut PacketBuffer,
    max_bytes: usize,
    value_bits: u32,
    too_big: &str,
) -> Result<u64> {
    // value bits the final group may still carry
    let last_bits = value_bits - 7 * (max_bytes as u32 - 1);
    let last_overflow = SEGMENT_BITS & !((1u8 << last_bits) - 1);

    let mut result = 0u64;
    for i in 0..max_bytes {
        let [byte] = buffer.read_array::<1>()?;
        if i == max_bytes - 1 && byte & (CONTINUE_BIT | last_overflow) != 0 {
            break;
        }
        result |= u64::from(byte & SEGMENT_BITS) << (7 * i);
        if byte & CONTINUE_BIT == 0 {
            return Ok(result);
        }
    }

    debug!(max_bytes, "unterminated or oversized variable-length integer");
    Err(ProtocolError::MalformedVarInt(too_big.to_string()))
}

fn write_groups(mut bits: u64, buffer: &mut PacketBuffer) {
    let mut out = [0u8; VarLong::MAX_BYTES];
    let mut n = 0;
    loop {
        let group = (bits as u8) & SEGMENT_BITS;
        bits >>= 7;
        if bits == 0 {
            out[n] = group;
            n += 1;
            break;
        }
        out[n] = group | CONTINUE_BIT;
        n += 1;
    }
    buffer.write(&out[..n]);
}

#[inline]
fn group_count(bits: u64) -> usize {
    let significant = 64 - bits.leading_zeros() as usize;
    significant.div_ceil(7).max(1)
}

/// Variable-length 32-bit signed integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VarInt;

impl VarInt {
    /// Longest valid encoding in bytes
    pub const MAX_BYTES: usize = 5;

    /// Number of bytes `send` would write for `value`
    ///
    /// # Errors
    /// Returns `ProtocolError::OutOfRange` when `value` is outside the 32-bit
    /// signed domain.
    pub fn size(value: impl Into<i128>) -> Result<usize> {
        let value = value.into();
        let value: i32 = bounds::narrow("VarInt", value).map_err(|_| {
            ProtocolError::OutOfRange(format!("{}: {value}", constants::ERR_VARINT_RANGE))
        })?;
        Ok(group_count(u64::from(value as u32)))
    }
}

impl ContextFree for VarInt {
    #[inline]
    fn read(buffer: &mut PacketBuffer) -> Result<i32> {
        let bits = read_groups(buffer, Self::MAX_BYTES, 32, constants::ERR_VARINT_TOO_BIG)?;
        Ok(bits as u32 as i32)
    }

    #[inline]
    fn send(value: &i32, buffer: &mut PacketBuffer) -> Result<()> {
        write_groups(u64::from(*value as u32), buffer);
        Ok(())
    }
}

context_free_type!(VarInt, i32, "VarInt");

/// Variable-length 64-bit signed integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VarLong;

impl VarLong {
    /// Longest valid encoding in bytes
    pub const MAX_BYTES: usize = 10;

    /// Number of bytes `send` would write for `value`
    ///
    /// # Errors
    /// Returns `ProtocolError::OutOfRange` when `value` is outside the 64-bit
    /// signed domain.
    pub fn size(value: impl Into<i128>) -> Result<usize> {
        let value = value.into();
        let value: i64 = bounds::narrow("VarLong", value).map_err(|_| {
            ProtocolError::OutOfRange(format!("{}: {value}", constants::ERR_VARLONG_RANGE))
        })?;
        Ok(group_count(value as u64))
    }
}

impl ContextFree for VarLong {
    #[inline]
    fn read(buffer: &mut PacketBuffer) -> Result<i64> {
        let bits = read_groups(buffer, Self::MAX_BYTES, 64, constants::ERR_VARLONG_TOO_BIG)?;
        Ok(bits as i64)
    }

    #[inline]
    fn send(value: &i64, buffer: &mut PacketBuffer) -> Result<()> {
        write_groups(*value as u64, buffer);
        Ok(())
    }
}

context_free_type!(VarLong, i64, "VarLong");
