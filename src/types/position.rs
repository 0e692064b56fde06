//! # Block Position
//!
//! Integer coordinates packed into one unsigned 64-bit integer. The bit
//! layout changed in protocol 443 (the 1.14 development cycle):
//!
//! ```text
//! before 443:  x (26) | y (12) | z (26)
//! since 443:   x (26) | z (26) | y (12)
//! ```
//!
//! Fields are two's-complement within their width, so x and z span
//! `[-2^25, 2^25)` and y spans `[-2^11, 2^11)`.

use crate::core::buffer::PacketBuffer;
use crate::core::context::ConnectionContext;
use crate::error::Result;
use crate::types::numeric::UnsignedLong;
use crate::types::{bounds, ContextFree, Type};
use serde::{Deserialize, Serialize};

const HORIZONTAL_BITS: u32 = 26;
const VERTICAL_BITS: u32 = 12;
const HORIZONTAL_MASK: u64 = (1 << HORIZONTAL_BITS) - 1;
const VERTICAL_MASK: u64 = (1 << VERTICAL_BITS) - 1;

/// A block coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl From<(i32, i32, i32)> for BlockPosition {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl From<BlockPosition> for (i32, i32, i32) {
    fn from(pos: BlockPosition) -> Self {
        (pos.x, pos.y, pos.z)
    }
}

/// Bit layouts used by the different protocol eras
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionLayout {
    /// `x | y | z`, protocols before 443
    Xyz,
    /// `x | z | y`, protocol 443 and later
    Xzy,
}

impl PositionLayout {
    /// First protocol version using [`PositionLayout::Xzy`]
    pub const XZY_SINCE: i32 = 443;

    /// Layout negotiated by `context`
    pub fn for_context(context: &ConnectionContext) -> Self {
        if context.protocol_later_eq(Self::XZY_SINCE) {
            PositionLayout::Xzy
        } else {
            PositionLayout::Xyz
        }
    }

    /// Packs a position, rejecting fields that do not fit their width
    pub fn pack(self, pos: &BlockPosition) -> Result<u64> {
        let x = bounds::signed_bits(Position::NAME, "x", pos.x, HORIZONTAL_BITS)?;
        let y = bounds::signed_bits(Position::NAME, "y", pos.y, VERTICAL_BITS)?;
        let z = bounds::signed_bits(Position::NAME, "z", pos.z, HORIZONTAL_BITS)?;
        let (x, y, z) = (
            field(x, HORIZONTAL_MASK),
            field(y, VERTICAL_MASK),
            field(z, HORIZONTAL_MASK),
        );

        Ok(match self {
            PositionLayout::Xyz => (x << 38) | (y << 26) | z,
            PositionLayout::Xzy => (x << 38) | (z << 12) | y,
        })
    }

    pub fn unpack(self, raw: u64) -> BlockPosition {
        let x = bounds::sign_extend(raw >> 38, HORIZONTAL_BITS);
        let (y, z) = match self {
            PositionLayout::Xyz => (
                bounds::sign_extend((raw >> 26) & VERTICAL_MASK, VERTICAL_BITS),
                bounds::sign_extend(raw & HORIZONTAL_MASK, HORIZONTAL_BITS),
            ),
            PositionLayout::Xzy => (
                bounds::sign_extend(raw & VERTICAL_MASK, VERTICAL_BITS),
                bounds::sign_extend((raw >> 12) & HORIZONTAL_MASK, HORIZONTAL_BITS),
            ),
        };
        BlockPosition { x, y, z }
    }
}

#[inline]
fn field(value: i32, mask: u64) -> u64 {
    (i64::from(value) as u64) & mask
}

/// Version-dependent packed block position
///
/// Only the context-aware operations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position;

impl Type for Position {
    type Value = BlockPosition;
    const NAME: &'static str = "Position";

    fn read_with_context(
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<BlockPosition> {
        let raw = UnsignedLong::read(buffer)?;
        Ok(PositionLayout::for_context(context).unpack(raw))
    }

    fn send_with_context(
        value: &BlockPosition,
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<()> {
        let raw = PositionLayout::for_context(context).pack(value)?;
        UnsignedLong::send(&raw, buffer)
    }
}
