//! # Wire Types
//!
//! One zero-sized codec per protocol data type, all behind the [`Type`]
//! contract.
//!
//! Every codec reads and sends against a [`PacketBuffer`] and a borrowed
//! [`ConnectionContext`]. Codecs whose layout never depends on the protocol
//! version also implement [`ContextFree`]; the one that does ([`Position`])
//! does not, so calling it without a context does not compile.
//!
//! ## Codecs
//! | Codec | Value | Layout |
//! |-------|-------|--------|
//! | [`Boolean`] | `bool` | 1 byte, 0 or 1 |
//! | [`UnsignedByte`] / [`Byte`] | `u8` / `i8` | 1 byte |
//! | [`Short`] / [`UnsignedShort`] | `i16` / `u16` | 2 bytes BE |
//! | [`Integer`] | `i32` | 4 bytes BE |
//! | [`Long`] / [`UnsignedLong`] | `i64` / `u64` | 8 bytes BE |
//! | [`Float`] / [`Double`] | `f32` / `f64` | IEEE-754 BE |
//! | [`VarInt`] / [`VarLong`] | `i32` / `i64` | base-128, up to 5 / 10 bytes |
//! | [`FixedPointInteger`] | `f64` | `i32` scaled by 32 |
//! | [`Angle`] | `f64` degrees | 1 byte, 256 steps per turn |
//! | [`Uuid`] | `String` | 16 raw bytes |
//! | [`StringType`] | `String` | VarInt length + UTF-8 |
//! | [`ShortPrefixedByteArray`] | `Vec<u8>` | u16 length + bytes |
//! | [`VarIntPrefixedByteArray`] | `Vec<u8>` | VarInt length + bytes |
//! | [`TrailingByteArray`] | `Vec<u8>` | rest of the buffer |
//! | [`Position`] | [`BlockPosition`] | packed `u64`, layout by version |
//!
//! ## Usage
//! ```rust
//! use craftwire::core::buffer::PacketBuffer;
//! use craftwire::core::context::ConnectionContext;
//! use craftwire::types::{BlockPosition, ContextFree, Position, Type, VarInt};
//!
//! let ctx = ConnectionContext::new(340);
//! let mut buffer = PacketBuffer::new();
//! VarInt::send(&50000, &mut buffer).unwrap();
//! Position::send_with_context(&BlockPosition::new(758, 0, 691), &mut buffer, &ctx).unwrap();
//!
//! buffer.reset_cursor();
//! assert_eq!(VarInt::read(&mut buffer).unwrap(), 50000);
//! assert_eq!(
//!     Position::read_with_context(&mut buffer, &ctx).unwrap(),
//!     BlockPosition::new(758, 0, 691)
//! );
//! ```

use crate::core::buffer::PacketBuffer;
use crate::core::context::ConnectionContext;
use crate::error::Result;

/// Codec contract implemented by every wire type
pub trait Type {
    /// In-memory value this codec reads and sends
    type Value;

    /// Protocol name of the type, used in errors and logs
    const NAME: &'static str;

    /// Decodes one value at the buffer cursor
    fn read_with_context(
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<Self::Value>;

    /// Appends the encoding of `value` to the buffer
    fn send_with_context(
        value: &Self::Value,
        buffer: &mut PacketBuffer,
        context: &ConnectionContext,
    ) -> Result<()>;
}

/// Codecs whose layout never depends on the connection context
pub trait ContextFree: Type {
    fn read(buffer: &mut PacketBuffer) -> Result<Self::Value>;

    fn send(value: &Self::Value, buffer: &mut PacketBuffer) -> Result<()>;
}

/// Implements [`Type`] for a codec by forwarding to its [`ContextFree`] impl
macro_rules! context_free_type {
    ($codec:ty, $value:ty, $name:literal) => {
        impl $crate::types::Type for $codec {
            type Value = $value;
            const NAME: &'static str = $name;

            #[inline]
            fn read_with_context(
                buffer: &mut $crate::core::buffer::PacketBuffer,
                _context: &$crate::core::context::ConnectionContext,
            ) -> $crate::error::Result<$value> {
                <$codec as $crate::types::ContextFree>::read(buffer)
            }

            #[inline]
            fn send_with_context(
                value: &$value,
                buffer: &mut $crate::core::buffer::PacketBuffer,
                _context: &$crate::core::context::ConnectionContext,
            ) -> $crate::error::Result<()> {
                <$codec as $crate::types::ContextFree>::send(value, buffer)
            }
        }
    };
}

pub mod arrays;
pub mod bounds;
pub mod dynamic;
pub mod fixed_point;
pub mod numeric;
pub mod position;
pub mod string;
pub mod uuid;
pub mod varint;

pub use arrays::{ShortPrefixedByteArray, TrailingByteArray, VarIntPrefixedByteArray};
pub use dynamic::{read_fields, send_fields, TypeKind, Value};
pub use fixed_point::{Angle, FixedPointInteger};
pub use numeric::{
    Boolean, Byte, Double, Float, Integer, Long, Short, UnsignedByte, UnsignedLong, UnsignedShort,
};
pub use position::{BlockPosition, Position, PositionLayout};
pub use string::StringType;
pub use uuid::Uuid;
pub use varint::{VarInt, VarLong};
