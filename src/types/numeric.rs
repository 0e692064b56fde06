//! Fixed-width numeric codecs in network byte order.

use crate::core::buffer::PacketBuffer;
use crate::error::Result;
use crate::types::ContextFree;

macro_rules! fixed_width {
    ($(#[$meta:meta])* $codec:ident, $value:ty, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $codec;

        impl $codec {
            /// Encoded size in bytes
            pub const SIZE: usize = std::mem::size_of::<$value>();
        }

        impl ContextFree for $codec {
            #[inline]
            fn read(buffer: &mut PacketBuffer) -> Result<$value> {
                Ok(<$value>::from_be_bytes(buffer.read_array()?))
            }

            #[inline]
            fn send(value: &$value, buffer: &mut PacketBuffer) -> Result<()> {
                buffer.write(&value.to_be_bytes());
                Ok(())
            }
        }

        context_free_type!($codec, $value, $name);
    };
}

/// Single byte, 0 for false and 1 for true
///
/// Any nonzero byte reads as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Boolean;

impl Boolean {
    pub const SIZE: usize = 1;
}

impl ContextFree for Boolean {
    #[inline]
    fn read(buffer: &mut PacketBuffer) -> Result<bool> {
        let [byte] = buffer.read_array::<1>()?;
        Ok(byte != 0)
    }

    #[inline]
    fn send(value: &bool, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write(&[u8::from(*value)]);
        Ok(())
    }
}

context_free_type!(Boolean, bool, "Boolean");

fixed_width!(
    /// Unsigned 8-bit integer
    UnsignedByte, u8, "UnsignedByte"
);
fixed_width!(
    /// Signed 8-bit integer
    Byte, i8, "Byte"
);
fixed_width!(
    /// Signed 16-bit integer
    Short, i16, "Short"
);
fixed_width!(
    /// Unsigned 16-bit integer
    UnsignedShort, u16, "UnsignedShort"
);
fixed_width!(
    /// Signed 32-bit integer
    Integer, i32, "Integer"
);
fixed_width!(
    /// Signed 64-bit integer
    Long, i64, "Long"
);
fixed_width!(
    /// Unsigned 64-bit integer
    UnsignedLong, u64, "UnsignedLong"
);
fixed_width!(
    /// IEEE-754 single precision
    Float, f32, "Float"
);
fixed_width!(
    /// IEEE-754 double precision
    Double, f64, "Double"
);

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut buffer = PacketBuffer::new();
        Short::send(&-340, &mut buffer).unwrap();
        Integer::send(&1000, &mut buffer).unwrap();
        UnsignedShort::send(&400, &mut buffer).unwrap();
        assert_eq!(
            buffer.as_slice(),
            &[0xFE, 0xAC, 0x00, 0x00, 0x03, 0xE8, 0x01, 0x90]
        );
    }

    #[test]
    fn test_boolean_bytes() {
        let mut buffer = PacketBuffer::new();
        Boolean::send(&true, &mut buffer).unwrap();
        Boolean::send(&false, &mut buffer).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 0]);

        let mut lenient = PacketBuffer::from(vec![0x7F]);
        assert!(Boolean::read(&mut lenient).unwrap());
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Byte::SIZE, 1);
        assert_eq!(Short::SIZE, 2);
        assert_eq!(Float::SIZE, 4);
        assert_eq!(UnsignedLong::SIZE, 8);
    }

    #[test]
    fn test_truncated_long() {
        let mut buffer = PacketBuffer::from(vec![0, 0, 0, 1]);
        assert!(Long::read(&mut buffer).is_err());
        assert_eq!(buffer.position(), 0);
    }
}
