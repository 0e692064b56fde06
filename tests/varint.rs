//! VarInt and VarLong behavior at the edges of their domains

#![allow(clippy::unwrap_used)]

use craftwire::core::buffer::PacketBuffer;
use craftwire::error::{ErrorKind, ProtocolError};
use craftwire::types::{ContextFree, VarInt, VarLong};

#[test]
fn test_size() {
    assert_eq!(VarInt::size(2).unwrap(), 1);
    assert_eq!(VarInt::size(1250).unwrap(), 2);
    assert_eq!(VarInt::size(i32::MAX).unwrap(), 5);
    assert_eq!(VarInt::size(-1).unwrap(), 5);
    assert_eq!(VarLong::size(-1i64).unwrap(), 10);
}

#[test]
fn test_size_outside_domain() {
    let err = VarInt::size(1i128 << 90).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(VarInt::size(i64::from(i32::MAX) + 1).is_err());
    assert!(VarLong::size(1i128 << 64).is_err());
}

#[test]
fn test_wide_value_rejected_on_read() {
    let mut buffer = PacketBuffer::new();
    VarLong::send(&(1i64 << 49), &mut buffer).unwrap();
    buffer.reset_cursor();
    assert!(matches!(
        VarInt::read(&mut buffer),
        Err(ProtocolError::MalformedVarInt(_))
    ));
}

#[test]
fn test_roundtrip_50000() {
    let mut buffer = PacketBuffer::new();
    VarInt::send(&50000, &mut buffer).unwrap();
    buffer.reset_cursor();
    assert_eq!(VarInt::read(&mut buffer).unwrap(), 50000);
}

#[test]
fn test_size_agrees_with_send() {
    for value in [0, 1, 127, 128, 16383, 16384, 2097151, 2097152, i32::MAX, i32::MIN, -1] {
        let mut buffer = PacketBuffer::new();
        VarInt::send(&value, &mut buffer).unwrap();
        assert_eq!(buffer.len(), VarInt::size(value).unwrap(), "{value}");
    }
}

#[test]
fn test_negative_values_use_full_width() {
    let mut buffer = PacketBuffer::new();
    VarInt::send(&i32::MIN, &mut buffer).unwrap();
    assert_eq!(buffer.as_slice(), &[0x80, 0x80, 0x80, 0x80, 0x08]);

    buffer.reset_cursor();
    assert_eq!(VarInt::read(&mut buffer).unwrap(), i32::MIN);
}

#[test]
fn test_varlong_extremes() {
    for value in [i64::MIN, i64::MAX, 0, -1] {
        let mut buffer = PacketBuffer::new();
        VarLong::send(&value, &mut buffer).unwrap();
        buffer.reset_cursor();
        assert_eq!(VarLong::read(&mut buffer).unwrap(), value);
    }
}

#[test]
fn test_truncated_varint_is_eof() {
    let mut buffer = PacketBuffer::from(vec![0x80, 0x80]);
    assert!(matches!(
        VarInt::read(&mut buffer),
        Err(ProtocolError::UnexpectedEof { .. })
    ));
}
