//! Round-trip tests for every codec across every supported protocol version

#![allow(clippy::expect_used, clippy::unwrap_used)]

use craftwire::core::buffer::PacketBuffer;
use craftwire::core::context::ConnectionContext;
use craftwire::types::*;
use craftwire::versions::{RELEASE_PROTOCOL_VERSIONS, SUPPORTED_PROTOCOL_VERSIONS};

/// Every supported protocol version, releases first
fn test_versions() -> Vec<i32> {
    let mut versions = RELEASE_PROTOCOL_VERSIONS.to_vec();
    for &protocol in SUPPORTED_PROTOCOL_VERSIONS {
        if !versions.contains(&protocol) {
            versions.push(protocol);
        }
    }
    versions
}

#[test]
fn test_every_supported_version_is_exercised() {
    let versions = test_versions();
    assert_eq!(versions.len(), SUPPORTED_PROTOCOL_VERSIONS.len());
    for protocol in [107, 315, 393, 477, 573, 735, 753] {
        assert!(versions.contains(&protocol), "{protocol} not exercised");
    }
}

fn roundtrip<T: Type>(value: &T::Value, ctx: &ConnectionContext) -> T::Value {
    let mut buffer = PacketBuffer::new();
    T::send_with_context(value, &mut buffer, ctx)
        .unwrap_or_else(|e| panic!("{} send failed at {}: {e}", T::NAME, ctx.protocol_version()));
    buffer.reset_cursor();
    T::read_with_context(&mut buffer, ctx)
        .unwrap_or_else(|e| panic!("{} read failed at {}: {e}", T::NAME, ctx.protocol_version()))
}

fn assert_exact<T>(cases: &[T::Value], ctx: &ConnectionContext)
where
    T: Type,
    T::Value: PartialEq + std::fmt::Debug,
{
    for case in cases {
        assert_eq!(
            &roundtrip::<T>(case, ctx),
            case,
            "{} at protocol {}",
            T::NAME,
            ctx.protocol_version()
        );
    }
}

#[test]
fn test_integer_codecs_roundtrip() {
    for version in test_versions() {
        let ctx = ConnectionContext::new(version);
        assert_exact::<Boolean>(&[true, false], &ctx);
        assert_exact::<UnsignedByte>(&[0, 125], &ctx);
        assert_exact::<Byte>(&[-22, 22], &ctx);
        assert_exact::<Short>(&[-340, 22, 350], &ctx);
        assert_exact::<UnsignedShort>(&[0, 400], &ctx);
        assert_exact::<UnsignedLong>(&[0, 400], &ctx);
        assert_exact::<Integer>(&[-1000, 1000], &ctx);
        assert_exact::<VarInt>(&[1, 250, 50000, 10000000], &ctx);
        assert_exact::<Long>(&[50000000], &ctx);
    }
}

#[test]
fn test_real_codecs_roundtrip() {
    for version in test_versions() {
        let ctx = ConnectionContext::new(version);

        let float = roundtrip::<Float>(&21.000301, &ctx);
        assert!((f64::from(float) - 21.000301).abs() < 0.0005);

        let double = roundtrip::<Double>(&36.004002, &ctx);
        assert!((double - 36.004002).abs() < 0.0005);

        for value in [-13098.3435, -0.83, 1000.0] {
            let read = roundtrip::<FixedPointInteger>(&value, &ctx);
            assert!(
                (read - value).abs() <= 1.0 / 32.0,
                "fixed point {value} came back as {read}"
            );
        }
    }
}

#[test]
fn test_angle_wraps_into_one_turn() {
    let cases = [
        (0.0, 0.0),
        (1.0 / 256.0, 1.0 / 256.0),
        (255.0 / 256.0, 255.0 / 256.0),
        (360.0, 0.0),
        (-90.0, 270.0),
        (-1890.0, 270.0),
        (1890.0, 90.0),
    ];

    for version in test_versions() {
        let ctx = ConnectionContext::new(version);
        for (sent, expected) in cases {
            let read = roundtrip::<Angle>(&sent, &ctx);
            assert!((0.0..360.0).contains(&read));
            assert!(
                (read - expected).abs() <= 360.0 / 256.0,
                "angle {sent} came back as {read}, expected about {expected}"
            );
        }
    }
}

#[test]
fn test_byte_arrays_and_text_roundtrip() {
    for version in test_versions() {
        let ctx = ConnectionContext::new(version);
        assert_exact::<ShortPrefixedByteArray>(&[vec![0u8; 245]], &ctx);
        assert_exact::<VarIntPrefixedByteArray>(&[vec![0u8; 1234]], &ctx);
        assert_exact::<TrailingByteArray>(&[b"Q^jO<5*|+o  LGc(".to_vec()], &ctx);
        assert_exact::<Uuid>(&["12345678-1234-5678-1234-567812345678".to_string()], &ctx);
        assert_exact::<StringType>(&["hello world".to_string()], &ctx);
    }
}

#[test]
fn test_position_roundtrip_both_layouts() {
    let cases = [BlockPosition::new(758, 0, 691), BlockPosition::new(-500, -12, -684)];
    for version in test_versions() {
        let ctx = ConnectionContext::new(version);
        assert_exact::<Position>(&cases, &ctx);
    }
}

#[test]
fn test_position_layout_changes_at_443() {
    let pos = BlockPosition::new(758, 0, 691);

    let mut old = PacketBuffer::new();
    Position::send_with_context(&pos, &mut old, &ConnectionContext::new(442)).unwrap();
    let mut new = PacketBuffer::new();
    Position::send_with_context(&pos, &mut new, &ConnectionContext::new(443)).unwrap();
    assert_ne!(old.as_slice(), new.as_slice());

    // x in the top 26 bits under both layouts
    assert_eq!(old.as_slice()[..3], new.as_slice()[..3]);

    // y = 0, so the old layout leaves bits 26..38 clear
    let raw = u64::from_be_bytes(old.as_slice().try_into().unwrap());
    assert_eq!((raw >> 26) & 0xFFF, 0);
    assert_eq!(raw & 0x3FF_FFFF, 691);
}

#[test]
fn test_fields_share_one_buffer() {
    let ctx = ConnectionContext::new(340);
    let mut buffer = PacketBuffer::new();

    VarInt::send(&0x10, &mut buffer).unwrap();
    StringType::send_with_context(&"Notch".to_string(), &mut buffer, &ctx).unwrap();
    Position::send_with_context(&BlockPosition::new(1, 2, 3), &mut buffer, &ctx).unwrap();
    Boolean::send(&true, &mut buffer).unwrap();
    TrailingByteArray::send(&vec![9, 9], &mut buffer).unwrap();

    buffer.reset_cursor();
    assert_eq!(VarInt::read(&mut buffer).unwrap(), 0x10);
    assert_eq!(StringType::read_with_context(&mut buffer, &ctx).unwrap(), "Notch");
    assert_eq!(
        Position::read_with_context(&mut buffer, &ctx).unwrap(),
        BlockPosition::new(1, 2, 3)
    );
    assert!(Boolean::read(&mut buffer).unwrap());
    assert_eq!(TrailingByteArray::read(&mut buffer).unwrap(), vec![9, 9]);
    assert_eq!(buffer.remaining(), 0);
}

#[test]
fn test_dynamic_layer_matches_static_codecs() {
    let schema = [
        TypeKind::VarInt,
        TypeKind::Short,
        TypeKind::Double,
        TypeKind::Uuid,
        TypeKind::Position,
        TypeKind::VarIntPrefixedByteArray,
    ];
    let values = vec![
        Value::Int(50000),
        Value::Int(-340),
        Value::Float(36.5),
        Value::Text("12345678-1234-5678-1234-567812345678".into()),
        Value::Position(BlockPosition::new(-500, -12, -684)),
        Value::Bytes(vec![1, 2, 3]),
    ];

    for version in test_versions() {
        let ctx = ConnectionContext::new(version);

        let mut dynamic = PacketBuffer::new();
        send_fields(&schema, &values, &mut dynamic, Some(&ctx)).unwrap();

        let mut fixed = PacketBuffer::new();
        VarInt::send(&50000, &mut fixed).unwrap();
        Short::send(&-340, &mut fixed).unwrap();
        Double::send(&36.5, &mut fixed).unwrap();
        Uuid::send_str("12345678-1234-5678-1234-567812345678", &mut fixed).unwrap();
        Position::send_with_context(&BlockPosition::new(-500, -12, -684), &mut fixed, &ctx)
            .unwrap();
        VarIntPrefixedByteArray::send(&vec![1, 2, 3], &mut fixed).unwrap();

        assert_eq!(dynamic.as_slice(), fixed.as_slice(), "protocol {version}");

        dynamic.reset_cursor();
        assert_eq!(read_fields(&schema, &mut dynamic, Some(&ctx)).unwrap(), values);
    }
}
