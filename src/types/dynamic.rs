//! # Dynamic Dispatch
//!
//! Schema-driven access to the codec set. A packet schema is a list of
//! [`TypeKind`] tags; [`read_fields`] and [`send_fields`] walk it in field
//! order, converting between the wire and loosely typed [`Value`]s.
//!
//! Integers travel as `i128` and are range-checked against the codec's own
//! domain before encoding, so a value that does not fit is reported rather
//! than truncated.
//!
//! ```rust
//! use craftwire::core::buffer::PacketBuffer;
//! use craftwire::core::context::ConnectionContext;
//! use craftwire::types::{read_fields, send_fields, TypeKind, Value};
//!
//! let ctx = ConnectionContext::new(754);
//! let schema = [TypeKind::VarInt, TypeKind::String, TypeKind::UnsignedShort];
//! let values = vec![Value::Int(754), Value::Text("localhost".into()), Value::Int(25565)];
//!
//! let mut buffer = PacketBuffer::new();
//! send_fields(&schema, &values, &mut buffer, Some(&ctx)).unwrap();
//! buffer.reset_cursor();
//! assert_eq!(read_fields(&schema, &mut buffer, Some(&ctx)).unwrap(), values);
//! ```

use crate::core::buffer::PacketBuffer;
use crate::core::context::ConnectionContext;
use crate::error::{ProtocolError, Result};
use crate::types::*;

/// Loosely typed value exchanged with the dynamic layer
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Position(BlockPosition),
}

impl Value {
    /// Short name of the value's shape, for error messages
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "real",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Position(_) => "position",
        }
    }
}

/// Tag for each codec in the closed codec set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Boolean,
    UnsignedByte,
    Byte,
    Short,
    UnsignedShort,
    Integer,
    Long,
    UnsignedLong,
    VarInt,
    VarLong,
    Float,
    Double,
    FixedPointInteger,
    Angle,
    Uuid,
    String,
    ShortPrefixedByteArray,
    VarIntPrefixedByteArray,
    TrailingByteArray,
    Position,
}

impl TypeKind {
    /// Every codec tag
    pub const ALL: [TypeKind; 20] = [
        TypeKind::Boolean,
        TypeKind::UnsignedByte,
        TypeKind::Byte,
        TypeKind::Short,
        TypeKind::UnsignedShort,
        TypeKind::Integer,
        TypeKind::Long,
        TypeKind::UnsignedLong,
        TypeKind::VarInt,
        TypeKind::VarLong,
        TypeKind::Float,
        TypeKind::Double,
        TypeKind::FixedPointInteger,
        TypeKind::Angle,
        TypeKind::Uuid,
        TypeKind::String,
        TypeKind::ShortPrefixedByteArray,
        TypeKind::VarIntPrefixedByteArray,
        TypeKind::TrailingByteArray,
        TypeKind::Position,
    ];

    /// Protocol name of the codec
    pub fn name(self) -> &'static str {
        match self {
            TypeKind::Boolean => Boolean::NAME,
            TypeKind::UnsignedByte => UnsignedByte::NAME,
            TypeKind::Byte => Byte::NAME,
            TypeKind::Short => Short::NAME,
            TypeKind::UnsignedShort => UnsignedShort::NAME,
            TypeKind::Integer => Integer::NAME,
            TypeKind::Long => Long::NAME,
            TypeKind::UnsignedLong => UnsignedLong::NAME,
            TypeKind::VarInt => VarInt::NAME,
            TypeKind::VarLong => VarLong::NAME,
            TypeKind::Float => Float::NAME,
            TypeKind::Double => Double::NAME,
            TypeKind::FixedPointInteger => FixedPointInteger::NAME,
            TypeKind::Angle => Angle::NAME,
            TypeKind::Uuid => Uuid::NAME,
            TypeKind::String => StringType::NAME,
            TypeKind::ShortPrefixedByteArray => ShortPrefixedByteArray::NAME,
            TypeKind::VarIntPrefixedByteArray => VarIntPrefixedByteArray::NAME,
            TypeKind::TrailingByteArray => TrailingByteArray::NAME,
            TypeKind::Position => Position::NAME,
        }
    }

    /// Whether the layout depends on the connection context
    pub fn requires_context(self) -> bool {
        matches!(self, TypeKind::Position)
    }

    /// Whether a read/send round trip can lose precision
    pub fn is_lossy(self) -> bool {
        matches!(
            self,
            TypeKind::Float | TypeKind::Double | TypeKind::FixedPointInteger | TypeKind::Angle
        )
    }

    /// Decodes one value
    ///
    /// # Errors
    /// Returns `ProtocolError::ContextRequired` when `context` is `None` for a
    /// context-dependent codec, plus whatever the codec itself reports.
    pub fn read(
        self,
        buffer: &mut PacketBuffer,
        context: Option<&ConnectionContext>,
    ) -> Result<Value> {
        let fallback = ConnectionContext::default();
        let ctx = self.context_or(context, &fallback)?;

        Ok(match self {
            TypeKind::Boolean => Value::Bool(Boolean::read_with_context(buffer, ctx)?),
            TypeKind::UnsignedByte => int(UnsignedByte::read_with_context(buffer, ctx)?),
            TypeKind::Byte => int(Byte::read_with_context(buffer, ctx)?),
            TypeKind::Short => int(Short::read_with_context(buffer, ctx)?),
            TypeKind::UnsignedShort => int(UnsignedShort::read_with_context(buffer, ctx)?),
            TypeKind::Integer => int(Integer::read_with_context(buffer, ctx)?),
            TypeKind::Long => int(Long::read_with_context(buffer, ctx)?),
            TypeKind::UnsignedLong => int(UnsignedLong::read_with_context(buffer, ctx)?),
            TypeKind::VarInt => int(VarInt::read_with_context(buffer, ctx)?),
            TypeKind::VarLong => int(VarLong::read_with_context(buffer, ctx)?),
            TypeKind::Float => Value::Float(f64::from(Float::read_with_context(buffer, ctx)?)),
            TypeKind::Double => Value::Float(Double::read_with_context(buffer, ctx)?),
            TypeKind::FixedPointInteger => {
                Value::Float(FixedPointInteger::read_with_context(buffer, ctx)?)
            }
            TypeKind::Angle => Value::Float(Angle::read_with_context(buffer, ctx)?),
            TypeKind::Uuid => Value::Text(Uuid::read_with_context(buffer, ctx)?),
            TypeKind::String => Value::Text(StringType::read_with_context(buffer, ctx)?),
            TypeKind::ShortPrefixedByteArray => {
                Value::Bytes(ShortPrefixedByteArray::read_with_context(buffer, ctx)?)
            }
            TypeKind::VarIntPrefixedByteArray => {
                Value::Bytes(VarIntPrefixedByteArray::read_with_context(buffer, ctx)?)
            }
            TypeKind::TrailingByteArray => {
                Value::Bytes(TrailingByteArray::read_with_context(buffer, ctx)?)
            }
            TypeKind::Position => Value::Position(Position::read_with_context(buffer, ctx)?),
        })
    }

    /// Encodes one value
    ///
    /// # Errors
    /// Returns `ProtocolError::TypeMismatch` when the value's shape does not
    /// fit the codec, `ProtocolError::OutOfRange` when an integer does not fit
    /// its domain, and `ProtocolError::ContextRequired` as for [`TypeKind::read`].
    pub fn send(
        self,
        value: &Value,
        buffer: &mut PacketBuffer,
        context: Option<&ConnectionContext>,
    ) -> Result<()> {
        let fallback = ConnectionContext::default();
        let ctx = self.context_or(context, &fallback)?;
        let name = self.name();

        match (self, value) {
            (TypeKind::Boolean, Value::Bool(v)) => Boolean::send_with_context(v, buffer, ctx),
            (TypeKind::UnsignedByte, Value::Int(v)) => {
                UnsignedByte::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::Byte, Value::Int(v)) => {
                Byte::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::Short, Value::Int(v)) => {
                Short::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::UnsignedShort, Value::Int(v)) => {
                UnsignedShort::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::Integer, Value::Int(v)) => {
                Integer::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::Long, Value::Int(v)) => {
                Long::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::UnsignedLong, Value::Int(v)) => {
                UnsignedLong::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::VarInt, Value::Int(v)) => {
                VarInt::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::VarLong, Value::Int(v)) => {
                VarLong::send_with_context(&bounds::narrow(name, *v)?, buffer, ctx)
            }
            (TypeKind::Float, Value::Float(_) | Value::Int(_)) => {
                let narrowed = bounds::single_precision(name, real(value))?;
                Float::send_with_context(&narrowed, buffer, ctx)
            }
            (TypeKind::Double, Value::Float(_) | Value::Int(_)) => {
                Double::send_with_context(&real(value), buffer, ctx)
            }
            (TypeKind::FixedPointInteger, Value::Float(_) | Value::Int(_)) => {
                FixedPointInteger::send_with_context(&real(value), buffer, ctx)
            }
            (TypeKind::Angle, Value::Float(_) | Value::Int(_)) => {
                Angle::send_with_context(&real(value), buffer, ctx)
            }
            (TypeKind::Uuid, Value::Text(v)) => Uuid::send_str(v, buffer),
            (TypeKind::String, Value::Text(v)) => StringType::send_str(v, buffer, ctx),
            (TypeKind::ShortPrefixedByteArray, Value::Bytes(v)) => {
                ShortPrefixedByteArray::send_bytes(v, buffer)
            }
            (TypeKind::VarIntPrefixedByteArray, Value::Bytes(v)) => {
                VarIntPrefixedByteArray::send_bytes(v, buffer, ctx)
            }
            (TypeKind::TrailingByteArray, Value::Bytes(v)) => {
                buffer.write(v);
                Ok(())
            }
            (TypeKind::Position, Value::Position(v)) => {
                Position::send_with_context(v, buffer, ctx)
            }
            (kind, other) => Err(ProtocolError::TypeMismatch {
                codec: name.to_string(),
                expected: kind.expected_shape().to_string(),
                found: other.shape().to_string(),
            }),
        }
    }

    fn context_or<'a>(
        self,
        context: Option<&'a ConnectionContext>,
        fallback: &'a ConnectionContext,
    ) -> Result<&'a ConnectionContext> {
        match context {
            Some(ctx) => Ok(ctx),
            None if self.requires_context() => {
                Err(ProtocolError::ContextRequired(self.name().to_string()))
            }
            None => Ok(fallback),
        }
    }

    fn expected_shape(self) -> &'static str {
        match self {
            TypeKind::Boolean => "bool",
            TypeKind::Float | TypeKind::Double | TypeKind::FixedPointInteger | TypeKind::Angle => {
                "real"
            }
            TypeKind::Uuid | TypeKind::String => "text",
            TypeKind::ShortPrefixedByteArray
            | TypeKind::VarIntPrefixedByteArray
            | TypeKind::TrailingByteArray => "bytes",
            TypeKind::Position => "position",
            _ => "integer",
        }
    }
}

#[inline]
fn int<T: Into<i128>>(value: T) -> Value {
    Value::Int(value.into())
}

// only called with Float or Int
#[inline]
fn real(value: &Value) -> f64 {
    match value {
        Value::Float(v) => *v,
        Value::Int(v) => *v as f64,
        _ => f64::NAN,
    }
}

/// Reads one value per schema entry, in order
pub fn read_fields(
    schema: &[TypeKind],
    buffer: &mut PacketBuffer,
    context: Option<&ConnectionContext>,
) -> Result<Vec<Value>> {
    schema
        .iter()
        .map(|kind| kind.read(buffer, context))
        .collect()
}

/// Sends `values` against `schema`, in order
///
/// # Errors
/// Returns `ProtocolError::TypeMismatch` when the counts differ.
pub fn send_fields(
    schema: &[TypeKind],
    values: &[Value],
    buffer: &mut PacketBuffer,
    context: Option<&ConnectionContext>,
) -> Result<()> {
    if schema.len() != values.len() {
        return Err(ProtocolError::TypeMismatch {
            codec: "schema".to_string(),
            expected: format!("{} fields", schema.len()),
            found: format!("{} values", values.len()),
        });
    }
    schema
        .iter()
        .zip(values)
        .try_for_each(|(kind, value)| kind.send(value, buffer, context))
}
