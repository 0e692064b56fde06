//! Shared domain checks used by the codecs and the dynamic layer.

use crate::error::{ProtocolError, Result};
use tracing::debug;

/// Narrows a wide integer into the codec's value type
///
/// # Errors
/// Returns `ProtocolError::OutOfRange` naming the codec when `value` does not fit.
#[inline]
pub fn narrow<T>(codec: &str, value: i128) -> Result<T>
where
    T: TryFrom<i128>,
{
    T::try_from(value).map_err(|_| {
        debug!(codec, value = %value, "integer outside codec domain");
        ProtocolError::OutOfRange(format!(
            "{value} does not fit {codec} ({})",
            std::any::type_name::<T>()
        ))
    })
}

/// Rejects NaN and infinities
#[inline]
pub fn finite(codec: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProtocolError::OutOfRange(format!(
            "{codec}: {} ({value})",
            crate::error::constants::ERR_NON_FINITE
        )))
    }
}

/// Narrows to `f32`, rejecting finite values that would overflow to infinity
///
/// NaN and infinities pass through unchanged.
#[inline]
pub fn single_precision(codec: &str, value: f64) -> Result<f32> {
    let narrowed = value as f32;
    if value.is_finite() && !narrowed.is_finite() {
        debug!(codec, value, "real outside single precision range");
        return Err(ProtocolError::OutOfRange(format!(
            "{value} does not fit {codec} (f32)"
        )));
    }
    Ok(narrowed)
}

/// Rejects lengths above `max`
#[inline]
pub fn within_limit(codec: &str, length: usize, max: usize) -> Result<usize> {
    if length > max {
        debug!(codec, length, max, "length limit exceeded");
        return Err(ProtocolError::LengthExceeded { length, max });
    }
    Ok(length)
}

/// Converts a decoded VarInt length prefix into a byte count
///
/// # Errors
/// Returns `ProtocolError::InvalidLength` for negative prefixes.
#[inline]
pub fn length_prefix(codec: &str, raw: i32) -> Result<usize> {
    usize::try_from(raw).map_err(|_| {
        debug!(codec, raw, "negative length prefix");
        ProtocolError::InvalidLength(i64::from(raw))
    })
}

/// Checks that `value` is representable as a `bits`-wide two's-complement field
#[inline]
pub fn signed_bits(codec: &str, field: &str, value: i32, bits: u32) -> Result<i32> {
    let min = -(1i64 << (bits - 1));
    let max = (1i64 << (bits - 1)) - 1;
    let wide = i64::from(value);
    if wide < min || wide > max {
        debug!(codec, field, value, bits, "field outside bit width");
        return Err(ProtocolError::OutOfRange(format!(
            "{codec}.{field} = {value} outside [{min}, {max}]"
        )));
    }
    Ok(value)
}

/// Interprets the low `bits` bits of `raw` as a signed integer
#[inline]
pub fn sign_extend(raw: u64, bits: u32) -> i32 {
    let shift = 64 - bits;
    ((raw << shift) as i64 >> shift) as i32
}
