//! Lossy real-number codecs: 5-bit fixed point and byte angles.

use crate::core::buffer::PacketBuffer;
use crate::error::{constants, ProtocolError, Result};
use crate::types::numeric::{Integer, UnsignedByte};
use crate::types::{bounds, ContextFree};

/// Real number sent as an `Integer` scaled by 32
///
/// Precision is 1/32; values are rounded to the nearest step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedPointInteger;

impl FixedPointInteger {
    /// Fractional steps per unit
    pub const SCALE: f64 = 32.0;
}

impl ContextFree for FixedPointInteger {
    fn read(buffer: &mut PacketBuffer) -> Result<f64> {
        Ok(f64::from(Integer::read(buffer)?) / Self::SCALE)
    }

    fn send(value: &f64, buffer: &mut PacketBuffer) -> Result<()> {
        let scaled = (bounds::finite("FixedPointInteger", *value)? * Self::SCALE).round();
        if scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
            return Err(ProtocolError::OutOfRange(format!(
                "{}: {value}",
                constants::ERR_FIXED_POINT_RANGE
            )));
        }
        Integer::send(&(scaled as i32), buffer)
    }
}

context_free_type!(FixedPointInteger, f64, "FixedPointInteger");

/// Rotation in degrees, one byte per turn in 256 steps
///
/// Any finite input is accepted and wrapped into `[0, 360)` before
/// quantizing; reads always land in that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Angle;

impl Angle {
    /// Steps in a full turn
    pub const STEPS: f64 = 256.0;

    /// Degrees in a full turn
    pub const FULL_TURN: f64 = 360.0;

    /// Byte value `send` would write for `degrees`
    pub fn to_step(degrees: f64) -> Result<u8> {
        let normalized = bounds::finite("Angle", degrees)?.rem_euclid(Self::FULL_TURN);
        let step = (normalized * Self::STEPS / Self::FULL_TURN).round() as u32;
        Ok((step % 256) as u8)
    }

    /// Degrees represented by a byte value
    pub fn from_step(step: u8) -> f64 {
        f64::from(step) * Self::FULL_TURN / Self::STEPS
    }
}

impl ContextFree for Angle {
    fn read(buffer: &mut PacketBuffer) -> Result<f64> {
        Ok(Self::from_step(UnsignedByte::read(buffer)?))
    }

    fn send(value: &f64, buffer: &mut PacketBuffer) -> Result<()> {
        UnsignedByte::send(&Self::to_step(*value)?, buffer)
    }
}

context_free_type!(Angle, f64, "Angle");
