//! UUID codec: canonical hyphenated text in memory, 16 raw bytes on the wire.

use crate::core::buffer::PacketBuffer;
use crate::error::{ProtocolError, Result};
use crate::types::ContextFree;

/// Length of `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
const CANONICAL_LEN: usize = 36;

/// Offsets of the hyphens in the canonical form
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// 128-bit UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uuid;

impl Uuid {
    pub const SIZE: usize = 16;

    /// Parses the canonical hyphenated form, in either case
    ///
    /// # Errors
    /// Returns `ProtocolError::InvalidUuid` for anything else, including the
    /// unhyphenated and braced forms.
    pub fn parse(text: &str) -> Result<[u8; 16]> {
        let raw = text.as_bytes();
        if raw.len() != CANONICAL_LEN || HYPHENS.iter().any(|&i| raw[i] != b'-') {
            return Err(ProtocolError::InvalidUuid(text.to_string()));
        }

        let digits: Vec<u8> = raw.iter().copied().filter(|&b| b != b'-').collect();
        let mut out = [0u8; Self::SIZE];
        hex::decode_to_slice(&digits, &mut out)
            .map_err(|e| ProtocolError::InvalidUuid(format!("{text}: {e}")))?;
        Ok(out)
    }

    /// Formats raw bytes as lower-case canonical text
    pub fn format(bytes: &[u8; 16]) -> String {
        let digits = hex::encode(bytes);
        let mut out = String::with_capacity(CANONICAL_LEN);
        out.push_str(&digits[0..8]);
        out.push('-');
        out.push_str(&digits[8..12]);
        out.push('-');
        out.push_str(&digits[12..16]);
        out.push('-');
        out.push_str(&digits[16..20]);
        out.push('-');
        out.push_str(&digits[20..32]);
        out
    }

    /// Sends a UUID given as borrowed text
    pub fn send_str(text: &str, buffer: &mut PacketBuffer) -> Result<()> {
        buffer.write(&Self::parse(text)?);
        Ok(())
    }
}

impl ContextFree for Uuid {
    fn read(buffer: &mut PacketBuffer) -> Result<String> {
        Ok(Self::format(&buffer.read_array::<16>()?))
    }

    fn send(value: &String, buffer: &mut PacketBuffer) -> Result<()> {
        Self::send_str(value, buffer)
    }
}

context_free_type!(Uuid, String, "UUID");
