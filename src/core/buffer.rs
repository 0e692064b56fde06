//! # Packet Buffer
//!
//! Growable byte storage with an independent read cursor.
//!
//! Writes always append at the end; reads consume from the cursor forward.
//! The cursor only moves forward during reads and returns to the start
//! through [`PacketBuffer::reset_cursor`], which makes "send, reset, read
//! back" and buffer reuse cheap.
//!
//! ## Usage
//! ```rust
//! use craftwire::core::buffer::PacketBuffer;
//!
//! let mut buffer = PacketBuffer::new();
//! buffer.write(&[1, 2, 3]);
//! assert_eq!(buffer.read(2).unwrap(), &[1, 2]);
//! buffer.reset_cursor();
//! assert_eq!(buffer.remaining(), 3);
//! ```

use crate::error::{ProtocolError, Result};
use bytes::{Bytes, BytesMut};

/// Byte buffer with a read cursor
///
/// A buffer is owned by one in-flight packet; every cursor-moving call takes
/// `&mut self`, so concurrent use needs external ownership transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacketBuffer {
    data: BytesMut,
    cursor: usize,
}

impl PacketBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Appends `bytes` after any previously written content
    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Consumes exactly `n` bytes from the cursor
    ///
    /// # Errors
    /// Returns `ProtocolError::UnexpectedEof` if fewer than `n` bytes remain;
    /// the cursor is left unchanged in that case.
    #[inline]
    pub fn read(&mut self, n: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(ProtocolError::UnexpectedEof {
                needed: n,
                remaining,
            });
        }
        let start = self.cursor;
        self.cursor += n;
        Ok(&self.data[start..self.cursor])
    }

    /// Consumes exactly `N` bytes into a fixed-size array
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    /// Consumes every byte left after the cursor
    pub fn read_remaining(&mut self) -> &[u8] {
        let start = self.cursor;
        self.cursor = self.data.len();
        &self.data[start..]
    }

    /// Moves the cursor back to the first byte without touching content
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Current cursor offset
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes not yet consumed
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Total bytes written
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Every byte written so far, regardless of the cursor
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Bytes after the cursor, without consuming them
    pub fn unread(&self) -> &[u8] {
        &self.data[self.cursor..]
    }

    /// Drops all content and resets the cursor, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
        self.cursor = 0;
    }

    /// Ensures room for at least `additional` more bytes
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Allocated capacity of the underlying storage
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Takes all written bytes out as `Bytes`, leaving the buffer empty
    ///
    /// The split does not copy; the remaining allocation stays with `self`.
    pub fn split_written(&mut self) -> Bytes {
        self.cursor = 0;
        self.data.split().freeze()
    }

    /// Converts the buffer into immutable `Bytes`
    pub fn freeze(self) -> Bytes {
        self.data.freeze()
    }
}

impl From<Vec<u8>> for PacketBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: BytesMut::from(&data[..]),
            cursor: 0,
        }
    }
}

impl From<&[u8]> for PacketBuffer {
    fn from(data: &[u8]) -> Self {
        Self {
            data: BytesMut::from(data),
            cursor: 0,
        }
    }
}

impl From<BytesMut> for PacketBuffer {
    fn from(data: BytesMut) -> Self {
        Self { data, cursor: 0 }
    }
}

impl AsRef<[u8]> for PacketBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
