//! # Frame Codec
//!
//! Splits a byte stream into VarInt-length-prefixed frames and hands each
//! frame body over as a [`PacketBuffer`] ready for field-by-field decoding.
//!
//! Compression and encryption sit outside this codec; it sees whatever bytes
//! the transport layer passes through.
//!
//! ## Usage
//! ```rust
//! use bytes::BytesMut;
//! use craftwire::core::buffer::PacketBuffer;
//! use craftwire::core::frame::FrameCodec;
//! use tokio_util::codec::{Decoder, Encoder};
//!
//! let mut codec = FrameCodec::default();
//! let mut wire = BytesMut::new();
//! codec.encode(PacketBuffer::from(vec![0x00, 0x2A]), &mut wire).unwrap();
//! assert_eq!(&wire[..], &[0x02, 0x00, 0x2A]);
//!
//! let frame = codec.decode(&mut wire).unwrap().unwrap();
//! assert_eq!(frame.as_slice(), &[0x00, 0x2A]);
//! ```

use crate::config::{FrameConfig, MAX_PACKET_SIZE};
use crate::core::buffer::PacketBuffer;
use crate::error::{ProtocolError, Result};
use crate::types::{bounds, ContextFree, VarInt};
use bytes::{Buf, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, trace};

/// Tokio codec for VarInt-prefixed frames
#[derive(Debug, Clone, Copy)]
pub struct FrameCodec {
    max_frame_size: usize,
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self {
            max_frame_size: MAX_PACKET_SIZE,
        }
    }
}

impl FrameCodec {
    pub fn new(config: &FrameConfig) -> Self {
        Self {
            max_frame_size: config.max_frame_size,
        }
    }

    pub fn max_frame_size(&self) -> usize {
        self.max_frame_size
    }

    /// Parses the length prefix without consuming it
    ///
    /// Returns `Ok(None)` while the prefix itself is still incomplete.
    fn peek_length(src: &[u8]) -> Result<Option<(usize, usize)>> {
        let window = &src[..src.len().min(VarInt::MAX_BYTES)];
        let mut header = PacketBuffer::from(window);
        match VarInt::read(&mut header) {
            Ok(raw) => {
                let length = bounds::length_prefix("frame", raw)?;
                Ok(Some((header.position(), length)))
            }
            Err(ProtocolError::UnexpectedEof { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn encode_body(&self, body: &[u8], dst: &mut BytesMut) -> Result<()> {
        bounds::within_limit("frame", body.len(), self.max_frame_size)?;

        let mut prefix = PacketBuffer::with_capacity(VarInt::MAX_BYTES);
        VarInt::send(&bounds::narrow::<i32>("frame", body.len() as i128)?, &mut prefix)?;

        dst.reserve(prefix.len() + body.len());
        dst.extend_from_slice(prefix.as_slice());
        dst.extend_from_slice(body);
        Ok(())
    }
}

impl Decoder for FrameCodec {
    type Item = PacketBuffer;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        let Some((header_len, length)) = Self::peek_length(src)? else {
            return Ok(None);
        };

        if length > self.max_frame_size {
            debug!(length, max = self.max_frame_size, "rejecting oversized frame");
            return Err(ProtocolError::LengthExceeded {
                length,
                max: self.max_frame_size,
            });
        }

        let total = header_len + length;
        if src.len() < total {
            src.reserve(total - src.len());
            return Ok(None);
        }

        src.advance(header_len);
        let body = src.split_to(length);
        trace!(length, "decoded frame");
        Ok(Some(PacketBuffer::from(body)))
    }
}

impl Encoder<PacketBuffer> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: PacketBuffer, dst: &mut BytesMut) -> Result<()> {
        self.encode_body(item.as_slice(), dst)
    }
}

impl Encoder<Bytes> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        self.encode_body(&item, dst)
    }
}
