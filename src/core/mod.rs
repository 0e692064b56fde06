//! # Core Protocol Components
//!
//! The buffer and context every codec operates on, plus the frame codec that
//! moves whole packets in and out of a byte stream.
//!
//! ## Components
//! - **PacketBuffer**: growable bytes with an independent read cursor
//! - **ConnectionContext**: negotiated protocol version and codec limits
//! - **FrameCodec**: Tokio codec splitting a stream into VarInt-prefixed frames
//!
//! ## Wire Format
//! ```text
//! [Length(VarInt)] [Body(Length)]
//! ```
//!
//! ## Security
//! - Maximum frame size: 2 MiB - 1 (the largest 3-byte VarInt)
//! - Length validation before allocation

pub mod buffer;
pub mod context;
pub mod frame;
