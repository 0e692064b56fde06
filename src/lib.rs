//! # craftwire
//!
//! Version-aware binary type codecs for the Minecraft Java Edition wire
//! protocol.
//!
//! Each protocol data type is a zero-sized codec implementing [`Type`]: it
//! reads one value at the cursor of a [`PacketBuffer`] or appends one value's
//! bytes to it. Codecs whose layout never changes also implement
//! [`ContextFree`]. [`Position`] changed its bit layout in protocol 443 and
//! always needs a [`ConnectionContext`].
//!
//! ## Modules
//! - [`types`]: the codecs, plus a dynamic [`TypeKind`]/[`Value`] layer
//! - [`core`]: buffer, connection context and frame codec
//! - [`versions`]: supported Minecraft releases and protocol numbers
//! - [`config`]: codec limits, frame limits and logging settings
//! - [`error`]: the [`ProtocolError`] type
//! - [`utils`]: buffer pooling and logging setup
//!
//! ## Example
//! ```rust
//! use craftwire::{ConnectionContext, ContextFree, PacketBuffer, StringType, Type, VarInt};
//!
//! let ctx = ConnectionContext::new(754);
//! let mut buffer = PacketBuffer::new();
//! VarInt::send(&754, &mut buffer).unwrap();
//! StringType::send_with_context(&"localhost".to_string(), &mut buffer, &ctx).unwrap();
//!
//! buffer.reset_cursor();
//! assert_eq!(VarInt::read(&mut buffer).unwrap(), 754);
//! assert_eq!(StringType::read_with_context(&mut buffer, &ctx).unwrap(), "localhost");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;
pub mod versions;

pub use crate::core::buffer::PacketBuffer;
pub use crate::core::context::ConnectionContext;
pub use crate::core::frame::FrameCodec;
pub use config::{CodecConfig, CodecLimits};
pub use error::{ErrorKind, ProtocolError, Result};
pub use types::*;
