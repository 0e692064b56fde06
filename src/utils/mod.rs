//! # Utility Modules
//!
//! Supporting utilities used around the codec layer.
//!
//! ## Components
//! - **Buffer Pool**: reuse of packet buffers between packets
//! - **Logging**: structured logging configuration

pub mod buffer_pool;
pub mod logging;

// Re-export public types for advanced users
pub use buffer_pool::{BufferPool, PooledBuffer};
