//! # Buffer Pool
//!
//! Object pool for packet buffers, so that encoding one packet per call does
//! not allocate a fresh buffer each time.
//!
//! ## Usage
//! ```rust,no_run
//! use craftwire::utils::buffer_pool::BufferPool;
//!
//! let pool = BufferPool::new(16);
//! let mut buffer = pool.acquire();
//! buffer.write(&[0x00]);
//! // Buffer is cleared and returned to the pool on drop
//! ```

use crate::core::buffer::PacketBuffer;
use std::sync::{Arc, Mutex};

/// Buffers that grew past this capacity are released instead of pooled
const MAX_POOLED_CAPACITY: usize = 64 * 1024;

/// Default buffer capacity
const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// A pooled buffer that returns itself to the pool when dropped
pub struct PooledBuffer {
    buffer: PacketBuffer,
    pool: Arc<Mutex<Vec<PacketBuffer>>>,
    detached: bool,
}

impl PooledBuffer {
    /// Takes the buffer out of the pool for good
    pub fn into_inner(mut self) -> PacketBuffer {
        self.detached = true;
        std::mem::take(&mut self.buffer)
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        if self.detached || self.buffer.capacity() > MAX_POOLED_CAPACITY {
            return;
        }
        self.buffer.clear();
        // split_written can leave the storage unallocated
        self.buffer.reserve(DEFAULT_BUFFER_CAPACITY);
        if let Ok(mut pool) = self.pool.lock() {
            pool.push(std::mem::take(&mut self.buffer));
        }
    }
}

impl std::ops::Deref for PooledBuffer {
    type Target = PacketBuffer;

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl std::ops::DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

/// Thread-safe packet buffer pool
#[derive(Clone)]
pub struct BufferPool {
    pool: Arc<Mutex<Vec<PacketBuffer>>>,
    initial_capacity: usize,
}

impl BufferPool {
    /// Create a pool with `pool_size` pre-allocated buffers
    pub fn new(pool_size: usize) -> Self {
        let pool = (0..pool_size)
            .map(|_| PacketBuffer::with_capacity(DEFAULT_BUFFER_CAPACITY))
            .collect();

        Self {
            pool: Arc::new(Mutex::new(pool)),
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Acquire a buffer from the pool (or allocate a new one if pool is empty)
    pub fn acquire(&self) -> PooledBuffer {
        let buffer = self
            .pool
            .lock()
            .ok()
            .and_then(|mut pool| pool.pop())
            .unwrap_or_else(|| PacketBuffer::with_capacity(self.initial_capacity));

        PooledBuffer {
            buffer,
            pool: self.pool.clone(),
            detached: false,
        }
    }

    /// Get the current number of available buffers in the pool
    pub fn available(&self) -> usize {
        self.pool.lock().map(|p| p.len()).unwrap_or(0)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(32)
    }
}
