//! Scoped buffer pool
//!
//! Buffers are recycled through a thread-local free list. Acquisition hands
//! out a `PooledBuffer` guard that dereferences to a `String`; dropping the
//! guard clears the buffer and returns its capacity to the pool. Release is
//! tied to scope exit, so a buffer cannot leak out of the pool on an early
//! return or a propagated panic.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

/// Maximum number of buffers retained per thread.
const MAX_POOLED: usize = 8;

/// Buffers that grew past this capacity are dropped instead of retained,
/// so one pathological comment cannot pin a large allocation forever.
const MAX_RETAINED_CAPACITY: usize = 16 * 1024;

thread_local! {
    static POOL: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// A scope guard around a pooled `String` buffer.
///
/// The guard dereferences to the underlying `String`, so all the usual
/// string-building methods apply. Call [`finish`](PooledBuffer::finish) to
/// detach the accumulated content; the backing capacity is recycled either
/// way.
#[derive(Debug)]
pub struct PooledBuffer {
    buf: String,
}

impl PooledBuffer {
    /// Acquire a cleared buffer from the thread-local pool, or a fresh one
    /// when the pool is empty.
    pub fn acquire() -> Self {
        let buf = POOL.with(|pool| pool.borrow_mut().pop()).unwrap_or_default();
        PooledBuffer { buf }
    }

    /// Acquire a buffer pre-filled with `content`.
    pub fn acquire_with(content: &str) -> Self {
        let mut buffer = Self::acquire();
        buffer.buf.push_str(content);
        buffer
    }

    /// Detach the accumulated content as an owned `String`.
    ///
    /// The capacity leaves with the content; the guard is consumed and the
    /// pool sees nothing worth retaining.
    pub fn finish(mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        if self.buf.capacity() == 0 || self.buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        self.buf.clear();
        let buf = std::mem::take(&mut self.buf);
        POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOLED {
                pool.push(buf);
            }
        });
    }
}

impl Deref for PooledBuffer {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buf
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buf
    }
}
