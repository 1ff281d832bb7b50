//! Scratch buffer pool for alphabet generation.
//!
//! An alphabet buffer is 128 KB; allocating one per column encode would be
//! correct but costly at query rates. The pool recycles buffers across
//! encodes instead. It must never block progress: an empty pool allocates.

use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;

use crate::alphabet::ALPHABET_LEN;

/// Pool of 32 768-entry `u32` scratch buffers.
pub(crate) struct AlphabetPool {
    buffers: Mutex<Vec<Vec<u32>>>,
}

impl AlphabetPool {
    pub(crate) fn new() -> Self {
        AlphabetPool {
            buffers: Mutex::new(Vec::new()),
        }
    }

    /// Lease a buffer, allocating a fresh one if the pool is empty.
    ///
    /// The lease returns the buffer on drop. Contents are unspecified on
    /// acquisition; the fill pass overwrites every entry before any read.
    pub(crate) fn acquire(&self) -> AlphabetLease<'_> {
        let buf = self
            .buffers
            .lock()
            .pop()
            .unwrap_or_else(|| vec![0u32; ALPHABET_LEN]);
        debug_assert_eq!(buf.len(), ALPHABET_LEN);
        AlphabetLease {
            pool: self,
            buf: Some(buf),
        }
    }
}

/// Exclusive lease on one pool buffer, held for a single column encode.
pub(crate) struct AlphabetLease<'a> {
    pool: &'a AlphabetPool,
    buf: Option<Vec<u32>>,
}

impl Deref for AlphabetLease<'_> {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        self.buf.as_deref().expect("lease holds a buffer until drop")
    }
}

impl DerefMut for AlphabetLease<'_> {
    fn deref_mut(&mut self) -> &mut [u32] {
        self.buf.as_deref_mut().expect("lease holds a buffer until drop")
    }
}

impl Drop for AlphabetLease<'_> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            self.pool.buffers.lock().push(buf);
        }
    }
}
