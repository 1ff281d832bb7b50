//! The ordinal assembler: four column encodes packed big-endian.

use ordinal_core::Ordinal;
use rayon::prelude::*;

use crate::alphabet;
use crate::error::Result;
use crate::keys::{KeyHash, COLUMN_COUNT};
use crate::pool::AlphabetPool;
use crate::sort;

/// Order-preserving keyed encoder.
///
/// The encoder owns the scratch alphabet pool and the sort parallelism
/// threshold, so distinct encoders never share state. Construction is
/// cheap; encodes through the same encoder reuse its scratch buffers.
///
/// ```
/// use ordinal_engine::Encoder;
///
/// let encoder = Encoder::new();
/// let a = encoder.encode(1, b"secret").unwrap();
/// let b = encoder.encode(2, b"secret").unwrap();
/// assert!(a < b);
/// ```
pub struct Encoder {
    threshold: usize,
    pool: AlphabetPool,
}

impl Encoder {
    /// Create an encoder with the sort threshold derived from the number
    /// of available CPUs.
    pub fn new() -> Self {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::with_threshold(sort::parallel_threshold(cpus))
    }

    /// Create an encoder with an explicit sort parallelism threshold.
    ///
    /// Mostly useful in tests and benchmarks; `usize::MAX` forces a fully
    /// sequential sort. The threshold affects scheduling only, never the
    /// encoded bytes.
    pub fn with_threshold(threshold: usize) -> Self {
        Encoder {
            threshold,
            pool: AlphabetPool::new(),
        }
    }

    /// Encode `value` under `key` into its opaque 16-byte ordinal.
    ///
    /// Deterministic: identical `(value, key)` pairs produce bit-identical
    /// ordinals regardless of thread interleaving, across processes and
    /// across encoders. For a fixed key, byte-lexicographic comparison of
    /// the outputs matches unsigned comparison of the inputs.
    ///
    /// The four 16-bit lanes of `value` are encoded concurrently on the
    /// rayon pool; the calling thread participates via work stealing.
    pub fn encode(&self, value: u64, key: &[u8]) -> Result<Ordinal> {
        let key_hash = KeyHash::derive(key);

        // Per column: the lanes strictly above it (lower lanes zeroed) and
        // its own 16-bit value. Column 0 is the high lane and sees no
        // higher-order context.
        let lanes: [(u64, u16); COLUMN_COUNT] = [
            (0, (value >> 48) as u16),
            (value & 0xFFFF_0000_0000_0000, (value >> 32) as u16),
            (value & 0xFFFF_FFFF_0000_0000, (value >> 16) as u16),
            (value & 0xFFFF_FFFF_FFFF_0000, value as u16),
        ];

        let codes = (0..COLUMN_COUNT)
            .into_par_iter()
            .map(|column| {
                let (masked, column_value) = lanes[column];
                let mut scratch = self.pool.acquire();
                alphabet::encode_column(
                    masked,
                    column_value,
                    key_hash.subkey(column),
                    self.threshold,
                    &mut scratch,
                )
            })
            .collect::<Result<Vec<u32>>>()?;

        // Big-endian packing with column 0 first: byte comparison then
        // cascades from the high lane down, exactly like u64 comparison.
        let mut bytes = [0u8; Ordinal::SIZE];
        for (column, code) in codes.iter().enumerate() {
            bytes[4 * column..4 * column + 4].copy_from_slice(&code.to_be_bytes());
        }
        Ok(Ordinal::new(bytes))
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
