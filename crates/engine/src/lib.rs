//! Order-preserving keyed encoder for the ordinal subsystem.
//!
//! This crate turns a plaintext 64-bit value into the opaque 16-byte
//! [`Ordinal`](ordinal_core::Ordinal) wire form. For a fixed key, the byte
//! order of the outputs reproduces the numeric order of the inputs; without
//! the key the outputs look uniformly random.
//!
//! The encoder works column-wise: the 64-bit input is split into four 16-bit
//! lanes, and each lane is mapped through a freshly generated random
//! "alphabet" of 32 768 sorted `u32` values drawn from an AES-128 stream
//! keyed by a per-column subkey of the SHA-512 key hash. Columns are encoded
//! concurrently and the alphabet sort itself parallelizes above a CPU-count
//! derived threshold.
//!
//! The entry point is [`Encoder::encode`].

#![warn(missing_docs)]

mod alphabet;
mod encoder;
mod pool;
mod sort;

pub mod error;
pub mod keys;

pub use encoder::Encoder;
pub use error::{EngineError, Result};
pub use keys::KeyHash;
