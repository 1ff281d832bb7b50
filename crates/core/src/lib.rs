//! # Ordinal Core
//!
//! Wire-level types for the ordinal subsystem of the replicated key/value
//! store.
//!
//! An [`Ordinal`] is the sortable, comparable part of a record selector: a
//! 64-bit value masked by an order-preserving keyed hash into an opaque
//! 16-byte string. Storage nodes compare ordinals purely byte-wise and never
//! see the plaintext value.
//!
//! This crate carries:
//!
//! - **Types**: the [`Ordinal`] newtype with byte-lexicographic ordering
//! - **Serialization**: the `\b`-prefixed base-62 JSON form, plus the
//!   byte-array and plain-string forms accepted on input
//! - **Base-62**: the fixed-width codec used by the JSON form
//!
//! The encoder that produces ordinals lives in `ordinal-engine`.

#![warn(missing_docs)]

pub mod base62;
pub mod constants;
pub mod error;
pub mod types;

pub use constants::ORDINAL_SIZE;
pub use error::{CoreError, Result};
pub use types::Ordinal;
