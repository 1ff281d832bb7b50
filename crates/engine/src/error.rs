//! Error types for the encoder crate.

use thiserror::Error;

/// Encoder error type.
///
/// The encode path has no user-facing failure modes; the single variant
/// here is a defensive bound that only trips if the underlying cipher is
/// broken (for example by a misbehaving test double).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Alphabet generation kept violating its upper-bound range check.
    ///
    /// Each retry draws a fresh sequence from the cipher stream and the
    /// rejection probability per attempt is roughly `alphabet[0] / 2^32`,
    /// so exhausting the bound does not happen with a functioning AES.
    #[error("alphabet generation failed range check {attempts} times; cipher output suspect")]
    AlphabetGeneration {
        /// Number of fill attempts performed before giving up.
        attempts: u32,
    },
}

/// Result type alias for EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;
