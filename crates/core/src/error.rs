//! Error types for the core crate.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A base-62 string contained a character outside the digit set.
    #[error("invalid base-62 digit: {0:?}")]
    InvalidBase62Digit(char),

    /// A base-62 string decoded to a value wider than 16 bytes.
    #[error("base-62 string overflows a 16-byte ordinal")]
    Base62Overflow,
}

/// Result type alias for CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;
