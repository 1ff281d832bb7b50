//! Golden-vector generation for the ordinal encoder.
//!
//! The concrete bytes of an ordinal are fixed by the chosen primitives
//! (SHA-512 key derivation, AES-128 alphabet stream). This crate renders a
//! small deterministic vector bundle so other implementations, and future
//! versions of this one, can be checked byte-for-byte against it.

use ordinal_engine::Encoder;

/// Reference key used by every vector.
pub const VECTOR_KEY: &[u8] = b"test-key";

/// Reference values: zero, its successor, a single-step change in the high
/// lane, the low-lane maximum, and the global maximum.
pub const VECTOR_VALUES: [u64; 5] = [
    0,
    1,
    0x0001_0000_0000_0000,
    0x0000_0000_0000_FFFF,
    u64::MAX,
];

/// Generate the deterministic vector bundle for cross-implementation
/// verification.
pub fn generate_vectors() -> anyhow::Result<serde_json::Value> {
    let encoder = Encoder::new();

    let mut ordinals = Vec::with_capacity(VECTOR_VALUES.len());
    for value in VECTOR_VALUES {
        let ordinal = encoder.encode(value, VECTOR_KEY)?;
        ordinals.push(serde_json::json!({
            "value": format!("{:#018x}", value),
            "hex": format!("0x{}", hex::encode(ordinal.as_bytes())),
            "base62": ordinal.to_base62(),
        }));
    }

    Ok(serde_json::json!({
        "key": String::from_utf8_lossy(VECTOR_KEY),
        "ordinals": ordinals,
    }))
}
