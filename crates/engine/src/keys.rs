//! Key derivation: caller key to per-column cipher subkeys.

use sha2::{Digest, Sha512};

/// Number of 16-bit columns in a 64-bit value, and therefore of subkeys.
pub const COLUMN_COUNT: usize = 4;

/// Bytes per subkey: one AES-128 key.
pub const SUBKEY_SIZE: usize = 16;

/// The SHA-512 hash of a caller-supplied key, partitioned into four
/// independent 16-byte subkeys, one per column.
///
/// Derived once per encode and discarded afterwards. No salting and no
/// domain separation beyond the hash itself: the same caller key must
/// yield the same subkeys on every node, forever.
pub struct KeyHash([u8; 64]);

impl KeyHash {
    /// Hash the raw key bytes. Infallible for any input length.
    pub fn derive(key: &[u8]) -> Self {
        let mut out = [0u8; 64];
        out.copy_from_slice(&Sha512::digest(key));
        KeyHash(out)
    }

    /// The 16-byte subkey for a column in `0..4`.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range column index; that is a programmer error,
    /// not a runtime condition.
    pub fn subkey(&self, column: usize) -> [u8; SUBKEY_SIZE] {
        assert!(column < COLUMN_COUNT, "column index out of range: {column}");
        let mut sk = [0u8; SUBKEY_SIZE];
        sk.copy_from_slice(&self.0[SUBKEY_SIZE * column..SUBKEY_SIZE * (column + 1)]);
        sk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_sha512_vector() {
        // SHA-512 of the empty string.
        let expected = hex::decode(
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        )
        .unwrap();

        let kh = KeyHash::derive(b"");
        let mut joined = Vec::with_capacity(64);
        for column in 0..COLUMN_COUNT {
            joined.extend_from_slice(&kh.subkey(column));
        }
        assert_eq!(joined, expected);
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = KeyHash::derive(b"test-key");
        let b = KeyHash::derive(b"test-key");
        for column in 0..COLUMN_COUNT {
            assert_eq!(a.subkey(column), b.subkey(column));
        }
    }

    #[test]
    fn subkeys_are_pairwise_distinct() {
        let kh = KeyHash::derive(b"test-key");
        for i in 0..COLUMN_COUNT {
            for j in (i + 1)..COLUMN_COUNT {
                assert_ne!(kh.subkey(i), kh.subkey(j));
            }
        }
    }

    #[test]
    #[should_panic(expected = "column index out of range")]
    fn rejects_out_of_range_column() {
        KeyHash::derive(b"k").subkey(4);
    }
}
