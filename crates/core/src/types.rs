//! Core types for the ordinal subsystem.

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::base62;
use crate::constants::{BINARY_STRING_PREFIX, ORDINAL_SIZE};
use crate::error::Result;

/// The sortable, comparable part of a record selector.
///
/// An ordinal is a 64-bit integer masked by an order-preserving keyed hash
/// into 16 opaque bytes: four big-endian `u32` column codes. For ordinals
/// produced with the same key, unsigned byte-wise lexicographic comparison
/// reproduces the numeric order of the original values. Without the key the
/// bytes are indistinguishable from random.
///
/// The derived [`Ord`] implementation is exactly that byte-wise comparison,
/// so ordinals can be used directly as index keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ordinal([u8; ORDINAL_SIZE]);

impl Ordinal {
    /// Size of the encoded form in bytes.
    pub const SIZE: usize = ORDINAL_SIZE;

    /// The all-zero ordinal, the lexicographic minimum.
    pub const ZERO: Ordinal = Ordinal([0u8; ORDINAL_SIZE]);

    /// Create an ordinal from its exact 16-byte encoded form.
    pub const fn new(bytes: [u8; ORDINAL_SIZE]) -> Self {
        Ordinal(bytes)
    }

    /// Create an ordinal from a byte slice of any length.
    ///
    /// Shorter inputs are zero-padded on the right; longer inputs are
    /// truncated to 16 bytes. This is the tolerant decode rule used for
    /// the byte-array and plain-string JSON forms.
    pub fn from_padded(bytes: &[u8]) -> Self {
        let mut out = [0u8; ORDINAL_SIZE];
        let n = bytes.len().min(ORDINAL_SIZE);
        out[..n].copy_from_slice(&bytes[..n]);
        Ordinal(out)
    }

    /// The 16-byte encoded form.
    pub const fn as_bytes(&self) -> &[u8; ORDINAL_SIZE] {
        &self.0
    }

    /// Unsigned byte-wise lexicographic comparison.
    ///
    /// Identical to the derived [`Ord`]; provided by name because it is the
    /// comparison contract storage indexes rely on.
    pub fn compare(&self, other: &Ordinal) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Encode as a base-62 string (no `\b` prefix).
    pub fn to_base62(&self) -> String {
        base62::encode(&self.0)
    }

    /// Decode from a base-62 string produced by [`Ordinal::to_base62`].
    pub fn from_base62(s: &str) -> Result<Self> {
        Ok(Ordinal(base62::decode(s)?))
    }
}

impl From<[u8; ORDINAL_SIZE]> for Ordinal {
    fn from(bytes: [u8; ORDINAL_SIZE]) -> Self {
        Ordinal(bytes)
    }
}

impl AsRef<[u8]> for Ordinal {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ordinal({})", self)
    }
}

impl Serialize for Ordinal {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = String::with_capacity(23);
        s.push(BINARY_STRING_PREFIX);
        s.push_str(&base62::encode(&self.0));
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for Ordinal {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(OrdinalVisitor)
    }
}

struct OrdinalVisitor;

impl<'de> Visitor<'de> for OrdinalVisitor {
    type Value = Ordinal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a \\b-prefixed base-62 string, a plain string, or a byte array")
    }

    fn visit_str<E>(self, s: &str) -> std::result::Result<Ordinal, E>
    where
        E: serde::de::Error,
    {
        match s.strip_prefix(BINARY_STRING_PREFIX) {
            Some(encoded) => {
                let bytes = base62::decode(encoded).map_err(E::custom)?;
                Ok(Ordinal(bytes))
            }
            // Plain strings are taken as raw bytes, consistent with the
            // blob decode rules elsewhere on the wire.
            None => Ok(Ordinal::from_padded(s.as_bytes())),
        }
    }

    fn visit_bytes<E>(self, v: &[u8]) -> std::result::Result<Ordinal, E>
    where
        E: serde::de::Error,
    {
        Ok(Ordinal::from_padded(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Ordinal, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = [0u8; ORDINAL_SIZE];
        let mut i = 0usize;
        while let Some(b) = seq.next_element::<u8>()? {
            if i < ORDINAL_SIZE {
                bytes[i] = b;
            }
            i += 1;
        }
        Ok(Ordinal(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ordinal {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(17).wrapping_add(3);
        }
        Ordinal::new(bytes)
    }

    #[test]
    fn ordering_is_byte_lexicographic() {
        let a = Ordinal::from_padded(&[0x00, 0xFF]);
        let b = Ordinal::from_padded(&[0x01, 0x00]);
        assert!(a < b);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);

        // The high byte dominates regardless of the remaining bytes.
        let c = Ordinal::from_padded(&[0x80]);
        let d = Ordinal::new([0x7F; 16]);
        assert!(d < c);
    }

    #[test]
    fn zero_is_minimum() {
        assert!(Ordinal::ZERO <= sample());
        assert_eq!(Ordinal::default(), Ordinal::ZERO);
    }

    #[test]
    fn from_padded_pads_and_truncates() {
        let short = Ordinal::from_padded(&[1, 2, 3]);
        assert_eq!(&short.as_bytes()[..3], &[1, 2, 3]);
        assert_eq!(&short.as_bytes()[3..], &[0u8; 13]);

        let long: Vec<u8> = (0u8..32).collect();
        let truncated = Ordinal::from_padded(&long);
        assert_eq!(truncated.as_bytes()[..], long[..16]);
    }

    #[test]
    fn json_round_trip() {
        let ord = sample();
        let json = serde_json::to_string(&ord).unwrap();
        assert!(json.starts_with("\"\\b"), "got {json}");
        let back: Ordinal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ord);
    }

    #[test]
    fn json_round_trip_zero() {
        let json = serde_json::to_string(&Ordinal::ZERO).unwrap();
        assert_eq!(json, "\"\\b0\"");
        let back: Ordinal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Ordinal::ZERO);
    }

    #[test]
    fn json_accepts_plain_string() {
        let ord: Ordinal = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(ord, Ordinal::from_padded(b"hello"));
    }

    #[test]
    fn json_accepts_empty_string() {
        let ord: Ordinal = serde_json::from_str("\"\"").unwrap();
        assert_eq!(ord, Ordinal::ZERO);
    }

    #[test]
    fn json_accepts_byte_array() {
        let ord: Ordinal = serde_json::from_str("[1,2,3,4]").unwrap();
        assert_eq!(ord, Ordinal::from_padded(&[1, 2, 3, 4]));

        // Oversized arrays truncate to 16 bytes.
        let long: Vec<u8> = (1u8..=20).collect();
        let json = serde_json::to_string(&long).unwrap();
        let ord: Ordinal = serde_json::from_str(&json).unwrap();
        assert_eq!(ord, Ordinal::from_padded(&long));
    }

    #[test]
    fn json_rejects_bad_base62() {
        let err = serde_json::from_str::<Ordinal>("\"\\b!!!\"").unwrap_err();
        assert!(err.to_string().contains("base-62"));
    }

    #[test]
    fn base62_helpers_round_trip() {
        let ord = sample();
        let s = ord.to_base62();
        assert_eq!(Ordinal::from_base62(&s).unwrap(), ord);
    }

    #[test]
    fn display_is_hex() {
        let ord = Ordinal::from_padded(&[0xDE, 0xAD]);
        let shown = ord.to_string();
        assert!(shown.starts_with("0xdead"));
        assert_eq!(shown.len(), 2 + 32);
    }
}
