//! The column encoder: order-preserving randomized alphabets.
//!
//! Each 16-bit column value is mapped to a 32-bit code through an
//! "alphabet": 32 768 values drawn from an AES-128 stream keyed by the
//! column's subkey, sorted ascending, and repaired to a minimum gap of 2.
//! Even column values index the alphabet directly; odd values land strictly
//! inside the gap after their neighbor, displaced by a keyed function of the
//! higher-order lanes. Code order therefore matches value order for inputs
//! that agree above this column.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Block};

use crate::error::{EngineError, Result};
use crate::keys::SUBKEY_SIZE;
use crate::sort;

/// Entries in one alphabet: one per even 16-bit column value.
pub(crate) const ALPHABET_LEN: usize = 32_768;

/// Stream words are masked to 31 bits before the random base is added.
const FILL_MASK: u32 = 0x7FFF_FFFF;

/// Modulus bounding the random base: 2^31 + 1.
const RBASE_MODULUS: u32 = 0x8000_0001;

/// The last entry must stay below this to leave interpolation room at the
/// top of the code space.
const ALPHABET_CEILING: u32 = 0xFFFF_FFFE;

/// Defensive bound on fill attempts. The per-attempt rejection probability
/// is roughly `alphabet[0] / 2^32`; hitting this bound means the cipher is
/// not producing anything like a uniform stream.
const MAX_FILL_ATTEMPTS: u32 = 64;

/// Map one 16-bit column value to its 32-bit code.
///
/// `value_masked_to_column` carries the lanes strictly above this column
/// (lower lanes zeroed); it seeds the odd-value interpolation so that codes
/// remain comparable only between inputs that agree above this column.
/// `alphabet` is a pool buffer of exactly [`ALPHABET_LEN`] entries.
pub(crate) fn encode_column(
    value_masked_to_column: u64,
    column_value: u16,
    subkey: [u8; SUBKEY_SIZE],
    threshold: usize,
    alphabet: &mut [u32],
) -> Result<u32> {
    assert_eq!(alphabet.len(), ALPHABET_LEN, "wrong alphabet buffer length");

    let cipher = Aes128::new(&subkey.into());
    let mut register = Block::default();

    // One throwaway block seeds the monotonic random base; the register
    // keeps its ciphertext and the fill stream continues from there.
    cipher.encrypt_block(&mut register);
    let rbase = le_u32(&register[0..4]) % RBASE_MODULUS;

    generate(&cipher, &mut register, rbase, threshold, alphabet)?;

    Ok(lookup(
        &cipher,
        alphabet,
        value_masked_to_column,
        column_value,
    ))
}

/// Fill, sort, and gap-repair the alphabet until it passes the range check.
///
/// Retries continue the cipher stream rather than restarting it, so each
/// attempt draws a fresh sequence under the same `rbase`.
fn generate(
    cipher: &Aes128,
    register: &mut Block,
    rbase: u32,
    threshold: usize,
    alphabet: &mut [u32],
) -> Result<()> {
    for attempt in 1..=MAX_FILL_ATTEMPTS {
        fill(cipher, register, rbase, alphabet);
        sort::sort(alphabet, threshold);
        repair_gaps(alphabet);
        if in_range(alphabet) {
            return Ok(());
        }
        tracing::debug!(attempt, "alphabet crowded the top of the code space; redrawing");
    }

    tracing::error!(
        attempts = MAX_FILL_ATTEMPTS,
        "alphabet generation exhausted its retry bound"
    );
    Err(EngineError::AlphabetGeneration {
        attempts: MAX_FILL_ATTEMPTS,
    })
}

/// Fill all 32 768 entries from the cipher stream: 8 192 in-place
/// re-encryptions of the register, four words per block.
fn fill(cipher: &Aes128, register: &mut Block, rbase: u32, alphabet: &mut [u32]) {
    for chunk in alphabet.chunks_exact_mut(4) {
        cipher.encrypt_block(register);
        for (slot, word) in chunk.iter_mut().zip(register.chunks_exact(4)) {
            // Masked word plus rbase tops out at 0xFFFF_FFFF; cannot wrap.
            *slot = (le_u32(word) & FILL_MASK) + rbase;
        }
    }
}

/// Enforce a strict minimum gap of 2 between adjacent entries.
///
/// Wrapping arithmetic keeps the pass total even in the astronomically
/// unlikely chains of equal entries, matching the wire-format reference.
fn repair_gaps(alphabet: &mut [u32]) {
    for i in 1..alphabet.len() {
        if alphabet[i].wrapping_sub(alphabet[i - 1]) < 2 {
            alphabet[i] = alphabet[i].wrapping_add(2);
        }
    }
}

/// Accept the alphabet iff its maximum leaves interpolation room at the top.
fn in_range(alphabet: &[u32]) -> bool {
    let last = alphabet[ALPHABET_LEN - 1];
    last > alphabet[0] && last < ALPHABET_CEILING
}

/// Map the column value through the finished alphabet.
fn lookup(
    cipher: &Aes128,
    alphabet: &[u32],
    value_masked_to_column: u64,
    column_value: u16,
) -> u32 {
    let half = (column_value >> 1) as usize;
    let mut rv = alphabet[half];

    if column_value & 1 != 0 {
        // Odd values interpolate strictly between alphabet[half] and its
        // successor. The offset is keyed on the higher-order lanes, so two
        // inputs that differ above this column diverge here as well.
        let mut block = Block::default();
        block[..8].copy_from_slice(&value_masked_to_column.to_le_bytes());
        cipher.encrypt_block(&mut block);
        let rn = le_u32(&block[0..4]);

        if half == ALPHABET_LEN - 1 {
            rv = rv.wrapping_add(rn % !rv);
        } else {
            // The minimum gap of 2 keeps this modulus at least 1.
            let gap = alphabet[half + 1].wrapping_sub(rv).wrapping_sub(1);
            rv = rv.wrapping_add(rn % gap);
        }
        rv = rv.wrapping_add(1);
    }

    rv
}

fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
