//! Forward and inverse transforms over the five character classes.
//!
//! Encoding scans the input once, left to right. Each character is
//! classified, its class tag appended to the metadata sequence, and the
//! character shifted by the class's forward amount:
//!
//! | Class       | Forward amount  |
//! |-------------|-----------------|
//! | `LowerLow`  | `+(s1 * s2)`    |
//! | `LowerHigh` | `-(s1 + s2)`    |
//! | `UpperLow`  | `-s1`           |
//! | `UpperHigh` | `+(s2 * s2)`    |
//! | `Other`     | `0`             |
//!
//! where `s1` and `s2` are the shift parameters reduced to `[0, 25]` with
//! Euclidean modulo. Both operands are reduced before multiplication, so
//! the largest intermediate amount is 25 * 25 = 625, nowhere near `i64`
//! limits.
//!
//! Decoding walks the ciphertext and the metadata sequence in lockstep and
//! applies the negated amount for each *recorded* tag. It never
//! reclassifies ciphertext characters: a shifted letter may sit in a
//! different class's range than the one it was encoded from, so the
//! recorded tag is the only authority.

use crate::classify::{classify, CharClass};
use crate::error::{CipherError, Result};

/// Letters per case alphabet.
const ALPHABET_LEN: i64 = 26;

/// Reduce an arbitrary signed shift to `[0, 25]`.
///
/// Rust's `%` returns negative results for negative operands; `rem_euclid`
/// gives the always-non-negative semantics the transform requires.
fn normalize(shift: i64) -> i64 {
    shift.rem_euclid(ALPHABET_LEN)
}

/// Shift an ASCII letter by `amount` within its own case's alphabet.
///
/// The letter is treated as a position 0-25, `amount` is added, and the
/// result reduced to `[0, 25]` with Euclidean modulo, so any `i64` amount
/// (negative, zero, or far beyond 26) produces a valid letter of the same
/// case. Non-ASCII-letter characters are returned unchanged.
pub fn shift_letter(c: char, amount: i64) -> char {
    let base = if c.is_ascii_lowercase() {
        b'a'
    } else if c.is_ascii_uppercase() {
        b'A'
    } else {
        return c;
    };

    let pos = (c as u8 - base) as i64;
    let shifted = (pos + amount).rem_euclid(ALPHABET_LEN) as u8;
    (base + shifted) as char
}

/// Per-class forward shift amount.
///
/// `s1` and `s2` must already be normalized to `[0, 25]`. The returned
/// amount may be negative or exceed 25; [`shift_letter`] reduces it.
fn forward_amount(class: CharClass, s1: i64, s2: i64) -> i64 {
    match class {
        CharClass::LowerLow => s1 * s2,
        CharClass::LowerHigh => -(s1 + s2),
        CharClass::UpperLow => -s1,
        CharClass::UpperHigh => s2 * s2,
        CharClass::Other => 0,
    }
}

/// Per-class inverse shift amount. Exactly undoes [`forward_amount`].
fn inverse_amount(class: CharClass, s1: i64, s2: i64) -> i64 {
    -forward_amount(class, s1, s2)
}

/// Encode `text` with the class-keyed forward transform.
///
/// Returns the ciphertext and the metadata sequence: one class tag per
/// input character, in input order. The tags are required, unmodified, to
/// decode the ciphertext.
///
/// Total over all strings and all shift pairs; there is no error
/// condition. Guarantees that ciphertext, metadata, and input all have the
/// same character count.
pub fn encode(text: &str, shift1: i64, shift2: i64) -> (String, Vec<CharClass>) {
    let s1 = normalize(shift1);
    let s2 = normalize(shift2);

    let mut cipher = String::with_capacity(text.len());
    let mut metadata = Vec::with_capacity(text.len());

    for c in text.chars() {
        let class = classify(c);
        metadata.push(class);
        cipher.push(shift_letter(c, forward_amount(class, s1, s2)));
    }

    (cipher, metadata)
}

/// Decode `cipher` using the metadata recorded at encode time.
///
/// The tag count must equal the ciphertext character count; otherwise the
/// tags would silently desynchronize from the characters, so decoding
/// fails with [`CipherError::MetadataMismatch`] and produces no partial
/// output.
///
/// # Errors
/// `CipherError::MetadataMismatch` if `metadata.len()` differs from the
/// ciphertext's character count.
pub fn decode(cipher: &str, shift1: i64, shift2: i64, metadata: &[CharClass]) -> Result<String> {
    let cipher_chars = cipher.chars().count();
    if cipher_chars != metadata.len() {
        return Err(CipherError::MetadataMismatch {
            ciphertext: cipher_chars,
            metadata: metadata.len(),
        }
        .into());
    }

    let s1 = normalize(shift1);
    let s2 = normalize(shift2);

    let mut plain = String::with_capacity(cipher.len());
    for (c, &class) in cipher.chars().zip(metadata.iter()) {
        plain.push(shift_letter(c, inverse_amount(class, s1, s2)));
    }

    Ok(plain)
}
