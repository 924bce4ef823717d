//! Five-class character classification.
//!
//! Every character maps to exactly one of five classes based on its case
//! and which half of the ASCII Latin alphabet it sits in:
//!
//! | Class       | Condition           |
//! |-------------|---------------------|
//! | `LowerLow`  | lowercase `a`-`m`   |
//! | `LowerHigh` | lowercase `n`-`z`   |
//! | `UpperLow`  | uppercase `A`-`M`   |
//! | `UpperHigh` | uppercase `N`-`Z`   |
//! | `Other`     | anything else       |
//!
//! `Other` is the catch-all for digits, punctuation, whitespace, and any
//! non-Latin codepoint; classification is total and never fails.
//!
//! Classification is only meaningful for *plaintext* characters. A shifted
//! letter can cross the midpoint of its case range (`m` shifted forward
//! becomes `n` or beyond), so the class of a ciphertext character says
//! nothing about the rule that produced it. Decoding must use the tags
//! recorded at encode time, never this function.

/// Class tag assigned to a single character.
///
/// Carries a stable one-byte wire encoding for the metadata frame and a
/// human-readable label for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Lowercase, first half of the alphabet (`a`-`m`)
    LowerLow,
    /// Lowercase, second half (`n`-`z`)
    LowerHigh,
    /// Uppercase, first half (`A`-`M`)
    UpperLow,
    /// Uppercase, second half (`N`-`Z`)
    UpperHigh,
    /// Everything else: passthrough
    Other,
}

impl CharClass {
    /// All five classes, in wire-byte order.
    pub const ALL: [CharClass; 5] = [
        CharClass::LowerLow,
        CharClass::LowerHigh,
        CharClass::UpperLow,
        CharClass::UpperHigh,
        CharClass::Other,
    ];

    /// Stable single-byte encoding used by the metadata frame.
    pub fn to_byte(self) -> u8 {
        match self {
            CharClass::LowerLow => 0x00,
            CharClass::LowerHigh => 0x01,
            CharClass::UpperLow => 0x02,
            CharClass::UpperHigh => 0x03,
            CharClass::Other => 0x04,
        }
    }

    /// Inverse of [`to_byte`](Self::to_byte). Returns `None` for bytes
    /// outside the five-tag alphabet.
    pub fn from_byte(byte: u8) -> Option<CharClass> {
        match byte {
            0x00 => Some(CharClass::LowerLow),
            0x01 => Some(CharClass::LowerHigh),
            0x02 => Some(CharClass::UpperLow),
            0x03 => Some(CharClass::UpperHigh),
            0x04 => Some(CharClass::Other),
            _ => None,
        }
    }

    /// Human-readable label for summaries.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::LowerLow => "lower-low",
            CharClass::LowerHigh => "lower-high",
            CharClass::UpperLow => "upper-low",
            CharClass::UpperHigh => "upper-high",
            CharClass::Other => "other",
        }
    }
}

/// Classify a single character.
///
/// Pure and total: depends only on the character's value, with `Other` as
/// the catch-all. O(1), no side effects.
pub fn classify(c: char) -> CharClass {
    match c {
        'a'..='m' => CharClass::LowerLow,
        'n'..='z' => CharClass::LowerHigh,
        'A'..='M' => CharClass::UpperLow,
        'N'..='Z' => CharClass::UpperHigh,
        _ => CharClass::Other,
    }
}
