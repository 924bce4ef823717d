//! Sample text generation for testing.
//!
//! When no input file exists, we generate sample text that exercises every
//! character class the cipher distinguishes.
//!
//! # Design
//!
//! Generated text has:
//! - Lowercase and uppercase runs spanning both halves of the alphabet
//! - Mixed-case sentence fragments
//! - Digits, punctuation, and whitespace (passthrough characters)
//! - Non-Latin codepoints, which must survive a round trip untouched
//!
//! This makes the class distribution visible in the run summary.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS_PUNCT: &[u8] = b"0123456789.,;:!?()-";
const WHITESPACE: &[u8] = b" \n\t ,.";

/// Characters outside the Latin ranges; always classified as passthrough.
const NON_LATIN: [char; 10] = ['é', 'ü', 'ß', 'λ', 'Ж', '漢', '字', '→', '★', '🦀'];

/// Generate sample text with a mixed class distribution.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_chars`: exact number of characters to generate
///
/// # Returns
/// A string of exactly `size_chars` characters.
pub fn generate_sample_text(seed: u64, size_chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(size_chars * 2);

    // Generate text in runs with different character styles
    let mut remaining = size_chars;

    while remaining > 0 {
        let run = remaining.min(rng.gen_range(16..=128));

        // Choose run style randomly
        let style: u8 = rng.gen_range(0..10);

        match style {
            // 30% lowercase words
            0..=2 => {
                for i in 0..run {
                    if i % 6 == 5 {
                        text.push(' ');
                    } else {
                        text.push(LOWER[rng.gen_range(0..LOWER.len())] as char);
                    }
                }
            }

            // 20% uppercase runs
            3..=4 => {
                for _ in 0..run {
                    text.push(UPPER[rng.gen_range(0..UPPER.len())] as char);
                }
            }

            // 20% mixed-case sentence fragments
            5..=6 => {
                for i in 0..run {
                    if i == 0 {
                        text.push(UPPER[rng.gen_range(0..UPPER.len())] as char);
                    } else if i % 8 == 7 {
                        text.push(' ');
                    } else {
                        text.push(LOWER[rng.gen_range(0..LOWER.len())] as char);
                    }
                }
            }

            // 10% digits and punctuation
            7 => {
                for _ in 0..run {
                    text.push(DIGITS_PUNCT[rng.gen_range(0..DIGITS_PUNCT.len())] as char);
                }
            }

            // 10% whitespace-heavy filler
            8 => {
                for _ in 0..run {
                    text.push(WHITESPACE[rng.gen_range(0..WHITESPACE.len())] as char);
                }
            }

            // 10% non-Latin codepoints
            _ => {
                for _ in 0..run {
                    text.push(NON_LATIN[rng.gen_range(0..NON_LATIN.len())]);
                }
            }
        }

        remaining -= run;
    }

    text
}

/// Write generated sample text to a file.
pub fn write_sample_file(
    path: &std::path::Path,
    seed: u64,
    size_chars: usize,
) -> std::io::Result<()> {
    let text = generate_sample_text(seed, size_chars);
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pentashift_core::classify::{classify, CharClass};

    #[test]
    fn test_exact_char_count() {
        for size in [0, 1, 16, 100, 1000, 10000] {
            let text = generate_sample_text(7, size);
            assert_eq!(text.chars().count(), size);
        }
    }

    #[test]
    fn test_determinism() {
        let a = generate_sample_text(12345, 5000);
        let b = generate_sample_text(12345, 5000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = generate_sample_text(1, 1000);
        let b = generate_sample_text(2, 1000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_all_classes_represented() {
        // Large enough that every run style appears many times
        let text = generate_sample_text(42, 16384);
        for class in CharClass::ALL {
            assert!(
                text.chars().any(|c| classify(c) == class),
                "class {:?} missing from sample",
                class
            );
        }
    }
}
