//! Metrics collection and reporting for cipher runs.
//!
//! This module provides observable insights into a run:
//! - Character counts (shifted letters vs passthrough)
//! - Class distribution of the input
//! - Artifact sizes (plaintext, ciphertext, metadata frame)
//! - Timing information
//!
//! # Design
//!
//! Metrics are collected in a simple struct with explicit updates at each
//! pipeline stage. The transform itself stays pure; callers record what
//! they observed.
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. For multi-threaded use, wrap in
//! `Arc<Mutex<Metrics>>` or use per-thread metrics that are merged at the end.

use crate::classify::CharClass;
use std::time::{Duration, Instant};

/// Counters for a single encrypt/decrypt run.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Characters ===
    /// Total characters processed during encoding
    pub input_chars: u64,

    /// Letters transformed by a class rule
    pub letters_shifted: u64,

    /// Characters passed through unchanged
    pub passthrough_chars: u64,

    // === Class distribution ===
    /// Lowercase a-m
    pub lower_low_chars: u64,

    /// Lowercase n-z
    pub lower_high_chars: u64,

    /// Uppercase A-M
    pub upper_low_chars: u64,

    /// Uppercase N-Z
    pub upper_high_chars: u64,

    // === Artifacts ===
    /// Plaintext bytes read
    pub plain_bytes: u64,

    /// Ciphertext bytes written or read
    pub cipher_bytes: u64,

    /// Metadata frame bytes written or read
    pub metadata_bytes: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_chars: 0,
            letters_shifted: 0,
            passthrough_chars: 0,
            lower_low_chars: 0,
            lower_high_chars: 0,
            upper_low_chars: 0,
            upper_high_chars: 0,
            plain_bytes: 0,
            cipher_bytes: 0,
            metadata_bytes: 0,
        }
    }

    /// Record the class tags produced by one encoding pass.
    pub fn record_classes(&mut self, tags: &[CharClass]) {
        for &tag in tags {
            self.input_chars += 1;
            match tag {
                CharClass::LowerLow => {
                    self.lower_low_chars += 1;
                    self.letters_shifted += 1;
                }
                CharClass::LowerHigh => {
                    self.lower_high_chars += 1;
                    self.letters_shifted += 1;
                }
                CharClass::UpperLow => {
                    self.upper_low_chars += 1;
                    self.letters_shifted += 1;
                }
                CharClass::UpperHigh => {
                    self.upper_high_chars += 1;
                    self.letters_shifted += 1;
                }
                CharClass::Other => self.passthrough_chars += 1,
            }
        }
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Print a human-readable summary.
    pub fn print_summary(&self) {
        println!("=== Run Summary ===");
        println!("Duration: {:?}", self.duration());
        println!("Characters processed: {}", self.input_chars);
        println!("  letters shifted: {}", self.letters_shifted);
        println!("  passed through:  {}", self.passthrough_chars);
        println!();
        println!("=== Class Distribution ===");
        for (label, count) in [
            (CharClass::LowerLow.label(), self.lower_low_chars),
            (CharClass::LowerHigh.label(), self.lower_high_chars),
            (CharClass::UpperLow.label(), self.upper_low_chars),
            (CharClass::UpperHigh.label(), self.upper_high_chars),
            (CharClass::Other.label(), self.passthrough_chars),
        ] {
            println!(
                "{:<11} {:>8} ({:.1}%)",
                label,
                count,
                percentage(count, self.input_chars)
            );
        }
        println!();
        println!("Plaintext bytes:  {}", self.plain_bytes);
        println!("Ciphertext bytes: {}", self.cipher_bytes);
        println!("Metadata bytes:   {}", self.metadata_bytes);
        println!();
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
