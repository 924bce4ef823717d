//! pentashift-core: class-keyed substitution cipher with lossless round trips
//!
//! This library provides the core components of a cipher whose shift rule
//! depends on which of five classes a character falls into:
//! - Lowercase letters split at the alphabet midpoint (a-m vs n-z)
//! - Uppercase letters split the same way (A-M vs N-Z)
//! - Everything else passes through unchanged
//!
//! Each class shifts by a different amount derived from two integer
//! parameters. Because a shifted letter can land in a different class's
//! range than the one it started in, the ciphertext alone is not enough to
//! invert the transform. Encoding therefore emits a metadata sequence (one
//! class tag per character) that decoding consumes in lockstep.
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `classify`: Five-class character classifier (leaf module)
//! - `transform`: Modular shift helper, forward and inverse transforms
//! - `metadata`: Binary wire frame for class-tag sequences
//! - `metrics`: Observable run behavior
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Total encoding**: `encode` accepts any string and any `i64` shifts
//! - **Deterministic**: Same text and shifts always produce the same output
//! - **Lossless**: Round trips are exact for every Unicode scalar value

pub mod classify;
pub mod error;
pub mod metadata;
pub mod metrics;
pub mod transform;

// Re-export commonly used types
pub use classify::{classify, CharClass};
pub use error::{CipherError, Error, MetadataError, Result};
pub use transform::{decode, encode, shift_letter};
