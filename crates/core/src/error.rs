//! Error types for the pentashift system.
//!
//! All operations return structured errors rather than panicking.
//! This enables graceful shutdown and clear error reporting.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Cipher: decoding refused because metadata is out of step
/// - Metadata: the persisted metadata frame is malformed or corrupted
/// - I/O: file system operations
/// - MissingFile: a required artifact does not exist
/// - Verify: a round trip did not reproduce the original text
#[derive(Debug, Error)]
pub enum Error {
    /// Cipher transform error (metadata out of step with ciphertext)
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Metadata frame error (bad magic, truncation, corruption)
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required input artifact is missing
    #[error("missing file: {0}")]
    MissingFile(String),

    /// Round-trip verification failure
    #[error("verification failed: {0}")]
    Verify(String),
}

/// Errors from the transform itself.
///
/// Encoding is total and never fails; this covers the single condition
/// under which decoding refuses to produce output.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Metadata tag count disagrees with the ciphertext character count.
    ///
    /// Proceeding would silently desynchronize tags from characters and
    /// corrupt the remainder of the decoded text, so decoding aborts with
    /// no partial output.
    #[error("metadata mismatch: ciphertext has {ciphertext} characters, metadata has {metadata} tags")]
    MetadataMismatch { ciphertext: usize, metadata: usize },
}

/// Metadata frame parsing errors.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Invalid magic number in frame header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Frame is too short to contain a valid header
    #[error("frame too short: need at least {required} bytes, got {actual}")]
    FrameTooShort { required: usize, actual: usize },

    /// Tag count in header doesn't match the frame body
    #[error("tag count mismatch: header says {expected}, body has {actual}")]
    TagCountMismatch { expected: usize, actual: usize },

    /// A tag byte outside the five-class alphabet
    #[error("unknown class tag byte {0:#04x}")]
    UnknownTag(u8),

    /// CRC validation failed, indicating frame corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
