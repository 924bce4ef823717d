//! Metadata frame serialization and parsing.
//!
//! The class-tag sequence produced by encoding is the only thing that makes
//! decryption unambiguous, so it is persisted as a self-describing frame
//! with its own integrity check. One byte per tag, order preserved, no
//! compression.
//!
//! # Frame Format
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x50 0x53 0x4D 0x31 ("PSM1")
//! +------------------+
//! | tag_count (8)    |  u64 little-endian
//! +------------------+
//! | crc32 (4)        |  u32 checksum
//! +------------------+
//! | tags             |  tag_count bytes, one class tag each
//! | (variable)       |
//! +------------------+
//! ```
//!
//! # CRC Coverage
//!
//! The CRC32 covers:
//! - tag_count
//! - the tag bytes
//!
//! This detects truncation and corruption of the artifact. A corrupted
//! frame is rejected outright; patching the tag sequence would silently
//! desynchronize it from the ciphertext.

use crate::classify::CharClass;
use crate::error::{MetadataError, Result};

/// Magic number for metadata frames: "PSM1" (PentaShift Metadata v1)
const MAGIC: [u8; 4] = [0x50, 0x53, 0x4D, 0x31];

/// Size of the frame header in bytes
const HEADER_SIZE: usize = 16;

/// Serialize a class-tag sequence into a metadata frame.
///
/// Infallible: every tag sequence, including the empty one, has a valid
/// frame.
pub fn serialize_metadata(tags: &[CharClass]) -> Vec<u8> {
    let tag_count = tags.len() as u64;
    let tag_bytes: Vec<u8> = tags.iter().map(|t| t.to_byte()).collect();
    let crc32 = compute_crc(tag_count, &tag_bytes);

    let mut frame = Vec::with_capacity(HEADER_SIZE + tag_bytes.len());

    // Write header
    frame.extend_from_slice(&MAGIC);
    frame.extend_from_slice(&tag_count.to_le_bytes());
    frame.extend_from_slice(&crc32.to_le_bytes());

    // Write tags
    frame.extend_from_slice(&tag_bytes);

    frame
}

/// Parse a metadata frame back into a class-tag sequence.
///
/// # Errors
/// - `MetadataError::FrameTooShort` if the buffer can't hold a header
/// - `MetadataError::InvalidMagic` if the magic number doesn't match
/// - `MetadataError::TagCountMismatch` if the body disagrees with the header
/// - `MetadataError::Crc` if the checksum fails
/// - `MetadataError::UnknownTag` for a byte outside the five-tag alphabet
pub fn parse_metadata(bytes: &[u8]) -> Result<Vec<CharClass>> {
    // Validate minimum size
    if bytes.len() < HEADER_SIZE {
        return Err(MetadataError::FrameTooShort {
            required: HEADER_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    // Parse header
    let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
    if magic != MAGIC {
        return Err(MetadataError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let tag_count = u64::from_le_bytes(bytes[4..12].try_into().unwrap()) as usize;
    let crc32 = u32::from_le_bytes(bytes[12..16].try_into().unwrap());

    let body = &bytes[HEADER_SIZE..];
    if body.len() != tag_count {
        return Err(MetadataError::TagCountMismatch {
            expected: tag_count,
            actual: body.len(),
        }
        .into());
    }

    // Verify CRC before trusting any tag byte
    let computed_crc = compute_crc(tag_count as u64, body);
    if computed_crc != crc32 {
        return Err(MetadataError::Crc {
            expected: crc32,
            actual: computed_crc,
        }
        .into());
    }

    let mut tags = Vec::with_capacity(tag_count);
    for &byte in body {
        match CharClass::from_byte(byte) {
            Some(tag) => tags.push(tag),
            None => return Err(MetadataError::UnknownTag(byte).into()),
        }
    }

    Ok(tags)
}

/// Compute CRC32 over the protected fields.
///
/// This function defines what data is covered by the integrity check.
fn compute_crc(tag_count: u64, tag_bytes: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&tag_count.to_le_bytes());
    hasher.update(tag_bytes);
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_tags() -> Vec<CharClass> {
        vec![
            CharClass::UpperLow,
            CharClass::LowerLow,
            CharClass::LowerHigh,
            CharClass::Other,
            CharClass::UpperHigh,
            CharClass::Other,
        ]
    }

    #[test]
    fn test_serialize_parse_round_trip() {
        let tags = sample_tags();
        let frame = serialize_metadata(&tags);
        assert_eq!(frame.len(), HEADER_SIZE + tags.len());

        let parsed = parse_metadata(&frame).unwrap();
        assert_eq!(parsed, tags);
    }

    #[test]
    fn test_empty_sequence() {
        let frame = serialize_metadata(&[]);
        assert_eq!(frame.len(), HEADER_SIZE);
        assert!(parse_metadata(&frame).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_magic() {
        let mut frame = serialize_metadata(&sample_tags());
        frame[0] = 0xFF;

        let result = parse_metadata(&frame);
        assert!(matches!(
            result,
            Err(Error::Metadata(MetadataError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_frame_too_short() {
        let result = parse_metadata(&[0u8; 10]);
        assert!(matches!(
            result,
            Err(Error::Metadata(MetadataError::FrameTooShort {
                required: 16,
                actual: 10,
            }))
        ));
    }

    #[test]
    fn test_truncated_body_detected() {
        let mut frame = serialize_metadata(&sample_tags());
        frame.pop();

        let result = parse_metadata(&frame);
        assert!(matches!(
            result,
            Err(Error::Metadata(MetadataError::TagCountMismatch {
                expected: 6,
                actual: 5,
            }))
        ));
    }

    #[test]
    fn test_crc_detects_corruption() {
        let mut frame = serialize_metadata(&sample_tags());
        let last = frame.len() - 1;
        frame[last] ^= 0x01;

        let result = parse_metadata(&frame);
        assert!(matches!(
            result,
            Err(Error::Metadata(MetadataError::Crc { .. }))
        ));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        // Build a frame whose CRC is valid but whose tag byte is outside
        // the alphabet, so the tag check is what fires.
        let tag_bytes = vec![0x07u8];
        let crc = compute_crc(1, &tag_bytes);

        let mut frame = Vec::new();
        frame.extend_from_slice(&MAGIC);
        frame.extend_from_slice(&1u64.to_le_bytes());
        frame.extend_from_slice(&crc.to_le_bytes());
        frame.extend_from_slice(&tag_bytes);

        let result = parse_metadata(&frame);
        assert!(matches!(
            result,
            Err(Error::Metadata(MetadataError::UnknownTag(0x07)))
        ));
    }

    #[test]
    fn test_order_preserved() {
        let tags = vec![
            CharClass::Other,
            CharClass::LowerLow,
            CharClass::Other,
            CharClass::UpperHigh,
        ];
        let parsed = parse_metadata(&serialize_metadata(&tags)).unwrap();
        assert_eq!(parsed, tags);
    }
}
