//! File-level encrypt, decrypt, and verify operations.
//!
//! Thin wrappers around the core transform that manage the three artifacts
//! of a run: plaintext, ciphertext, and the metadata frame. The metadata
//! file is a single-use handoff: written once by encryption, consumed once
//! by decryption, and deleted after a successful decrypt unless the caller
//! opts to keep it.

use pentashift_core::{decode, encode, metadata, metrics::Metrics, Error, Result};
use std::fs;
use std::path::Path;

/// Encrypt a text file, producing a ciphertext file and a metadata frame.
///
/// # Errors
/// - `Error::MissingFile` if the input doesn't exist
/// - `Error::Io` for read/write failures (including non-UTF-8 input)
pub fn encrypt_file(
    input: &Path,
    cipher_out: &Path,
    meta_out: &Path,
    shift1: i64,
    shift2: i64,
    metrics: &mut Metrics,
) -> Result<()> {
    if !input.exists() {
        return Err(Error::MissingFile(input.display().to_string()));
    }

    let text = fs::read_to_string(input)?;
    let (cipher, tags) = encode(&text, shift1, shift2);
    let frame = metadata::serialize_metadata(&tags);

    fs::write(cipher_out, &cipher)?;
    fs::write(meta_out, &frame)?;

    metrics.record_classes(&tags);
    metrics.plain_bytes += text.len() as u64;
    metrics.cipher_bytes += cipher.len() as u64;
    metrics.metadata_bytes += frame.len() as u64;

    Ok(())
}

/// Decrypt a ciphertext file using its metadata frame.
///
/// The metadata file is deleted after a successful decrypt unless
/// `keep_metadata` is set.
///
/// # Errors
/// - `Error::MissingFile` if the ciphertext or metadata file doesn't exist
/// - `Error::Metadata` if the frame is malformed or corrupted
/// - `Error::Cipher` if the tag count disagrees with the ciphertext
pub fn decrypt_file(
    cipher_in: &Path,
    plain_out: &Path,
    meta_in: &Path,
    shift1: i64,
    shift2: i64,
    keep_metadata: bool,
    metrics: &mut Metrics,
) -> Result<()> {
    if !cipher_in.exists() {
        return Err(Error::MissingFile(cipher_in.display().to_string()));
    }
    if !meta_in.exists() {
        return Err(Error::MissingFile(format!(
            "{} (decryption is not reversible without the recorded class tags)",
            meta_in.display()
        )));
    }

    let cipher = fs::read_to_string(cipher_in)?;
    let frame = fs::read(meta_in)?;
    let tags = metadata::parse_metadata(&frame)?;

    let plain = decode(&cipher, shift1, shift2, &tags)?;
    fs::write(plain_out, &plain)?;

    if !keep_metadata {
        fs::remove_file(meta_in)?;
    }

    metrics.cipher_bytes += cipher.len() as u64;
    metrics.metadata_bytes += frame.len() as u64;

    Ok(())
}

/// Verify that a decrypted file matches the original byte for byte.
///
/// # Errors
/// `Error::Verify` if the contents differ.
pub fn verify_round_trip(original: &Path, decrypted: &Path) -> Result<()> {
    let a = fs::read(original)?;
    let b = fs::read(decrypted)?;

    if a != b {
        return Err(Error::Verify(format!(
            "{} does not match {}",
            decrypted.display(),
            original.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pentashift_{}_{}", std::process::id(), name))
    }

    fn cleanup(paths: &[&Path]) {
        for path in paths {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn test_encrypt_decrypt_verify_on_disk() {
        let input = temp_path("rt_in.txt");
        let cipher = temp_path("rt_cipher.txt");
        let meta = temp_path("rt_meta.bin");
        let decrypted = temp_path("rt_out.txt");

        fs::write(&input, "Round Trips, on disk! 42 ü漢").unwrap();

        let mut metrics = Metrics::new();
        encrypt_file(&input, &cipher, &meta, 3, 5, &mut metrics).unwrap();
        decrypt_file(&cipher, &decrypted, &meta, 3, 5, false, &mut metrics).unwrap();
        verify_round_trip(&input, &decrypted).unwrap();

        // Single-use handoff: metadata is gone after decrypt
        assert!(!meta.exists());
        assert!(metrics.input_chars > 0);

        cleanup(&[&input, &cipher, &meta, &decrypted]);
    }

    #[test]
    fn test_keep_metadata_flag() {
        let input = temp_path("keep_in.txt");
        let cipher = temp_path("keep_cipher.txt");
        let meta = temp_path("keep_meta.bin");
        let decrypted = temp_path("keep_out.txt");

        fs::write(&input, "keep the tags around").unwrap();

        let mut metrics = Metrics::new();
        encrypt_file(&input, &cipher, &meta, 7, 2, &mut metrics).unwrap();
        decrypt_file(&cipher, &decrypted, &meta, 7, 2, true, &mut metrics).unwrap();

        assert!(meta.exists());

        cleanup(&[&input, &cipher, &meta, &decrypted]);
    }

    #[test]
    fn test_decrypt_without_metadata_fails() {
        let input = temp_path("nometa_in.txt");
        let cipher = temp_path("nometa_cipher.txt");
        let meta = temp_path("nometa_meta.bin");
        let decrypted = temp_path("nometa_out.txt");

        fs::write(&input, "no tags, no decryption").unwrap();

        let mut metrics = Metrics::new();
        encrypt_file(&input, &cipher, &meta, 1, 9, &mut metrics).unwrap();
        fs::remove_file(&meta).unwrap();

        let result = decrypt_file(&cipher, &decrypted, &meta, 1, 9, false, &mut metrics);
        assert!(matches!(result, Err(Error::MissingFile(_))));

        cleanup(&[&input, &cipher, &decrypted]);
    }

    #[test]
    fn test_encrypt_missing_input_fails() {
        let input = temp_path("ghost_in.txt");
        let cipher = temp_path("ghost_cipher.txt");
        let meta = temp_path("ghost_meta.bin");

        let mut metrics = Metrics::new();
        let result = encrypt_file(&input, &cipher, &meta, 4, 4, &mut metrics);
        assert!(matches!(result, Err(Error::MissingFile(_))));
    }

    #[test]
    fn test_verify_detects_difference() {
        let a = temp_path("verify_a.txt");
        let b = temp_path("verify_b.txt");

        fs::write(&a, "original").unwrap();
        fs::write(&b, "tampered").unwrap();

        let result = verify_round_trip(&a, &b);
        assert!(matches!(result, Err(Error::Verify(_))));

        cleanup(&[&a, &b]);
    }

    #[test]
    fn test_wrong_shifts_fail_verification() {
        let input = temp_path("wrong_in.txt");
        let cipher = temp_path("wrong_cipher.txt");
        let meta = temp_path("wrong_meta.bin");
        let decrypted = temp_path("wrong_out.txt");

        fs::write(&input, "Shifts are the secret").unwrap();

        let mut metrics = Metrics::new();
        encrypt_file(&input, &cipher, &meta, 3, 5, &mut metrics).unwrap();
        decrypt_file(&cipher, &decrypted, &meta, 4, 5, true, &mut metrics).unwrap();

        let result = verify_round_trip(&input, &decrypted);
        assert!(matches!(result, Err(Error::Verify(_))));

        cleanup(&[&input, &cipher, &meta, &decrypted]);
    }
}
