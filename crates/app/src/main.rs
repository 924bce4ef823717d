//! pentashift: encrypt and decrypt text files with the class-keyed cipher.
//!
//! Three modes:
//! - `encrypt`: plaintext -> ciphertext + metadata frame
//! - `decrypt`: ciphertext + metadata frame -> plaintext
//! - `round-trip` (default): encrypt, decrypt, and verify the output
//!   matches the input exactly, mirroring how the cipher is meant to be
//!   exercised end to end
//!
//! With no arguments the tool generates sample input and random shifts from
//! a time-based seed; pass `--seed` to make a run fully reproducible.

mod config;
mod files;
mod input_gen;

use config::{Config, Mode};
use pentashift_core::metrics::Metrics;
use pentashift_core::Result;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("try --help for usage");
            std::process::exit(2);
        }
    };

    if config.print_config {
        config.print();
    }

    if let Err(e) = run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let mut metrics = Metrics::new();

    match config.mode {
        Mode::Encrypt => {
            ensure_input(config)?;
            files::encrypt_file(
                &config.input_file,
                &config.cipher_file,
                &config.meta_file,
                config.shift1,
                config.shift2,
                &mut metrics,
            )?;
            println!(
                "Encrypted {} -> {} (+ {})",
                config.input_file.display(),
                config.cipher_file.display(),
                config.meta_file.display()
            );
        }
        Mode::Decrypt => {
            files::decrypt_file(
                &config.cipher_file,
                &config.decrypted_file,
                &config.meta_file,
                config.shift1,
                config.shift2,
                config.keep_meta,
                &mut metrics,
            )?;
            println!(
                "Decrypted {} -> {}",
                config.cipher_file.display(),
                config.decrypted_file.display()
            );
        }
        Mode::RoundTrip => {
            ensure_input(config)?;
            files::encrypt_file(
                &config.input_file,
                &config.cipher_file,
                &config.meta_file,
                config.shift1,
                config.shift2,
                &mut metrics,
            )?;
            files::decrypt_file(
                &config.cipher_file,
                &config.decrypted_file,
                &config.meta_file,
                config.shift1,
                config.shift2,
                config.keep_meta,
                &mut metrics,
            )?;
            files::verify_round_trip(&config.input_file, &config.decrypted_file)?;
            println!(
                "Round trip verified: {} matches {}",
                config.decrypted_file.display(),
                config.input_file.display()
            );
        }
    }

    metrics.complete();
    if config.print_metrics {
        metrics.print_summary();
    }

    Ok(())
}

/// Generate sample input when the plaintext file doesn't exist yet.
fn ensure_input(config: &Config) -> Result<()> {
    if config.input_file.exists() {
        return Ok(());
    }

    println!(
        "Input {} not found, generating {} chars of sample text (seed {})",
        config.input_file.display(),
        config.sample_chars,
        config.seed
    );
    input_gen::write_sample_file(&config.input_file, config.seed, config.sample_chars)?;

    Ok(())
}
