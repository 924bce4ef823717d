//! Configuration for the pentashift binary.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments, using intelligent defaults.
//! All defaults are printed so runs are reproducible.
//!
//! # Shift Policy
//!
//! The core transform accepts any signed shifts, but this tool keeps the
//! original policy of rejecting negative values at the boundary. The
//! restriction lives here, never inside encode/decode.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// What the binary should do with the artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plaintext -> ciphertext + metadata frame
    Encrypt,
    /// Ciphertext + metadata frame -> plaintext
    Decrypt,
    /// Encrypt, decrypt, then verify the decrypted file matches the input
    RoundTrip,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Behavior ===
    /// Operation to perform
    pub mode: Mode,

    // === Files ===
    /// Plaintext input path (generated if absent in encrypt/round-trip modes)
    pub input_file: PathBuf,

    /// Ciphertext path
    pub cipher_file: PathBuf,

    /// Metadata frame path
    pub meta_file: PathBuf,

    /// Decrypted output path
    pub decrypted_file: PathBuf,

    // === Cipher parameters ===
    /// First shift parameter (non-negative by policy)
    pub shift1: i64,

    /// Second shift parameter (non-negative by policy)
    pub shift2: i64,

    // === Sample generation ===
    /// Seed for randomized defaults and sample text
    pub seed: u64,

    /// Characters of sample text to generate when the input is missing
    pub sample_chars: usize,

    // === Flags ===
    /// Keep the metadata file after a successful decrypt
    pub keep_meta: bool,

    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no shifts are provided, generates randomized defaults in [0, 25]
    /// using a time-based seed. If --seed is provided, uses that seed for
    /// all randomness (fully deterministic).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode: Option<Mode> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut cipher_file: Option<PathBuf> = None;
        let mut meta_file: Option<PathBuf> = None;
        let mut decrypted_file: Option<PathBuf> = None;
        let mut shift1: Option<i64> = None;
        let mut shift2: Option<i64> = None;
        let mut seed: Option<u64> = None;
        let mut sample_chars: Option<usize> = None;
        let mut keep_meta = false;
        let mut print_config = false;
        let mut print_metrics = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--mode" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--mode requires a value".to_string());
                    }
                    mode = Some(match args[i].as_str() {
                        "encrypt" => Mode::Encrypt,
                        "decrypt" => Mode::Decrypt,
                        "round-trip" => Mode::RoundTrip,
                        other => {
                            return Err(format!(
                                "invalid mode: {} (expected encrypt, decrypt, or round-trip)",
                                other
                            ))
                        }
                    });
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--cipher" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--cipher requires a path".to_string());
                    }
                    cipher_file = Some(PathBuf::from(&args[i]));
                }
                "--meta" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--meta requires a path".to_string());
                    }
                    meta_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    decrypted_file = Some(PathBuf::from(&args[i]));
                }
                "--shift1" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--shift1 requires a number".to_string());
                    }
                    shift1 = Some(args[i].parse().map_err(|_| "invalid shift1")?);
                }
                "--shift2" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--shift2 requires a number".to_string());
                    }
                    shift2 = Some(args[i].parse().map_err(|_| "invalid shift2")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-chars" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-chars requires a number".to_string());
                    }
                    sample_chars = Some(args[i].parse().map_err(|_| "invalid sample-chars")?);
                }
                "--keep-meta" => {
                    keep_meta = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-metrics" => {
                    print_metrics = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Policy check: negative shifts are rejected at this boundary only.
        for (name, value) in [("shift1", shift1), ("shift2", shift2)] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(format!("{} must be non-negative, got {}", name, v));
                }
            }
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis() as u64
        });

        // Generate defaults using seed
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let config = Config {
            mode: mode.unwrap_or(Mode::RoundTrip),
            input_file: input_file.unwrap_or_else(|| PathBuf::from("raw_text.txt")),
            cipher_file: cipher_file.unwrap_or_else(|| PathBuf::from("encrypted_text.txt")),
            meta_file: meta_file.unwrap_or_else(|| PathBuf::from("encrypted_text.meta")),
            decrypted_file: decrypted_file.unwrap_or_else(|| PathBuf::from("decrypted_text.txt")),
            shift1: shift1.unwrap_or_else(|| rng.gen_range(0..=25)),
            shift2: shift2.unwrap_or_else(|| rng.gen_range(0..=25)),
            seed,
            sample_chars: sample_chars.unwrap_or(4096),
            keep_meta,
            print_config,
            print_metrics,
        };

        Ok(config)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Mode: {:?}", self.mode);
        println!("Input file:     {}", self.input_file.display());
        println!("Cipher file:    {}", self.cipher_file.display());
        println!("Metadata file:  {}", self.meta_file.display());
        println!("Decrypted file: {}", self.decrypted_file.display());
        println!();
        println!("Seed: {}", self.seed);
        println!("Shift 1: {}", self.shift1);
        println!("Shift 2: {}", self.shift2);
        println!("Sample size: {} chars", self.sample_chars);
        println!("Keep metadata: {}", self.keep_meta);
        println!();
    }
}

fn print_help() {
    println!("pentashift: class-keyed substitution cipher over text files");
    println!();
    println!("USAGE:");
    println!("    pentashift [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --mode <MODE>           encrypt, decrypt, or round-trip (default: round-trip)");
    println!();
    println!("    --in <PATH>             Plaintext input (default: raw_text.txt, generated if missing)");
    println!("    --cipher <PATH>         Ciphertext file (default: encrypted_text.txt)");
    println!("    --meta <PATH>           Metadata frame file (default: encrypted_text.meta)");
    println!("    --out <PATH>            Decrypted output (default: decrypted_text.txt)");
    println!();
    println!("    --shift1 <N>            First shift, non-negative (default: random 0-25)");
    println!("    --shift2 <N>            Second shift, non-negative (default: random 0-25)");
    println!("    --seed <N>              Random seed for determinism");
    println!("    --sample-chars <N>      Generated sample size in characters (default: 4096)");
    println!();
    println!("    --keep-meta             Don't delete the metadata file after decrypt");
    println!("    --print-config          Print resolved configuration");
    println!("    --no-metrics            Don't print the run summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    pentashift                                 # Round trip with random shifts");
    println!("    pentashift --seed 42                       # Deterministic run");
    println!("    pentashift --mode encrypt --in notes.txt --shift1 3 --shift2 5");
    println!("    pentashift --mode decrypt --cipher c.txt --meta c.meta --out plain.txt");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zero_arguments_works() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.mode, Mode::RoundTrip);
        assert!((0..=25).contains(&config.shift1));
        assert!((0..=25).contains(&config.shift2));
    }

    #[test]
    fn test_seeded_defaults_deterministic() {
        let a = Config::from_args(&args(&["--seed", "42"])).unwrap();
        let b = Config::from_args(&args(&["--seed", "42"])).unwrap();
        assert_eq!(a.shift1, b.shift1);
        assert_eq!(a.shift2, b.shift2);
    }

    #[test]
    fn test_explicit_shifts() {
        let config =
            Config::from_args(&args(&["--shift1", "3", "--shift2", "5"])).unwrap();
        assert_eq!(config.shift1, 3);
        assert_eq!(config.shift2, 5);
    }

    #[test]
    fn test_negative_shift_rejected() {
        let err = Config::from_args(&args(&["--shift1", "-3"])).unwrap_err();
        assert!(err.contains("non-negative"));
    }

    #[test]
    fn test_mode_parsing() {
        let config = Config::from_args(&args(&["--mode", "decrypt"])).unwrap();
        assert_eq!(config.mode, Mode::Decrypt);

        assert!(Config::from_args(&args(&["--mode", "nonsense"])).is_err());
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Config::from_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_missing_value_rejected() {
        assert!(Config::from_args(&args(&["--shift1"])).is_err());
        assert!(Config::from_args(&args(&["--in"])).is_err());
    }
}
