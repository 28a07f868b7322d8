// src/generators/password.rs
use rand::Rng;
use rand_core::OsRng;
use thiserror::Error;

use crate::models::GenerationOptions;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"@#$%&*";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("No character types selected")]
    NoCharacterClassSelected,

    #[error("Password length must be a positive integer")]
    InvalidLength,
}

pub type Result<T> = std::result::Result<T, PolicyError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password of exactly `options.length` characters, each drawn
    /// independently and uniformly from the enabled character classes.
    ///
    /// Randomness comes from the operating system CSPRNG. There is no
    /// guarantee that every enabled class appears in the output; the contract
    /// is a uniform draw over the combined character set, nothing more.
    pub fn generate(&self, options: &GenerationOptions) -> Result<String> {
        if options.length == 0 {
            return Err(PolicyError::InvalidLength);
        }

        let chars = Self::charset(options);
        if chars.is_empty() {
            return Err(PolicyError::NoCharacterClassSelected);
        }

        let mut rng = OsRng;
        let password = (0..options.length)
            .map(|_| chars[rng.gen_range(0..chars.len())] as char)
            .collect();

        Ok(password)
    }

    /// The effective character set for the given options: enabled class
    /// alphabets concatenated in a fixed order.
    pub fn charset(options: &GenerationOptions) -> Vec<u8> {
        let mut chars = Vec::new();

        if options.include_uppercase {
            chars.extend_from_slice(UPPERCASE);
        }
        if options.include_lowercase {
            chars.extend_from_slice(LOWERCASE);
        }
        if options.include_numbers {
            chars.extend_from_slice(DIGITS);
        }
        if options.include_special {
            chars.extend_from_slice(SPECIAL);
        }

        chars
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        special: bool,
    ) -> GenerationOptions {
        GenerationOptions {
            length,
            include_uppercase: uppercase,
            include_lowercase: lowercase,
            include_numbers: numbers,
            include_special: special,
        }
    }

    #[test]
    fn generates_exact_length_from_enabled_classes() {
        let generator = PasswordGenerator::new();
        let opts = options(32, true, true, true, true);
        let charset = PasswordGenerator::charset(&opts);

        let password = generator.generate(&opts).expect("generation should succeed");
        assert_eq!(password.chars().count(), 32);
        assert!(password.bytes().all(|b| charset.contains(&b)));
    }

    #[test]
    fn single_class_output_stays_inside_that_class() {
        let generator = PasswordGenerator::new();

        let digits_only = generator
            .generate(&options(64, false, false, true, false))
            .expect("generation should succeed");
        assert!(digits_only.bytes().all(|b| b.is_ascii_digit()));

        let special_only = generator
            .generate(&options(64, false, false, false, true))
            .expect("generation should succeed");
        assert!(special_only.bytes().all(|b| b"@#$%&*".contains(&b)));
    }

    #[test]
    fn rejects_empty_character_set() {
        let generator = PasswordGenerator::new();
        let err = generator
            .generate(&options(12, false, false, false, false))
            .unwrap_err();
        assert_eq!(err, PolicyError::NoCharacterClassSelected);
    }

    #[test]
    fn rejects_zero_length() {
        let generator = PasswordGenerator::new();
        let err = generator
            .generate(&options(0, true, true, true, true))
            .unwrap_err();
        assert_eq!(err, PolicyError::InvalidLength);
    }

    #[test]
    fn length_one_is_valid() {
        let generator = PasswordGenerator::new();
        let password = generator
            .generate(&options(1, true, false, false, false))
            .expect("generation should succeed");
        assert_eq!(password.len(), 1);
        assert!(password.bytes().all(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn draws_are_close_to_uniform() {
        // 20k draws over the 10-digit alphabet, 2000 expected per digit.
        // The 25% band is ~12 standard deviations wide.
        let generator = PasswordGenerator::new();
        let opts = options(20_000, false, false, true, false);
        let password = generator.generate(&opts).expect("generation should succeed");

        let mut counts = [0usize; 10];
        for b in password.bytes() {
            counts[(b - b'0') as usize] += 1;
        }

        let expected = 2_000.0;
        for (digit, &count) in counts.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.25,
                "digit {} occurred {} times, outside tolerance",
                digit,
                count
            );
        }
    }

    #[test]
    fn successive_outputs_differ() {
        // The source must not be a fixed-seed PRNG: two 64-char draws over a
        // 62-char alphabet collide with negligible probability.
        let generator = PasswordGenerator::new();
        let opts = options(64, true, true, true, false);
        let first = generator.generate(&opts).expect("generation should succeed");
        let second = generator.generate(&opts).expect("generation should succeed");
        assert_ne!(first, second);
    }
}
