// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};

use super::{GeneratorError, Result};
use crate::models::PasswordPolicy;

/// Policy-driven password generator.
///
/// The random source must be cryptographically secure; the `CryptoRng` bound
/// keeps general-purpose generators out. `PasswordGenerator::new()` draws from
/// the operating system via `OsRng`.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    /// Generate a single password.
    ///
    /// One character of every enabled class is drawn first (the required set).
    /// The remaining `length - required` characters come from the full alphabet,
    /// and the combined sequence is shuffled so the required characters do not
    /// sit at predictable positions.
    ///
    /// When `length` is shorter than the required set, the password is sampled
    /// with replacement from the required set alone, so not every class is
    /// guaranteed to appear.
    pub fn generate_password(&mut self, policy: &PasswordPolicy) -> Result<String> {
        validate(policy)?;

        let classes = policy.selected_classes();
        let alphabet = policy.alphabet();

        let required: Vec<u8> = classes
            .iter()
            .map(|class| pick(&mut self.rng, class.chars()))
            .collect();

        if policy.length < required.len() {
            log::debug!(
                "length {} is below the {} enabled classes, sampling from the required set only",
                policy.length,
                required.len()
            );
            return Ok((0..policy.length)
                .map(|_| char::from(pick(&mut self.rng, &required)))
                .collect());
        }

        let mut chars: Vec<u8> = (0..policy.length - required.len())
            .map(|_| pick(&mut self.rng, &alphabet))
            .collect();
        chars.extend_from_slice(&required);

        chars.shuffle(&mut self.rng);

        Ok(chars.into_iter().map(char::from).collect())
    }

    /// Generate `count` passwords, each drawn independently.
    pub fn generate_many(&mut self, count: usize, policy: &PasswordPolicy) -> Result<Vec<String>> {
        validate(policy)?;

        let passwords = (0..count)
            .map(|_| self.generate_password(policy))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("generated {} password(s) of length {}", passwords.len(), policy.length);
        Ok(passwords)
    }
}

fn validate(policy: &PasswordPolicy) -> Result<()> {
    if policy.length < 1 {
        return Err(GeneratorError::InvalidPolicy(
            "password length must be >= 1".to_string(),
        ));
    }

    if policy.selected_classes().is_empty() {
        return Err(GeneratorError::InvalidPolicy(
            "at least one character set must be enabled".to_string(),
        ));
    }

    Ok(())
}

// Uniform pick; callers never pass an empty pool
fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[u8]) -> u8 {
    pool[rng.gen_range(0..pool.len())]
}
