use rand::distr::{Distribution, slice::Choose};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn int_with<R: Rng>(rng: &mut R, limit: u64) -> Result<u64> {
    if limit == 0 {
        return Err(Error::InvalidArgument("limit must be positive"));
    }
    return Ok(rng.random_range(0..limit));
}

fn string_with<R: Rng>(rng: &mut R, length: usize, alphabet: &str) -> Result<String> {
    let chars: Vec<char> = alphabet.chars().collect();
    let chars_dist =
        Choose::new(&chars).map_err(|_| Error::InvalidArgument("alphabet must not be empty"))?;
    return Ok(chars_dist.sample_iter(rng).take(length).collect());
}

fn letters_with<R: Rng>(rng: &mut R, length: usize) -> String {
    let letters = DEFAULT_ALPHABET.as_bytes();
    return (0..length)
        .map(|_| char::from(letters[rng.random_range(0..letters.len())]))
        .collect();
}

/// Uniform integer in `[0, limit)` from the thread-local generator.
pub fn random_int(limit: u64) -> Result<u64> {
    return int_with(&mut rand::rng(), limit);
}

/// `length` characters drawn uniformly, with replacement, from `alphabet`.
pub fn random_string_from(length: usize, alphabet: &str) -> Result<String> {
    return string_with(&mut rand::rng(), length, alphabet);
}

/// `length` ASCII letters.
pub fn random_string(length: usize) -> String {
    return letters_with(&mut rand::rng(), length);
}

/// Generator with its own state, for suites that need reproducible data.
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn new() -> Self {
        return Self {
            rng: StdRng::from_os_rng(),
        };
    }

    pub fn seeded(seed: u64) -> Self {
        return Self {
            rng: StdRng::seed_from_u64(seed),
        };
    }

    pub fn int(&mut self, limit: u64) -> Result<u64> {
        return int_with(&mut self.rng, limit);
    }

    pub fn string_from(&mut self, length: usize, alphabet: &str) -> Result<String> {
        return string_with(&mut self.rng, length, alphabet);
    }

    pub fn string(&mut self, length: usize) -> String {
        return letters_with(&mut self.rng, length);
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        return Self::new();
    }
}
