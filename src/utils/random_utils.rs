use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::debug;

/// Alphabet used when the caller supplies no options
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Random string generator owning its own seeded RNG.
///
/// Not cryptographically secure. Use one per worker, or go through
/// [`RandomUtils`] for the shared instance.
#[derive(Debug, Clone)]
pub struct RandomStringGenerator {
    rng: StdRng,
    seed: u64,
}

impl RandomStringGenerator {
    /// Seed from the wall clock in milliseconds
    pub fn from_time() -> Self {
        let seed = chrono::Utc::now().timestamp_millis() as u64;
        debug!(seed, "Seeding random string generator from clock");
        Self::with_seed(seed)
    }

    /// Reproducible generator for a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw `length` chars uniformly, with replacement, from `options`.
    ///
    /// Empty `options` fall back to [`DEFAULT_ALPHABET`]. Lengths 0 and 1
    /// both produce `""`.
    pub fn generate(&mut self, length: usize, options: &[char]) -> String {
        if length <= 1 {
            return String::new();
        }

        if options.is_empty() {
            let alphabet = DEFAULT_ALPHABET.as_bytes();
            return (0..length)
                .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())] as char)
                .collect();
        }

        (0..length)
            .map(|_| options[self.rng.gen_range(0..options.len())])
            .collect()
    }

    /// Same as [`RandomStringGenerator::generate`] with the options given as a string
    pub fn generate_from(&mut self, length: usize, alphabet: &str) -> String {
        let options: Vec<char> = alphabet.chars().collect();
        self.generate(length, &options)
    }
}

static SHARED_GENERATOR: OnceLock<Mutex<RandomStringGenerator>> = OnceLock::new();

/// Process-wide generator, seeded from the clock on first use and never reset
fn shared_generator() -> MutexGuard<'static, RandomStringGenerator> {
    SHARED_GENERATOR
        .get_or_init(|| Mutex::new(RandomStringGenerator::from_time()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Random string helpers backed by the shared generator
pub struct RandomUtils;

impl RandomUtils {
    pub fn random(length: usize, options: &[char]) -> String {
        shared_generator().generate(length, options)
    }

    pub fn random_alphanumeric(length: usize) -> String {
        Self::random(length, &[])
    }
}
