use rand::distributions::{Distribution, Uniform};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Length of the string the CLI prints when no override is given.
pub const DEFAULT_LENGTH: usize = 40;

/// Seeds a fresh engine from the platform entropy source.
///
/// Callers that generate repeatedly should seed once and reuse the engine
/// with [`generate_with_rng`] rather than paying the entropy-source cost per
/// draw.
pub fn seed_engine() -> Result<StdRng> {
    StdRng::from_rng(OsRng).map_err(Error::RandomSourceUnavailable)
}

/// Generates a random string of `length` characters over the default
/// 52-letter alphabet.
///
/// Seeds a fresh engine per call, so output is never reproducible across
/// invocations. `length == 0` yields the empty string.
pub fn generate(length: usize) -> Result<String> {
    let mut rng = seed_engine()?;
    Ok(generate_with_rng(&mut rng, &Alphabet::latin(), length))
}

/// Generates a random string of `length` characters over `alphabet`, drawing
/// from a caller-owned engine.
///
/// Each character is an independent uniform draw over the alphabet's index
/// range; repetition is allowed. Passing a seeded engine makes the output
/// deterministic, which is how the statistical tests below exercise it.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    alphabet: &Alphabet,
    length: usize,
) -> String {
    let indices = Uniform::from(0..alphabet.len());

    let mut result = String::with_capacity(length);
    for _ in 0..length {
        result.push(alphabet.symbol(indices.sample(rng)));
    }
    result
}
