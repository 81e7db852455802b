//! Stable string hashing and seeded pseudo-random numbers.
//!
//! Every piece of "randomness" in the modeling path is derived from these two functions so
//! that identical inputs reproduce identical outputs, bit for bit, across runs and processes.

/// A 32-bit non-negative seed derived from input text.
pub type Seed = u32;

/// Hashes a string with the 32-bit rolling hash `h = (h << 5) - h + code_unit`.
///
/// The accumulator wraps to a signed 32-bit integer after every step and the absolute value of
/// the final accumulator is returned. Code units are UTF-16, so the result for non-ASCII input
/// matches what a browser-side consumer computes for the same string.
pub fn stable_hash(text: &str) -> Seed {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Combines two hashed keys into one seed, wrapping at 32 bits.
pub fn combine_seeds(a: Seed, b: Seed) -> Seed {
    a.wrapping_add(b)
}

/// Maps a seed to a value in `[0, 1)` using the fractional part of `sin(seed) * 10000`.
pub fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    let fraction = x - x.floor();
    // `x - floor(x)` rounds up to exactly 1.0 for tiny negative x.
    if fraction >= 1.0 || !fraction.is_finite() {
        0.0
    } else {
        fraction
    }
}

/// A sequential generator that walks `seeded_random` over consecutive seeds.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRng {
    state: f64,
}

impl SeededRng {
    pub fn new(seed: Seed) -> Self {
        Self {
            state: f64::from(seed),
        }
    }

    /// Returns the next value in `[0, 1)` and advances the state by one.
    pub fn next_f64(&mut self) -> f64 {
        let value = seeded_random(self.state);
        self.state += 1.0;
        value
    }

    /// Returns a value in `[low, low + span)`.
    pub fn next_in(&mut self, low: f64, span: f64) -> f64 {
        low + self.next_f64() * span
    }

    /// Returns an index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}
