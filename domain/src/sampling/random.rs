//! Deterministic randomness source

/// A stream of floating-point values in `[0, 1)`.
///
/// Implementations must be reproducible: the same construction yields the
/// same sequence. Not intended for cryptographic use.
pub trait RandomSource {
    /// Draw the next value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Draw an index in `[0, bound)` as `floor(next · bound)`.
    ///
    /// `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        let index = (self.next_f64() * bound as f64).floor() as usize;
        // next_f64 < 1.0 keeps this in range; the min guards float edge cases
        index.min(bound.saturating_sub(1))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Linear congruential generator over 32-bit state.
///
/// `state ← (1664525·state + 1013904223) mod 2^32`, output `state / 2^32`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    const MULTIPLIER: u32 = 1_664_525;
    const INCREMENT: u32 = 1_013_904_223;
    const MODULUS: f64 = 4_294_967_296.0;

    /// Create a generator from a seed.
    ///
    /// Only the low 32 bits of the seed are used, so a millisecond
    /// timestamp and its 32-bit truncation produce the same stream.
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state as f64 / Self::MODULUS
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}
