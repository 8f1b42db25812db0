//! Random sources for style generation.
//!
//! Generation takes its randomness through [`RandomSource`] so callers can
//! inject a seeded PCG32 stream, OS entropy, or a scripted sequence in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A stream of uniform values in `[0, 1)`.
///
/// All draws the composer makes are expressed through the provided
/// methods, so a source only needs to implement [`RandomSource::next_f64`].
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Index in `0..len`, as `floor(u * len)`.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform element of `items`.
    fn pick<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        items[self.index(items.len())]
    }

    /// `lo + u * (hi - lo)`, in `[lo, hi)`.
    ///
    /// Rounding can carry `u` close to 1 up to exactly `hi`; such draws
    /// land on the largest value below `hi` instead.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let value = lo + self.next_f64() * (hi - lo);
        if hi > lo && value >= hi {
            next_below(hi)
        } else {
            value
        }
    }

    /// True when the draw exceeds `threshold`, i.e. with probability
    /// `1 - threshold`.
    fn chance_above(&mut self, threshold: f64) -> bool {
        self.next_f64() > threshold
    }

    /// Whole degrees in `[0, 360)`, as `floor(u * 360)`.
    fn whole_degrees(&mut self) -> u16 {
        self.index(360) as u16
    }
}

/// Largest `f64` strictly below a finite `x`.
fn next_below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Create an RNG from a fresh OS-provided seed, returning the seed used.
    pub fn from_entropy() -> (Self, u32) {
        let seed = rand::random::<u32>();
        (Self::new(seed), seed)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

impl RandomSource for DeterministicRng {
    fn next_f64(&mut self) -> f64 {
        self.gen_f64()
    }
}

/// A source that always returns the same value.
///
/// `ConstantSource::new(0.0)` drives every draw to its lower bound;
/// [`ConstantSource::just_below_one`] drives every draw to its upper bound.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource(f64);

impl ConstantSource {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The largest `f64` below 1.0.
    pub fn just_below_one() -> Self {
        Self(1.0 - f64::EPSILON / 2.0)
    }
}

impl RandomSource for ConstantSource {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// A source that replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence source needs at least one value");
        Self {
            values,
            position: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_output() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_f64(), rng2.next_f64());
        }
    }

    #[test]
    fn test_different_seeds_produce_different_output() {
        let mut rng1 = DeterministicRng::new(42);
        let mut rng2 = DeterministicRng::new(43);

        let any_different = (0..10).any(|_| rng1.next_f64() != rng2.next_f64());
        assert!(any_different);
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(ConstantSource::new(0.0).index(5), 0);
        assert_eq!(ConstantSource::just_below_one().index(5), 4);
        assert_eq!(ConstantSource::new(0.5).index(5), 2);
        // out-of-contract 1.0 still stays in bounds
        assert_eq!(ConstantSource::new(1.0).index(5), 4);
    }

    #[test]
    fn test_whole_degrees() {
        assert_eq!(ConstantSource::new(0.0).whole_degrees(), 0);
        assert_eq!(ConstantSource::just_below_one().whole_degrees(), 359);
    }

    #[test]
    fn test_range_stays_below_upper_bound() {
        let mut top = ConstantSource::just_below_one();
        assert!(top.range(0.5, 1.5) < 1.5);
        assert!(top.range(20.0, 50.0) < 50.0);
        assert!(top.range(0.0, 100.0) < 100.0);
        assert!(top.range(-2.0, 0.0) < 0.0);
        assert_eq!(top.range(1.0, 1.0), 1.0);
        assert_eq!(ConstantSource::new(0.0).range(0.5, 1.5), 0.5);
        assert_eq!(ConstantSource::new(0.5).range(20.0, 50.0), 35.0);
    }

    #[test]
    fn test_chance_above_is_strict() {
        assert!(!ConstantSource::new(0.5).chance_above(0.5));
        assert!(ConstantSource::new(0.51).chance_above(0.5));
        assert!(!ConstantSource::new(0.0).chance_above(0.0));
    }

    #[test]
    fn test_sequence_source_cycles() {
        let mut source = SequenceSource::new(vec![0.1, 0.2]);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.next_f64(), 0.2);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw<R: RandomSource>(mut source: R) -> f64 {
            source.next_f64()
        }

        let mut rng = DeterministicRng::new(7);
        let expected = DeterministicRng::new(7).next_f64();
        assert_eq!(draw(&mut rng), expected);
        assert_ne!(draw(&mut rng), expected);
    }
}
