//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Drives noise-texture generation. Same seed, same texture, on every
//! platform: the core algorithm is pure integer arithmetic.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG with shift parameters (13, 7, 17).
///
/// A seed of 0 is the all-zeros fixed point of xorshift and is replaced
/// with a non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback used when the caller provides seed 0.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed (0 is replaced, see above).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed byte, taken from the top eight bits
    /// of the next word. Used for noise texels in 0..=255.
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// Returns a uniformly distributed f64 in [0, 1), using the upper 53
    /// bits for full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        // Golden value for xorshift64(seed=42, shifts=13,7,17). If this
        // breaks, every seeded noise texture changes.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0, "seed=0 guard failed");
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn same_seed_produces_identical_sequences() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "diverged at index {i}");
        }
    }

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = Xorshift64::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "next_f64() = {v} at iteration {i}");
        }
    }

    #[test]
    fn next_byte_covers_the_full_range() {
        let mut rng = Xorshift64::new(7);
        let mut seen = [false; 256];
        for _ in 0..100_000 {
            seen[rng.next_byte() as usize] = true;
        }
        let covered = seen.iter().filter(|&&s| s).count();
        assert_eq!(covered, 256, "only {covered} of 256 byte values produced");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v), "out of range: {v}");
                }
            }

            #[test]
            fn byte_stream_is_roughly_uniform(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 8];
                for _ in 0..8000 {
                    buckets[(rng.next_byte() >> 5) as usize] += 1;
                }
                // Expected ~1000 per bucket; loose bound to stay unflaky.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(count >= 500, "bucket {i} has {count} values");
                }
            }
        }
    }
}
