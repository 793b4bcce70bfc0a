//! RNG module - deterministic randomness for tile spawns
//!
//! A small LCG keeps games reproducible from a seed (tests, benches and
//! replaying a reported game) without pulling in a randomness crate.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits: the low bits of a power-of-two LCG cycle with
    /// a short period, which would make `% max` alternate for even `max`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Pick an index into `weights` with probability proportional to its weight.
    ///
    /// Returns `None` if every weight is zero.
    pub fn weighted_index(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let mut roll = self.next_range(total);
        for (i, &w) in weights.iter().enumerate() {
            if roll < w {
                return Some(i);
            }
            roll -= w;
        }
        None
    }

    /// Current internal state (feeding it to [`SimpleRng::new`] resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds_and_coverage() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [0u32; 4];
        for _ in 0..4000 {
            let v = rng.next_range(4);
            assert!(v < 4);
            seen[v as usize] += 1;
        }
        for count in seen {
            assert!(count > 800, "uneven distribution: {:?}", seen);
        }
    }

    #[test]
    fn test_next_range_does_not_alternate_parity() {
        let mut rng = SimpleRng::new(99);
        let draws: Vec<u32> = (0..64).map(|_| rng.next_range(2)).collect();
        let alternating = draws.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating);
    }

    #[test]
    fn test_weighted_index() {
        let mut rng = SimpleRng::new(3);
        assert_eq!(rng.weighted_index(&[0, 0]), None);
        assert_eq!(rng.weighted_index(&[0, 5]), Some(1));
        assert_eq!(rng.weighted_index(&[5, 0]), Some(0));
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut rng = SimpleRng::new(42);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.state());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
