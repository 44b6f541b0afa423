use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the "pick k of n" choice used when filling a meal.
pub trait ItemPicker {
    /// Return `min(k, n)` distinct indices in `0..n`.
    fn pick(&mut self, n: usize, k: usize) -> Vec<usize>;
}

/// Uniform sampling without replacement backed by any `rand` generator.
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker for tests and `--seed` runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ItemPicker for RandomPicker<R> {
    fn pick(&mut self, n: usize, k: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, n, k.min(n)).into_vec()
    }
}

/// Always picks the first `k` indices. Deterministic stand-in for randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl ItemPicker for FirstPicker {
    fn pick(&mut self, n: usize, k: usize) -> Vec<usize> {
        (0..k.min(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_picker_distinct_and_bounded() {
        let mut picker = RandomPicker::seeded(7);
        for _ in 0..50 {
            let picks = picker.pick(6, 2);
            assert_eq!(picks.len(), 2);
            let unique: HashSet<usize> = picks.iter().copied().collect();
            assert_eq!(unique.len(), 2);
            assert!(picks.iter().all(|&i| i < 6));
        }
    }

    #[test]
    fn test_random_picker_caps_at_n() {
        let mut picker = RandomPicker::seeded(7);
        assert_eq!(picker.pick(1, 2), vec![0]);
        assert!(picker.pick(0, 2).is_empty());
    }

    #[test]
    fn test_seeded_pickers_agree() {
        let mut a = RandomPicker::seeded(99);
        let mut b = RandomPicker::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.pick(10, 2), b.pick(10, 2));
        }
    }

    #[test]
    fn test_first_picker() {
        assert_eq!(FirstPicker.pick(5, 2), vec![0, 1]);
        assert_eq!(FirstPicker.pick(1, 2), vec![0]);
    }
}
