//! Tie-breaking policies for equal-scored children
//!
//! The searcher asks the policy whenever a child scores exactly the same as
//! the current best. [`CoinFlip`] makes repeated searches of a tied position
//! vary; [`KeepFirst`] makes them reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Decides whether a tied candidate replaces the incumbent best child.
pub trait TieBreak {
    fn replace_incumbent(&mut self) -> bool;
}

impl<T: TieBreak + ?Sized> TieBreak for Box<T> {
    #[inline]
    fn replace_incumbent(&mut self) -> bool {
        (**self).replace_incumbent()
    }
}

/// Fair coin flip per comparison.
#[derive(Debug, Clone)]
pub struct CoinFlip {
    rng: StdRng,
}

impl CoinFlip {
    /// Seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence of flips for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CoinFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreak for CoinFlip {
    #[inline]
    fn replace_incumbent(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Never replace: the first child in move order wins ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepFirst;

impl TieBreak for KeepFirst {
    #[inline]
    fn replace_incumbent(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_first() {
        let mut tb = KeepFirst;
        assert!((0..100).all(|_| !tb.replace_incumbent()));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = CoinFlip::seeded(42);
        let mut b = CoinFlip::seeded(42);
        let xs: Vec<bool> = (0..64).map(|_| a.replace_incumbent()).collect();
        let ys: Vec<bool> = (0..64).map(|_| b.replace_incumbent()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_coin_flip_lands_both_ways() {
        let mut tb = CoinFlip::seeded(7);
        let heads = (0..1000).filter(|_| tb.replace_incumbent()).count();
        assert!(heads > 350 && heads < 650, "heads = {heads}");
    }

    #[test]
    fn test_boxed_policy() {
        let mut tb: Box<dyn TieBreak + Send> = Box::new(KeepFirst);
        assert!(!tb.replace_incumbent());
    }
}
