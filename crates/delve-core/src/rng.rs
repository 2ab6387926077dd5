//! Seeded random source for the generator
//!
//! One ChaCha8 stream per run; the same seed always yields the same dungeon.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source owned by a [`Generator`](crate::dungeon::Generator)
///
/// Room sizes and positions are drawn from it in creation order, so the
/// draw sequence is part of a seed's output.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this stream started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw below `n`; zero when `n` is zero
    pub fn rn2(&mut self, n: u32) -> u32 {
        match n {
            0 => 0,
            n => self.rng.gen_range(0..n),
        }
    }

    /// Uniform draw from `lo..=hi`, or `lo` when `hi <= lo`
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi > lo { self.rng.gen_range(lo..=hi) } else { lo }
    }

    /// Pick one item, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let len = u32::try_from(items.len()).ok().filter(|&len| len > 0)?;
        items.get(self.rn2(len) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_range_inclusive() {
        let mut rng = GameRng::new(42);
        let mut saw_lo = false;
        let mut saw_hi = false;
        for _ in 0..1000 {
            let n = rng.range(8, 10);
            assert!((8..=10).contains(&n));
            saw_lo |= n == 8;
            saw_hi |= n == 10;
        }
        assert!(saw_lo && saw_hi);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.range(8, 32), b.range(8, 32));
        }
        assert_eq!(a.seed(), 42);

        let mut c = GameRng::new(43);
        let drawn_a: Vec<u32> = (0..16).map(|_| a.rn2(1 << 20)).collect();
        let drawn_c: Vec<u32> = (0..16).map(|_| c.rn2(1 << 20)).collect();
        assert_ne!(drawn_a, drawn_c);
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(7, 3), 7);
        assert_eq!(rng.choose::<u8>(&[]), None);
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = GameRng::new(7);
        let items = [3, 1, 4, 1, 5];
        for _ in 0..50 {
            let v = rng.choose(&items).unwrap();
            assert!(items.contains(v));
        }
    }
}
