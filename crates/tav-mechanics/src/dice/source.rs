//! Pluggable sources of die faces.

use rand::Rng;

/// Something that can produce uniform die faces.
///
/// Every [`rand::Rng`] is a source, so a seeded `StdRng` gives reproducible
/// rolls. [`FixedSequence`] replays predetermined faces for tests.
pub trait RandomSource {
    /// Draw one face in `1..=sides`. A zero-sided die reads as one side.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed list of faces, cycling when it runs out.
///
/// Faces outside `1..=sides` are clamped into range so a replayed roll is
/// still a legal roll.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<u32>,
    next: usize,
}

impl FixedSequence {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for FixedSequence {
    fn roll_die(&mut self, sides: u32) -> u32 {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.next % self.values.len()];
        self.next = (self.next + 1) % self.values.len();
        value.clamp(1, sides.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_sequence_replays_in_order_and_cycles() {
        let mut src = FixedSequence::new([4, 5]);
        assert_eq!(src.roll_die(6), 4);
        assert_eq!(src.roll_die(6), 5);
        assert_eq!(src.roll_die(6), 4);
    }

    #[test]
    fn fixed_sequence_clamps() {
        let mut src = FixedSequence::new([0, 9]);
        assert_eq!(src.roll_die(6), 1);
        assert_eq!(src.roll_die(6), 6);
    }

    #[test]
    fn empty_fixed_sequence_yields_ones() {
        let mut src = FixedSequence::new(Vec::new());
        assert_eq!(src.roll_die(20), 1);
    }

    #[test]
    fn zero_sides_yield_one() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(rng.roll_die(0), 1);
        assert_eq!(FixedSequence::new([5]).roll_die(0), 1);
    }

    #[test]
    fn rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let v = rng.roll_die(6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(a.roll_die(20), b.roll_die(20));
        }
    }
}
