//! Value-level mutation operators.
//!
//! Arithmetic saturates at the `i32` bounds, so repeated doubling pins a side
//! at `i32::MAX` (or `i32::MIN`) instead of wrapping.

use rand::Rng;
use trifuzz_ir::Triple;

use crate::config::{FuzzConfig, IntRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationOp {
    /// Add a small random offset.
    Delta,
    /// Multiply by two.
    Double,
    /// Subtract one, never going below zero.
    DecrementFloor,
    /// Replace with a fresh random value.
    Reset,
}

impl MutationOp {
    pub const ALL: [MutationOp; 4] = [
        MutationOp::Delta,
        MutationOp::Double,
        MutationOp::DecrementFloor,
        MutationOp::Reset,
    ];

    /// Pick an operator uniformly at random.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn apply<R: Rng + ?Sized>(
        &self,
        value: i32,
        bounds: &MutationBounds,
        rng: &mut R,
    ) -> i32 {
        match self {
            MutationOp::Delta => value.saturating_add(bounds.delta.sample(rng)),
            MutationOp::Double => value.saturating_mul(2),
            MutationOp::DecrementFloor => value.saturating_sub(1).max(0),
            MutationOp::Reset => bounds.reset.sample(rng),
        }
    }
}

/// Ranges the random operators draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationBounds {
    pub delta: IntRange,
    pub reset: IntRange,
}

impl MutationBounds {
    pub fn from_config(config: &FuzzConfig) -> Self {
        Self {
            delta: config.delta_range,
            reset: config.reset_range,
        }
    }
}

/// Mutate each side of `base` with an independently chosen operator.
pub fn mutate_triple<R: Rng + ?Sized>(
    base: Triple,
    bounds: &MutationBounds,
    rng: &mut R,
) -> Triple {
    let mut side = |value: i32| {
        let op = MutationOp::choose(&mut *rng);
        op.apply(value, bounds, &mut *rng)
    };
    let a = side(base.a);
    let b = side(base.b);
    let c = side(base.c);
    Triple::new(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::shard_rng;

    fn fixed_bounds() -> MutationBounds {
        MutationBounds {
            delta: IntRange::new(3, 4),
            reset: IntRange::new(9, 10),
        }
    }

    #[test]
    fn test_delta_adds_offset() {
        let mut rng = shard_rng(1, 0);
        assert_eq!(MutationOp::Delta.apply(10, &fixed_bounds(), &mut rng), 13);
    }

    #[test]
    fn test_double() {
        let mut rng = shard_rng(1, 0);
        assert_eq!(MutationOp::Double.apply(7, &fixed_bounds(), &mut rng), 14);
        assert_eq!(MutationOp::Double.apply(-7, &fixed_bounds(), &mut rng), -14);
    }

    #[test]
    fn test_double_saturates() {
        let mut rng = shard_rng(1, 0);
        let bounds = fixed_bounds();
        assert_eq!(MutationOp::Double.apply(i32::MAX, &bounds, &mut rng), i32::MAX);
        assert_eq!(MutationOp::Double.apply(i32::MIN, &bounds, &mut rng), i32::MIN);
    }

    #[test]
    fn test_decrement_floor_never_negative() {
        let mut rng = shard_rng(1, 0);
        let bounds = fixed_bounds();
        assert_eq!(MutationOp::DecrementFloor.apply(0, &bounds, &mut rng), 0);
        assert_eq!(MutationOp::DecrementFloor.apply(1, &bounds, &mut rng), 0);
        assert_eq!(MutationOp::DecrementFloor.apply(5, &bounds, &mut rng), 4);
        assert_eq!(MutationOp::DecrementFloor.apply(i32::MIN, &bounds, &mut rng), 0);
        for v in [0, 1, 2, 999, i32::MAX] {
            assert!(MutationOp::DecrementFloor.apply(v, &bounds, &mut rng) >= 0);
        }
    }

    #[test]
    fn test_reset_ignores_input() {
        let mut rng = shard_rng(1, 0);
        assert_eq!(MutationOp::Reset.apply(-500, &fixed_bounds(), &mut rng), 9);
    }

    #[test]
    fn test_choose_reaches_every_operator() {
        let mut rng = shard_rng(3, 0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(MutationOp::choose(&mut rng));
        }
        assert_eq!(seen.len(), MutationOp::ALL.len());
    }

    #[test]
    fn test_mutate_triple_is_deterministic_per_seed() {
        let base = Triple::new(3, 4, 5);
        let bounds = MutationBounds::from_config(&FuzzConfig::default());
        let first = mutate_triple(base, &bounds, &mut shard_rng(11, 0));
        let second = mutate_triple(base, &bounds, &mut shard_rng(11, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounds_follow_config() {
        let config = FuzzConfig {
            delta_range: IntRange::new(1, 2),
            reset_range: IntRange::new(50, 51),
            ..FuzzConfig::default()
        };
        let bounds = MutationBounds::from_config(&config);
        let mut rng = shard_rng(5, 0);
        assert_eq!(MutationOp::Delta.apply(10, &bounds, &mut rng), 11);
        assert_eq!(MutationOp::Reset.apply(10, &bounds, &mut rng), 50);
    }
}
