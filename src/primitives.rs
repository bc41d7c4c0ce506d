//! Generators for primitive values, enough to exercise the engine end to end.

use std::fmt;
use std::rc::Rc;

use num_traits::PrimInt;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;

use crate::context;
use crate::generator::{Generator, shrinkable};
use crate::tree::{ShrinkIter, ValueTree};

/// Generator for boolean values; `true` shrinks to `false`.
#[derive(Debug, Clone)]
pub struct BoolGenerator;

impl Generator for BoolGenerator {
    type Value = bool;

    fn generate(&self) -> ValueTree<bool> {
        let value = context::next_atom() & 1 == 1;
        shrinkable(
            value,
            Rc::new(|&v| -> ShrinkIter<bool> {
                if v {
                    Box::new(std::iter::once(false))
                } else {
                    Box::new(std::iter::empty())
                }
            }),
        )
    }
}

/// Generator for integers within an inclusive range.
///
/// Shrinking halves the distance towards zero when the range contains it,
/// otherwise towards the range minimum.
#[derive(Debug, Clone)]
pub struct IntGenerator<T> {
    min: T,
    max: T,
}

impl<T: PrimInt> IntGenerator<T> {
    /// Create a generator over `min..=max`.
    pub fn new(min: T, max: T) -> Self {
        assert!(min <= max, "IntGenerator range must not be empty");
        Self { min, max }
    }

    /// Create a generator over the full range of the type.
    pub fn full_range() -> Self {
        Self::new(T::min_value(), T::max_value())
    }
}

impl<T> Generator for IntGenerator<T>
where
    T: PrimInt + SampleUniform + fmt::Debug + 'static,
{
    type Value = T;

    fn generate(&self) -> ValueTree<T> {
        let (min, max) = (self.min, self.max);
        let value = context::with_random_engine(|rng| rng.gen_range(min..=max));
        shrinkable(
            value,
            Rc::new(move |&v| -> ShrinkIter<T> {
                Box::new(shrink_towards_target(v, min, max).into_iter())
            }),
        )
    }
}

/// Candidates between `value` and its shrink target, halving the distance at
/// each step, ordered from closest-to-`value` down to the target itself.
/// The target is zero when the range contains it, otherwise the range bound
/// nearest zero.
fn shrink_towards_target<T: PrimInt>(value: T, min: T, max: T) -> Vec<T> {
    let zero = T::zero();
    let one = T::one();
    let target = if min <= zero && zero <= max {
        zero
    } else if max < zero {
        max
    } else {
        min
    };

    if value == target {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    let mut current = value;
    while current != target {
        let diff = if current > target {
            current - target
        } else {
            target - current
        };
        let step = if diff == one { one } else { diff / (one + one) };
        current = if current > target {
            current - step
        } else {
            current + step
        };
        if current != value {
            candidates.push(current);
        }
        if current == target {
            break;
        }
    }
    candidates
}

/// Generator whose value is the ambient target size.
///
/// A size `n` shrinks through every smaller size in decreasing order:
/// `n-1, n-2, ..., 0`.
#[derive(Debug, Clone)]
pub struct SizeGenerator;

impl Generator for SizeGenerator {
    type Value = u64;

    fn generate(&self) -> ValueTree<u64> {
        let value = context::current_size();
        shrinkable(
            value,
            Rc::new(|&v| -> ShrinkIter<u64> { Box::new((0..v).rev()) }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{NO_SHRINK, RANDOM_ENGINE, SIZE, SlotGuard};
    use crate::rng::RandomEngine;

    type TrialScope = (SlotGuard<RandomEngine>, SlotGuard<u64>, SlotGuard<bool>);

    fn bind_trial(seed: u64, size: u64) -> TrialScope {
        let engine = RANDOM_ENGINE.bind(RandomEngine::from_seed(seed));
        let size = SIZE.bind(size);
        let no_shrink = NO_SHRINK.bind(false);
        (engine, size, no_shrink)
    }

    #[test]
    fn bool_generator_shrinks_true_to_false() {
        let _scope = bind_trial(1, 0);

        let tree = ValueTree::unfold(
            true,
            Rc::new(|&v| -> ShrinkIter<bool> {
                if v {
                    Box::new(std::iter::once(false))
                } else {
                    Box::new(std::iter::empty())
                }
            }),
        );
        let candidates: Vec<bool> = tree.shrinks().map(|t| *t.value()).collect();
        assert_eq!(candidates, vec![false]);

        // Generated trees follow the same rule.
        let generated = BoolGenerator.generate();
        if *generated.value() {
            assert_eq!(generated.shrinks().count(), 1);
        } else {
            assert_eq!(generated.shrinks().count(), 0);
        }
    }

    #[test]
    fn int_generator_stays_within_range() {
        let _scope = bind_trial(7, 0);

        for _ in 0..50 {
            let tree = IntGenerator::new(-5i64, 5).generate();
            assert!((-5..=5).contains(tree.value()));
        }
    }

    #[test]
    fn int_generation_is_deterministic_per_seed() {
        let generate = || {
            let _scope = bind_trial(99, 0);
            *IntGenerator::new(0i64, 1_000_000).generate().value()
        };
        assert_eq!(generate(), generate());
    }

    #[test]
    fn shrink_halves_towards_zero() {
        assert_eq!(
            shrink_towards_target(100i64, 0, 100),
            vec![50, 25, 13, 7, 4, 2, 1, 0]
        );
    }

    #[test]
    fn shrink_targets_the_minimum_when_zero_is_below_the_range() {
        let candidates = shrink_towards_target(20i64, 7, 100);
        assert!(candidates.iter().all(|&c| c >= 7));
        assert_eq!(candidates.last(), Some(&7));
    }

    #[test]
    fn shrink_targets_the_maximum_when_zero_is_above_the_range() {
        let candidates = shrink_towards_target(-50i64, -100, -10);
        assert!(candidates.iter().all(|&c| (-50..=-10).contains(&c)));
        assert_eq!(candidates.last(), Some(&-10));
    }

    #[test]
    fn shrink_of_target_is_empty() {
        assert_eq!(shrink_towards_target(0i64, 0, 100), Vec::<i64>::new());
        assert_eq!(shrink_towards_target(7i64, 7, 100), Vec::<i64>::new());
    }

    #[test]
    fn negative_values_shrink_towards_zero() {
        let candidates = shrink_towards_target(-100i64, -1000, 0);
        assert_eq!(candidates.last(), Some(&0));
        assert!(candidates.iter().all(|&c| (-100..=0).contains(&c)));
    }

    #[test]
    fn size_generator_returns_the_ambient_size() {
        let _scope = bind_trial(1, 17);

        let tree = SizeGenerator.generate();
        assert_eq!(*tree.value(), 17);

        let candidates: Vec<u64> = tree.shrinks().map(|t| *t.value()).collect();
        let expected: Vec<u64> = (0..17).rev().collect();
        assert_eq!(candidates, expected);
    }
}
