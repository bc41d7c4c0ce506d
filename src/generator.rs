//! The generator abstraction and basic combinators.

use std::rc::Rc;

use crate::context;
use crate::tree::{ShrinkFn, ValueTree};

/// A producer of value trees.
///
/// A generator reads the ambient [`context`] — the current random engine and
/// target size — rather than receiving them as arguments, and returns its
/// value together with a lazy tree of shrink candidates. Two invocations
/// under identical context state must produce the same root value; this is
/// what makes a trial reproducible from its seed and size alone.
pub trait Generator {
    /// The type of values this generator produces.
    type Value;

    /// Generate a value tree under the current execution context.
    fn generate(&self) -> ValueTree<Self::Value>;

    /// Map generated values to a different type.
    ///
    /// Unlike shrinkers working backwards from an already-mapped value, the
    /// mapping is applied across the whole value tree, so shrink candidates
    /// survive the transformation.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Value) -> U + Clone + 'static,
        U: 'static,
    {
        Map {
            generator: self,
            mapper: f,
        }
    }
}

/// Wrap a value and its shrinking function into a tree, honoring the ambient
/// no-shrink directive.
///
/// Generator implementations should build their trees through this helper:
/// when the shrink search re-executes a property, nested generation must not
/// spawn recursive shrink attempts, so the value comes back as a leaf.
pub fn shrinkable<T: Clone + 'static>(value: T, shrink: ShrinkFn<T>) -> ValueTree<T> {
    if context::no_shrink() {
        ValueTree::leaf(value)
    } else {
        ValueTree::unfold(value, shrink)
    }
}

/// A generator that always produces the same value, with no shrinks.
#[derive(Debug, Clone)]
pub struct ConstantGenerator<T> {
    value: T,
}

/// Create a generator that always produces `value`.
pub fn constant<T: Clone>(value: T) -> ConstantGenerator<T> {
    ConstantGenerator { value }
}

impl<T: Clone + 'static> Generator for ConstantGenerator<T> {
    type Value = T;

    fn generate(&self) -> ValueTree<T> {
        ValueTree::leaf(self.value.clone())
    }
}

/// A generator that maps values from one type to another.
pub struct Map<G, F> {
    generator: G,
    mapper: F,
}

impl<G, F, U> Generator for Map<G, F>
where
    G: Generator,
    G::Value: 'static,
    F: Fn(&G::Value) -> U + Clone + 'static,
    U: 'static,
{
    type Value = U;

    fn generate(&self) -> ValueTree<U> {
        let f = self.mapper.clone();
        self.generator.generate().map(Rc::new(move |value| f(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::NO_SHRINK;

    fn countdown_tree(value: u64) -> ValueTree<u64> {
        shrinkable(value, Rc::new(|&v| Box::new((0..v).rev())))
    }

    #[test]
    fn constant_generator_yields_a_leaf() {
        let tree = constant(42).generate();
        assert_eq!(*tree.value(), 42);
        assert_eq!(tree.shrinks().count(), 0);
    }

    #[test]
    fn shrinkable_builds_a_full_tree_by_default() {
        let _no_shrink = NO_SHRINK.bind(false);
        let tree = countdown_tree(3);
        let candidates: Vec<u64> = tree.shrinks().map(|t| *t.value()).collect();
        assert_eq!(candidates, vec![2, 1, 0]);
    }

    #[test]
    fn shrinkable_collapses_to_a_leaf_under_no_shrink() {
        let _no_shrink = NO_SHRINK.bind(true);
        let tree = countdown_tree(3);
        assert_eq!(*tree.value(), 3);
        assert_eq!(tree.shrinks().count(), 0);
    }

    #[test]
    fn map_preserves_shrink_candidates() {
        let _no_shrink = NO_SHRINK.bind(false);

        struct Countdown;
        impl Generator for Countdown {
            type Value = u64;
            fn generate(&self) -> ValueTree<u64> {
                countdown_tree(2)
            }
        }

        let tree = Countdown.map(|v| format!("<{}>", v)).generate();
        assert_eq!(tree.value(), "<2>");
        let candidates: Vec<String> = tree.shrinks().map(|t| t.value().clone()).collect();
        assert_eq!(candidates, vec!["<1>".to_string(), "<0>".to_string()]);
    }
}
