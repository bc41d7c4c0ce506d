//! Rose trees of generated values and their shrink candidates.

use std::rc::Rc;

/// An iterator of progressively smaller candidate values.
pub type ShrinkIter<T> = Box<dyn Iterator<Item = T>>;

/// A shrinking function in the classic form: given a value, produce the
/// ordered candidates considered smaller by the generator's own ordering.
pub type ShrinkFn<T> = Rc<dyn Fn(&T) -> ShrinkIter<T>>;

type ChildrenFn<T> = Rc<dyn Fn() -> Box<dyn Iterator<Item = ValueTree<T>>>>;

/// A generated value paired with a lazy tree of shrink candidates.
///
/// The child sequence is computed on demand and may be conceptually
/// unbounded. It is restartable: [`ValueTree::shrinks`] can be called any
/// number of times and, as long as the underlying shrink functions are pure,
/// yields the same sequence each time.
pub struct ValueTree<T> {
    value: T,
    children: ChildrenFn<T>,
}

impl<T: 'static> ValueTree<T> {
    /// A tree with no shrink candidates.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Rc::new(|| Box::new(std::iter::empty())),
        }
    }

    /// A tree whose child sequence is produced by `children` on each read.
    pub fn with_children(
        value: T,
        children: impl Fn() -> Box<dyn Iterator<Item = ValueTree<T>>> + 'static,
    ) -> Self {
        Self {
            value,
            children: Rc::new(children),
        }
    }

    /// Build a tree by applying a shrinking function recursively: each
    /// candidate becomes a child tree shrunk by the same function.
    pub fn unfold(value: T, shrink: ShrinkFn<T>) -> Self
    where
        T: Clone,
    {
        let root = value.clone();
        let children: ChildrenFn<T> = Rc::new(move || {
            let recurse = Rc::clone(&shrink);
            Box::new(shrink(&root).map(move |candidate| {
                ValueTree::unfold(candidate, Rc::clone(&recurse))
            }))
        });
        Self { value, children }
    }

    /// The root value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the tree, keeping only the root value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Restart and return the ordered sequence of shrink-candidate subtrees.
    pub fn shrinks(&self) -> Box<dyn Iterator<Item = ValueTree<T>>> {
        (self.children)()
    }

    /// Map every value in the tree.
    ///
    /// The root is mapped eagerly; children are mapped lazily as the shrink
    /// sequence is walked. Evaluating a node is therefore the point at which
    /// `f` runs against that node's value.
    pub fn map<U: 'static>(&self, f: Rc<dyn Fn(&T) -> U>) -> ValueTree<U> {
        let value = f(&self.value);
        let children = Rc::clone(&self.children);
        let mapped: ChildrenFn<U> = Rc::new(move || {
            let f = Rc::clone(&f);
            Box::new(children().map(move |child| child.map(Rc::clone(&f))))
        });
        ValueTree {
            value,
            children: mapped,
        }
    }
}

impl<T: Clone> Clone for ValueTree<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            children: Rc::clone(&self.children),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ValueTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueTree")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
