//! Scoped ambient execution state read implicitly by generator code.
//!
//! Generation runs under three independent slots: the current
//! [`RandomEngine`], the current target size, and a flag disabling shrink
//! candidates during the shrink search. Each slot is a thread-local stack of
//! bindings: [`ScopedSlot::bind`] pushes a value and returns a guard, and
//! dropping the guard restores the previous binding exactly once, including
//! while a panic unwinds through the scope. Restore order is strictly LIFO
//! per slot, and binding one slot never disturbs the others.
//!
//! Reading an unbound slot is a programming error in generator code, not a
//! test-data problem, and panics rather than surfacing as a shrinkable
//! failure.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::thread::LocalKey;

use crate::rng::RandomEngine;

/// A single ambient slot backed by a thread-local stack of bindings.
pub struct ScopedSlot<T: 'static> {
    name: &'static str,
    stack: &'static LocalKey<RefCell<Vec<T>>>,
}

impl<T> ScopedSlot<T> {
    const fn new(name: &'static str, stack: &'static LocalKey<RefCell<Vec<T>>>) -> Self {
        Self { name, stack }
    }

    /// Push a new binding for the lexical duration of the returned guard.
    pub fn bind(&self, value: T) -> SlotGuard<T> {
        self.stack.with(|stack| stack.borrow_mut().push(value));
        SlotGuard {
            stack: self.stack,
            _not_send: PhantomData,
        }
    }

    /// Whether any binding is currently active on this thread.
    pub fn is_bound(&self) -> bool {
        self.stack.with(|stack| !stack.borrow().is_empty())
    }

    /// Run `f` with mutable access to the innermost binding.
    ///
    /// Panics if the slot is unbound.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.stack.with(|stack| {
            let mut stack = stack.borrow_mut();
            match stack.last_mut() {
                Some(innermost) => f(innermost),
                None => panic!("read of unbound ambient slot `{}`", self.name),
            }
        })
    }

    /// Clone the innermost binding out of the slot.
    ///
    /// Panics if the slot is unbound.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(|value| value.clone())
    }
}

/// Guard returned by [`ScopedSlot::bind`]; restores the previous binding on
/// drop, on both normal exit and unwinding.
pub struct SlotGuard<T: 'static> {
    stack: &'static LocalKey<RefCell<Vec<T>>>,
    // Bindings live on the stack of the thread that pushed them.
    _not_send: PhantomData<*const ()>,
}

impl<T> Drop for SlotGuard<T> {
    fn drop(&mut self) {
        self.stack.with(|stack| {
            let popped = stack.borrow_mut().pop();
            debug_assert!(popped.is_some(), "slot binding already restored");
        });
    }
}

thread_local! {
    static RANDOM_ENGINE_STACK: RefCell<Vec<RandomEngine>> = const { RefCell::new(Vec::new()) };
    static SIZE_STACK: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
    static NO_SHRINK_STACK: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
}

/// The random source for the trial currently executing.
pub static RANDOM_ENGINE: ScopedSlot<RandomEngine> =
    ScopedSlot::new("random-engine", &RANDOM_ENGINE_STACK);

/// The target size for the trial currently executing.
pub static SIZE: ScopedSlot<u64> = ScopedSlot::new("size", &SIZE_STACK);

/// When bound to `true`, generators produce values without shrink candidates.
pub static NO_SHRINK: ScopedSlot<bool> = ScopedSlot::new("no-shrink", &NO_SHRINK_STACK);

/// The current target size.
pub fn current_size() -> u64 {
    SIZE.get()
}

/// Whether shrink candidates are currently suppressed.
pub fn no_shrink() -> bool {
    NO_SHRINK.get()
}

/// Draw one atom from the ambient random engine.
pub fn next_atom() -> u64 {
    RANDOM_ENGINE.with(|engine| engine.next_atom())
}

/// Run `f` with mutable access to the ambient random engine.
pub fn with_random_engine<R>(f: impl FnOnce(&mut RandomEngine) -> R) -> R {
    RANDOM_ENGINE.with(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn innermost_binding_wins() {
        let _outer = SIZE.bind(1);
        assert_eq!(SIZE.get(), 1);
        {
            let _inner = SIZE.bind(2);
            assert_eq!(SIZE.get(), 2);
        }
        assert_eq!(SIZE.get(), 1);
    }

    #[test]
    fn slots_are_independent() {
        let _size = SIZE.bind(7);
        let _no_shrink = NO_SHRINK.bind(true);

        assert_eq!(SIZE.get(), 7);
        assert!(NO_SHRINK.get());
        assert!(!RANDOM_ENGINE.is_bound());

        {
            let _narrower = SIZE.bind(3);
            assert_eq!(SIZE.get(), 3);
            assert!(NO_SHRINK.get());
        }
        assert_eq!(SIZE.get(), 7);
    }

    #[test]
    fn nested_bindings_restore_in_lifo_order() {
        let _a = SIZE.bind(1);
        {
            let _b = SIZE.bind(2);
            {
                let _c = SIZE.bind(3);
                assert_eq!(SIZE.get(), 3);
            }
            assert_eq!(SIZE.get(), 2);
        }
        assert_eq!(SIZE.get(), 1);
    }

    #[test]
    fn binding_is_restored_after_panic() {
        let _outer = SIZE.bind(10);

        let unwound = catch_unwind(AssertUnwindSafe(|| {
            let _inner = SIZE.bind(20);
            assert_eq!(SIZE.get(), 20);
            panic!("property blew up");
        }));

        assert!(unwound.is_err());
        assert_eq!(SIZE.get(), 10);
    }

    #[test]
    fn all_slots_restore_after_panic() {
        let _size = SIZE.bind(1);
        let _engine = RANDOM_ENGINE.bind(RandomEngine::from_seed(5));
        let _no_shrink = NO_SHRINK.bind(false);

        let before = RANDOM_ENGINE.with(|e| e.clone().next_atom());

        let unwound = catch_unwind(AssertUnwindSafe(|| {
            let _size = SIZE.bind(99);
            let _engine = RANDOM_ENGINE.bind(RandomEngine::from_seed(6));
            let _no_shrink = NO_SHRINK.bind(true);
            panic!("boom");
        }));

        assert!(unwound.is_err());
        assert_eq!(SIZE.get(), 1);
        assert!(!NO_SHRINK.get());
        assert_eq!(RANDOM_ENGINE.with(|e| e.clone().next_atom()), before);
    }

    #[test]
    #[should_panic(expected = "read of unbound ambient slot `size`")]
    fn reading_unbound_slot_is_fatal() {
        // Each test runs on its own thread, so the slot starts unbound here.
        let _ = SIZE.get();
    }

    #[test]
    fn ambient_engine_draws_advance_the_binding() {
        let _engine = RANDOM_ENGINE.bind(RandomEngine::from_seed(123));
        let first = next_atom();
        let second = next_atom();

        let mut reference = RandomEngine::from_seed(123);
        assert_eq!(first, reference.next_atom());
        assert_eq!(second, reference.next_atom());
    }
}
