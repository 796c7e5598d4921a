//! Once-traversable iterators holding at most one element.
//!
//! These are the sequences through which `Try` and `Either` join ordinary
//! iterator pipelines while keeping their "zero or one value" cardinality:
//!
//! - [`Empty`]: produces nothing; it starts out exhausted.
//! - [`Single`]: produces its element on the first pull, then is exhausted.
//! - [`SingleWith`]: like `Single`, but the element is computed by a producer
//!   that runs only on the first pull.
//! - [`AtMostOne`]: empty or single, decided when it is built; the iterator
//!   type of `Try` and `Either`.
//!
//! Each iterator is a two-state machine, [`IteratorState::Pending`] then
//! [`IteratorState::Exhausted`]. The transition happens once and is never
//! undone; iterate again by building a new iterator.
//!
//! Alongside the standard [`Iterator`] protocol (where exhaustion is `None`),
//! the [`Exhaustible`] trait offers a forcing pull that reports exhaustion as
//! an [`ExhaustedError`].
//!
//! # Examples
//!
//! ```rust
//! use slang::control::{Exhaustible, IteratorState, iterator};
//!
//! let mut single = iterator::of("only");
//! assert!(single.has_next());
//! assert_eq!(single.try_next(), Ok("only"));
//! assert_eq!(single.state(), IteratorState::Exhausted);
//! assert!(single.try_next().is_err());
//!
//! let collected: Vec<i32> = iterator::of(1).chain(iterator::empty()).collect();
//! assert_eq!(collected, vec![1]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::error::ExhaustedError;

/// Where a once-traversable iterator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IteratorState {
    /// The element has not been produced yet.
    Pending,
    /// Nothing is left to produce. Terminal.
    Exhausted,
}

/// Iterators whose exhaustion can be observed without consuming an element,
/// and forced as an error.
pub trait Exhaustible: Iterator {
    /// Returns the current lifecycle state.
    fn state(&self) -> IteratorState;

    /// Returns `true` while an element is still pending.
    ///
    /// Never evaluates a deferred element.
    #[inline]
    fn has_next(&self) -> bool {
        self.state() == IteratorState::Pending
    }

    /// Pulls the next element, failing with [`ExhaustedError`] when none is
    /// left.
    ///
    /// # Errors
    ///
    /// Returns [`ExhaustedError`] if the iterator is exhausted.
    fn try_next(&mut self) -> Result<Self::Item, ExhaustedError>;
}

// =============================================================================
// Slot: the shared two-state machine
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<S> {
    Pending(S),
    Exhausted,
}

impl<S> Slot<S> {
    /// Moves to `Exhausted`, handing out what was pending.
    #[inline]
    fn take(&mut self) -> Option<S> {
        match std::mem::replace(self, Self::Exhausted) {
            Self::Pending(pending) => Some(pending),
            Self::Exhausted => None,
        }
    }

    #[inline]
    const fn state(&self) -> IteratorState {
        match self {
            Self::Pending(_) => IteratorState::Pending,
            Self::Exhausted => IteratorState::Exhausted,
        }
    }

    #[inline]
    const fn remaining(&self) -> usize {
        match self {
            Self::Pending(_) => 1,
            Self::Exhausted => 0,
        }
    }
}

// =============================================================================
// Empty
// =============================================================================

/// An iterator that produces no elements.
///
/// Created by [`empty`].
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    /// Creates an empty iterator.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> ExactSizeIterator for Empty<T> {}

impl<T> FusedIterator for Empty<T> {}

impl<T> Exhaustible for Empty<T> {
    #[inline]
    fn state(&self) -> IteratorState {
        IteratorState::Exhausted
    }

    #[inline]
    fn try_next(&mut self) -> Result<T, ExhaustedError> {
        Err(ExhaustedError::empty())
    }
}

// =============================================================================
// Single
// =============================================================================

/// An iterator that produces exactly one element.
///
/// Created by [`of`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single<T> {
    slot: Slot<T>,
}

impl<T> Single<T> {
    /// Creates an iterator over the single `element`.
    #[inline]
    pub const fn new(element: T) -> Self {
        Self {
            slot: Slot::Pending(element),
        }
    }
}

impl<T> Iterator for Single<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slot.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Single<T> {}

impl<T> FusedIterator for Single<T> {}

impl<T> Exhaustible for Single<T> {
    #[inline]
    fn state(&self) -> IteratorState {
        self.slot.state()
    }

    #[inline]
    fn try_next(&mut self) -> Result<T, ExhaustedError> {
        self.slot.take().ok_or(ExhaustedError::consumed())
    }
}

// =============================================================================
// SingleWith
// =============================================================================

/// An iterator that produces exactly one element, computed on first pull.
///
/// Created by [`of_lazy`]. The producer is not called by construction,
/// [`Exhaustible::has_next`], or `size_hint`.
#[derive(Clone)]
pub struct SingleWith<F> {
    slot: Slot<F>,
}

impl<F> SingleWith<F> {
    /// Creates an iterator whose single element is produced by `producer`.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            slot: Slot::Pending(producer),
        }
    }
}

impl<F> fmt::Debug for SingleWith<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SingleWith")
            .field("state", &self.slot.state())
            .finish()
    }
}

impl<T, F: FnOnce() -> T> Iterator for SingleWith<F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        // The slot is exhausted before the producer runs, so a panicking
        // producer still leaves the iterator terminal.
        self.slot.take().map(|producer| producer())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slot.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, F: FnOnce() -> T> ExactSizeIterator for SingleWith<F> {}

impl<T, F: FnOnce() -> T> FusedIterator for SingleWith<F> {}

impl<T, F: FnOnce() -> T> Exhaustible for SingleWith<F> {
    #[inline]
    fn state(&self) -> IteratorState {
        self.slot.state()
    }

    #[inline]
    fn try_next(&mut self) -> Result<T, ExhaustedError> {
        self.next().ok_or(ExhaustedError::consumed())
    }
}

// =============================================================================
// AtMostOne
// =============================================================================

/// An iterator over zero or one element.
///
/// This is the iterator type of `Try` and of a right-biased `Either`: it
/// starts out like [`Empty`] when the container holds nothing and like
/// [`Single`] when it holds a value.
///
/// # Examples
///
/// ```rust
/// use slang::control::{Either, Try};
///
/// let total = Try::<i32>::Success(3).into_iter().fold(10, |sum, n| sum + n);
/// assert_eq!(total, 13);
///
/// let right: Either<&str, Vec<i32>> = Either::Right(vec![1, 2]);
/// let flattened: Vec<i32> = right.into_iter().flat_map(|values| values).collect();
/// assert_eq!(flattened, vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtMostOne<T> {
    slot: Slot<T>,
    was_empty: bool,
}

impl<T> AtMostOne<T> {
    /// Creates an iterator with no element.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            slot: Slot::Exhausted,
            was_empty: true,
        }
    }

    /// Creates an iterator over the single `element`.
    #[inline]
    pub const fn new(element: T) -> Self {
        Self {
            slot: Slot::Pending(element),
            was_empty: false,
        }
    }
}

impl<T> From<Option<T>> for AtMostOne<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or_else(Self::empty, Self::new)
    }
}

impl<T> Iterator for AtMostOne<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.slot.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slot.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for AtMostOne<T> {}

impl<T> FusedIterator for AtMostOne<T> {}

impl<T> Exhaustible for AtMostOne<T> {
    #[inline]
    fn state(&self) -> IteratorState {
        self.slot.state()
    }

    #[inline]
    fn try_next(&mut self) -> Result<T, ExhaustedError> {
        self.slot.take().ok_or(ExhaustedError {
            was_empty: self.was_empty,
        })
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Returns an iterator with no elements.
///
/// # Examples
///
/// ```rust
/// use slang::control::{Exhaustible, iterator};
///
/// let mut empty = iterator::empty::<String>();
/// assert!(!empty.has_next());
/// assert_eq!(empty.next(), None);
/// ```
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// Returns an iterator over exactly one element.
///
/// # Examples
///
/// ```rust
/// use slang::control::iterator;
///
/// let mut single = iterator::of(42);
/// assert_eq!(single.next(), Some(42));
/// assert_eq!(single.next(), None);
/// ```
#[inline]
pub const fn of<T>(element: T) -> Single<T> {
    Single::new(element)
}

/// Returns an iterator over one element computed by `producer` on the first
/// pull.
///
/// # Examples
///
/// ```rust
/// use slang::control::{Exhaustible, iterator};
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let mut lazy = iterator::of_lazy(|| {
///     calls.set(calls.get() + 1);
///     "computed"
/// });
///
/// assert!(lazy.has_next());
/// assert_eq!(calls.get(), 0);
/// assert_eq!(lazy.next(), Some("computed"));
/// assert_eq!(calls.get(), 1);
/// assert_eq!(lazy.next(), None);
/// assert_eq!(calls.get(), 1);
/// ```
#[inline]
pub const fn of_lazy<T, F>(producer: F) -> SingleWith<F>
where
    F: FnOnce() -> T,
{
    SingleWith::new(producer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_starts_exhausted() {
        let mut empty = empty::<i32>();
        assert_eq!(empty.state(), IteratorState::Exhausted);
        assert!(!empty.has_next());
        assert_eq!(empty.try_next(), Err(ExhaustedError::empty()));
        assert!(!empty.has_next());
    }

    #[rstest]
    fn single_transitions_once() {
        let mut single = of('x');
        assert_eq!(single.state(), IteratorState::Pending);
        assert_eq!(single.len(), 1);
        assert_eq!(single.try_next(), Ok('x'));
        assert_eq!(single.state(), IteratorState::Exhausted);
        assert_eq!(single.len(), 0);
        assert_eq!(single.try_next(), Err(ExhaustedError::consumed()));
        assert_eq!(single.next(), None);
    }

    #[rstest]
    fn single_with_exhausts_even_when_producer_panics() {
        let mut lazy = of_lazy(|| -> i32 { panic!("producer failed") });
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| lazy.next()));
        assert!(outcome.is_err());
        assert_eq!(lazy.state(), IteratorState::Exhausted);
        assert_eq!(lazy.next(), None);
    }

    #[rstest]
    fn single_with_debug_hides_producer() {
        let lazy = of_lazy(|| 1);
        assert_eq!(format!("{lazy:?}"), "SingleWith { state: Pending }");
    }

    #[rstest]
    #[case(AtMostOne::empty(), ExhaustedError::empty())]
    #[case(AtMostOne::new(5), ExhaustedError::consumed())]
    fn at_most_one_reports_how_it_ran_out(
        #[case] mut values: AtMostOne<i32>,
        #[case] expected: ExhaustedError,
    ) {
        while values.has_next() {
            values.next();
        }
        assert_eq!(values.len(), 0);
        assert_eq!(values.try_next(), Err(expected));
    }

    #[rstest]
    fn at_most_one_from_option() {
        assert_eq!(AtMostOne::from(Some('a')).collect::<String>(), "a");
        assert_eq!(AtMostOne::<char>::from(None).count(), 0);
    }

    #[rstest]
    fn empty_debug() {
        assert_eq!(format!("{:?}", empty::<u8>()), "Empty");
    }
}
