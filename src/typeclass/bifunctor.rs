//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` generalizes `Functor` to containers with two alternatives.
//! Exactly one of the two functions passed to [`Bifunctor::bimap`] runs: the
//! one matching the populated alternative.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Type Parameter Order for Try
//!
//! `Try<T, E>` is implemented as `Bifunctor<E, T>`, mirroring `Either<L, R>`
//! where the failure side comes first:
//! - `first`: transforms the cause, like [`Try::map_failure`]
//! - `second`: transforms the value, like [`Try::map`]
//!
//! # Examples
//!
//! ```rust
//! use slang::control::{Either, Try};
//! use slang::typeclass::Bifunctor;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! assert_eq!(Bifunctor::bimap(right, |x: i32| x * 2, |s| s.len()), Either::Right(5));
//!
//! let failure: Try<i32, String> = Try::Failure("bad input".to_string());
//! assert_eq!(failure.first(|e| e.len()), Try::Failure(9));
//! ```

use crate::control::{Either, Try};

/// A type class for types with two alternatives that can both be mapped.
pub trait Bifunctor<A, B> {
    /// The same container with both type parameters replaced.
    type Target<C, D>;

    /// Maps whichever alternative is populated with the matching function.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first alternative.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Maps only the second alternative.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Maps whichever alternative is populated by reference.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map_right(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }
}

impl<T, E> Bifunctor<E, T> for Try<T, E> {
    type Target<C, D> = Try<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Try<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Try::Success(second_function(value)),
            Self::Failure(cause) => Try::Failure(first_function(cause)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Try<T, C>
    where
        F: FnOnce(E) -> C,
    {
        self.map_failure(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Try<D, E>
    where
        G: FnOnce(T) -> D,
    {
        self.map(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Try<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Self::Success(value) => Try::Success(second_function(value)),
            Self::Failure(cause) => Try::Failure(first_function(cause)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn either_bimap_runs_only_matching_function() {
        let left_calls = Cell::new(0);
        let right_calls = Cell::new(0);

        let right: Either<String, i32> = Either::Right(5);
        let mapped = Bifunctor::bimap(
            right,
            |s: String| {
                left_calls.set(left_calls.get() + 1);
                s.len()
            },
            |n| {
                right_calls.set(right_calls.get() + 1);
                n * 2
            },
        );

        assert_eq!(mapped, Either::Right(10));
        assert_eq!(left_calls.get(), 0);
        assert_eq!(right_calls.get(), 1);
    }

    #[rstest]
    fn either_bimap_ref_keeps_source() {
        let left: Either<String, i32> = Either::Left("abc".to_string());
        let mapped = left.bimap_ref(String::len, |n| n + 1);
        assert_eq!(mapped, Either::Left(3));
        assert_eq!(left, Either::Left("abc".to_string()));
    }

    #[rstest]
    #[case(Try::Success(4), Try::Success(8))]
    #[case(Try::Failure("oops".to_string()), Try::Failure(4))]
    fn try_bimap_dispatches_on_variant(
        #[case] input: Try<i32, String>,
        #[case] expected: Try<i32, usize>,
    ) {
        assert_eq!(input.bimap(|cause| cause.len(), |value| value * 2), expected);
    }

    #[rstest]
    fn try_first_and_second() {
        let failure: Try<i32, String> = Try::Failure("oops".to_string());
        assert_eq!(failure.clone().second(|n| n + 1), Try::Failure("oops".to_string()));
        assert_eq!(failure.first(|cause| cause.to_uppercase()), Try::Failure("OOPS".to_string()));

        let success: Try<i32, String> = Try::Success(1);
        assert_eq!(success.second(|n| n + 1), Try::Success(2));
    }

    #[rstest]
    fn try_bimap_ref_keeps_source() {
        let success: Try<i32, String> = Try::Success(10);
        assert_eq!(success.bimap_ref(String::len, |n| n / 2), Try::Success(5));
        assert!(success.is_success());
    }
}
