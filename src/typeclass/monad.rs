//! Monad type class - sequencing computations within a context.
//!
//! A `Monad` sequences computations where each step depends on the value
//! produced by the previous one. The first `Failure` (or `Left`) short-circuits
//! the rest of the chain and is carried through unchanged.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use slang::control::{Cause, Try};
//! use slang::typeclass::Monad;
//!
//! fn parse(text: &str) -> Try<i32> {
//!     Try::of(|| text.parse::<i32>().map_err(|error| Cause::from_error(&error)))
//! }
//!
//! let result = Monad::flat_map(parse("21"), |n| <Try<i32>>::pure(n * 2));
//! assert_eq!(result, Try::Success(42));
//!
//! let failed = Monad::flat_map(parse("twenty"), |n| <Try<i32>>::pure(n * 2));
//! assert!(failed.is_failure());
//! ```

use super::functor::Functor;
use crate::control::{Either, Try};

/// A type class for containers that support dependent sequencing.
///
/// # Laws
///
/// - **Left Identity**: `Self::pure(a).flat_map(f) == f(a)`
/// - **Right Identity**: `m.flat_map(Self::pure) == m`
/// - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub trait Monad: Functor {
    /// Lifts a plain value into the successful shape of the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Either, Try};
    /// use slang::typeclass::Monad;
    ///
    /// let success: Try<i32> = <Try<()>>::pure(42);
    /// assert_eq!(success, Try::Success(42));
    ///
    /// let right: Either<String, i32> = <Either<String, ()>>::pure(42);
    /// assert_eq!(right, Either::Right(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function returning a container to the value inside, and
    /// flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the value of the first.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<T, E: Clone> Monad for Try<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Try<B, E> {
        Try::Success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> Try<B, E>,
    {
        // Delegate to the inherent flat_map
        Self::flat_map(self, function)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}
