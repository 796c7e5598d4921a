//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape. For `Try` the value of a `Success` is transformed and a `Failure`
//! passes through untouched; for `Either` the `Right` value is transformed and
//! a `Left` passes through.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use slang::control::{Cause, Try};
//! use slang::typeclass::Functor;
//!
//! let success: Try<i32> = Try::Success(5);
//! assert_eq!(success.fmap(|n| n.to_string()), Try::Success("5".to_string()));
//!
//! let failure: Try<i32> = Try::Failure(Cause::new("boom"));
//! assert_eq!(failure.fmap(|n| n.to_string()), Try::Failure(Cause::new("boom")));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Either, Try};

/// A type class for types that can be mapped over.
///
/// # Laws
///
/// - **Identity**: `fa.fmap(|x| x) == fa`
/// - **Composition**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    /// use slang::typeclass::Functor;
    ///
    /// let right: Either<String, i32> = Either::Right(5);
    /// assert_eq!(right.fmap(|n| n * 2), Either::Right(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Try;
    /// use slang::typeclass::Functor;
    ///
    /// let word: Try<String> = Try::Success("hello".to_string());
    /// assert_eq!(word.fmap_ref(|s| s.len()), Try::Success(5));
    /// assert!(word.is_success());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// Equivalent to `fmap(|_| value)`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Try<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Try<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Try<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(cause) => Try::Failure(cause.clone()),
        }
    }
}

// =============================================================================
// Either<L, R> Implementation (right-biased)
// =============================================================================

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Cause;
    use rstest::rstest;

    #[rstest]
    #[case(Try::Success(3), Try::Success(6))]
    #[case(Try::Failure(Cause::new("boom")), Try::Failure(Cause::new("boom")))]
    fn try_fmap_doubles_only_successes(#[case] input: Try<i32>, #[case] expected: Try<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn try_fmap_never_calls_function_on_failure() {
        let failure: Try<i32> = Try::Failure(Cause::new("boom"));
        let result = failure.fmap(|_| -> i32 { panic!("mapper must not run") });
        assert!(result.is_failure());
    }

    #[rstest]
    fn try_fmap_ref_keeps_original() {
        let failure: Try<String, String> = Try::Failure("bad".to_string());
        let mapped = failure.fmap_ref(String::len);
        assert_eq!(mapped, Try::Failure("bad".to_string()));
        assert!(failure.is_failure());
    }

    #[rstest]
    fn either_fmap_is_right_biased() {
        let left: Either<String, i32> = Either::Left("left".to_string());
        let right: Either<String, i32> = Either::Right(4);
        assert_eq!(left.fmap(|n| n + 1), Either::Left("left".to_string()));
        assert_eq!(right.fmap(|n| n + 1), Either::Right(5));
    }

    #[rstest]
    fn replace_and_void_keep_shape() {
        let success: Try<i32> = Try::Success(1);
        assert_eq!(success.clone().replace("replaced"), Try::Success("replaced"));
        assert_eq!(success.void(), Try::Success(()));

        let left: Either<i32, i32> = Either::Left(7);
        assert_eq!(left.void(), Either::Left(7));
    }
}
