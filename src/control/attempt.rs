//! Try type - the outcome of a computation that may fail.
//!
//! This module provides `Try<T, E>`, which is either a `Success(T)` holding
//! the computed value or a `Failure(E)` holding the cause of the failure.
//! The failure type defaults to [`Cause`], an opaque, comparable description
//! of a raised condition.
//!
//! A failure is never surfaced eagerly: it is carried as a value until the
//! caller asks for the result through [`Try::get`] (which hands the cause back
//! as `Err`, ready for `?`) or [`Try::get_or_raise`] (which re-raises the
//! cause as a panic).
//!
//! # Examples
//!
//! ```rust
//! use slang::control::{Cause, Try};
//!
//! fn divide(dividend: i32, divisor: i32) -> Try<i32> {
//!     Try::catching(move || dividend / divisor)
//! }
//!
//! assert_eq!(divide(10, 2), Try::Success(5));
//!
//! let failure = divide(10, 0);
//! assert!(failure.is_failure());
//! assert_eq!(failure.get_cause(), Some(&Cause::panicked("attempt to divide by zero")));
//!
//! // Transformations leave failures untouched.
//! let message = divide(10, 2).map(|n| format!("half is {n}"));
//! assert_eq!(message.get_or_else("none".to_string()), "half is 5");
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::cause::Cause;
use super::either::Either;
use super::iterator::AtMostOne;

/// The outcome of a computation: a value, or the cause of its failure.
///
/// # Type Parameters
///
/// * `T` - The type of the value held by `Success`
/// * `E` - The type of the cause held by `Failure` (defaults to [`Cause`])
///
/// # Equality
///
/// Equality and hashing are structural: two failures are equal exactly when
/// their causes are, and a failure never equals a success.
///
/// # Examples
///
/// ```rust
/// use slang::control::{Cause, Try};
///
/// let success: Try<i32> = Try::Success(5);
/// assert!(success.is_success());
/// assert!(!success.is_empty());
/// assert_eq!(success.get(), Ok(5));
///
/// let failure: Try<i32> = Try::Failure(Cause::new("boom"));
/// assert!(failure.is_failure());
/// assert!(failure.is_empty());
/// assert_eq!(failure.get(), Err(Cause::new("boom")));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<T, E = Cause> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed with a cause.
    Failure(E),
}

// =============================================================================
// Construction
// =============================================================================

impl<T, E> Try<T, E> {
    /// Runs a fallible computation and captures its outcome.
    ///
    /// `Ok(value)` becomes `Success(value)` and `Err(cause)` becomes
    /// `Failure(cause)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Try;
    ///
    /// let parsed: Try<i32, std::num::ParseIntError> = Try::of(|| "42".parse());
    /// assert_eq!(parsed, Try::Success(42));
    /// ```
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match computation() {
            Ok(value) => Self::Success(value),
            Err(cause) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    cause_type = std::any::type_name::<E>(),
                    "computation returned a failure"
                );
                Self::Failure(cause)
            }
        }
    }
}

impl<T> Try<T, Cause> {
    /// Runs a computation, capturing a panic as a `Failure`.
    ///
    /// The panic payload is converted with [`Cause::from_panic`], so a cause
    /// re-raised by [`Try::get_or_raise`] is captured back unchanged.
    ///
    /// The panic hook still runs for the captured panic.
    ///
    /// The computation is run under [`AssertUnwindSafe`]. If it mutates state
    /// it captured by reference (`&mut`, `RefCell`, ...) and panics midway,
    /// that state is left as the panic found it; callers that keep using
    /// such state after a `Failure` must not rely on its invariants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    ///
    /// let divisor = std::hint::black_box(0);
    /// assert_eq!(Try::catching(|| 10 / 2), Try::Success(5));
    /// assert_eq!(
    ///     Try::catching(|| 10 / divisor),
    ///     Try::Failure(Cause::panicked("attempt to divide by zero"))
    /// );
    /// ```
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let cause = Cause::from_panic(payload);
                #[cfg(feature = "tracing")]
                tracing::debug!(cause = %cause, "computation panicked; captured as failure");
                Self::Failure(cause)
            }
        }
    }
}

impl<T, E> Try<T, E> {
    // =========================================================================
    // Variant Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if no value is present, that is, if this is a `Failure`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_failure()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or the cause unchanged as the error.
    ///
    /// This is the propagating form of access: inside a function returning
    /// `Result<_, E>`, `outcome.get()?` hands the original cause to the caller.
    ///
    /// # Errors
    ///
    /// Returns `Err(cause)` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    ///
    /// fn total(first: Try<i32>, second: Try<i32>) -> Result<i32, Cause> {
    ///     Ok(first.get()? + second.get()?)
    /// }
    ///
    /// assert_eq!(total(Try::Success(1), Try::Success(2)), Ok(3));
    /// assert_eq!(
    ///     total(Try::Success(1), Try::Failure(Cause::new("missing"))),
    ///     Err(Cause::new("missing"))
    /// );
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// Returns the value, re-raising the cause as a panic on `Failure`.
    ///
    /// The cause itself is the panic payload, so `catch_unwind` (or
    /// [`Try::catching`]) recovers exactly the same cause.
    ///
    /// # Panics
    ///
    /// Panics with the held cause if this is a `Failure`. Only a [`Cause`]
    /// payload is recaptured unchanged by [`Try::catching`]; any other cause
    /// type comes back as `Cause::panicked("Box<dyn Any>")`, so downcast the
    /// payload of `catch_unwind` to recover it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    /// use std::panic;
    ///
    /// let failure: Try<i32> = Try::Failure(Cause::new("boom"));
    /// let payload = panic::catch_unwind(|| failure.get_or_raise()).unwrap_err();
    /// assert_eq!(payload.downcast_ref::<Cause>(), Some(&Cause::new("boom")));
    /// ```
    pub fn get_or_raise(self) -> T
    where
        E: Any + Send,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    cause_type = std::any::type_name::<E>(),
                    "re-raising failure cause"
                );
                panic::panic_any(cause)
            }
        }
    }

    /// Returns the value, or `default` on `Failure`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the value, or computes one from the cause on `Failure`.
    #[inline]
    pub fn get_or_else_get<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => function(cause),
        }
    }

    /// Returns a reference to the cause, or `None` on `Success`.
    ///
    /// A `Success` has no cause; `None` is the absent-cause answer rather than
    /// a panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    ///
    /// let failure: Try<i32> = Try::Failure(Cause::new("boom"));
    /// assert_eq!(failure.get_cause(), Some(&Cause::new("boom")));
    ///
    /// let success: Try<i32> = Try::Success(1);
    /// assert_eq!(success.get_cause(), None);
    /// ```
    #[inline]
    pub const fn get_cause(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Converts into the cause, or `None` on `Success`.
    #[inline]
    pub fn into_cause(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Converts from `&Try<T, E>` to `Try<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Try<&T, &E> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the value of a `Success`.
    ///
    /// A `Failure` is returned with its cause unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Applies a function to the cause of a `Failure`.
    #[inline]
    pub fn map_failure<G, F>(self, function: F) -> Try<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(cause) => Try::Failure(function(cause)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    ///
    /// let positive = |n: i32| {
    ///     if n > 0 { Try::Success(n) } else { Try::Failure(Cause::new("not positive")) }
    /// };
    ///
    /// assert_eq!(Try::<i32>::Success(3).flat_map(positive), Try::Success(3));
    /// assert_eq!(
    ///     Try::<i32>::Success(-3).flat_map(positive),
    ///     Try::Failure(Cause::new("not positive"))
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Try<U, E>
    where
        F: FnOnce(T) -> Try<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Turns a `Success` whose value does not satisfy `predicate` into a
    /// `Failure`, with the cause built from the rejected value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    ///
    /// let even = |outcome: Try<i32>| {
    ///     outcome.filter(|n| n % 2 == 0, |n| Cause::new(format!("{n} is odd")))
    /// };
    ///
    /// assert_eq!(even(Try::Success(4)), Try::Success(4));
    /// assert_eq!(even(Try::Success(3)), Try::Failure(Cause::new("3 is odd")));
    /// ```
    #[inline]
    pub fn filter<P, F>(self, predicate: P, rejection: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Success(value) if predicate(&value) => Self::Success(value),
            Self::Success(value) => Self::Failure(rejection(value)),
            Self::Failure(cause) => Self::Failure(cause),
        }
    }

    /// Recovers from a `Failure` by computing a value from its cause.
    ///
    /// The result is always a `Success`.
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => Self::Success(function(cause)),
        }
    }

    /// Recovers from a `Failure` with another computation that may fail.
    #[inline]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => function(cause),
        }
    }

    /// Returns `self` if it is a `Success`, otherwise the result of
    /// `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative(),
        }
    }

    /// Eliminates the `Try` by applying one of two functions.
    #[inline]
    pub fn fold<U, F, G>(self, on_failure: F, on_success: G) -> U
    where
        F: FnOnce(E) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Runs `action` on the value of a `Success`, then returns `self`.
    #[inline]
    #[must_use]
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the cause of a `Failure`, then returns `self`.
    #[inline]
    #[must_use]
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(cause) = &self {
            action(cause);
        }
        self
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into an `Option`, discarding the cause.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Either`, with the cause on the left and the value on
    /// the right.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(cause) => Either::Left(cause),
        }
    }

    /// Returns an iterator over the value: one element for a `Success`, none
    /// for a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    ///
    /// let outcomes: Vec<Try<i32>> = vec![
    ///     Try::Success(1),
    ///     Try::Failure(Cause::new("skipped")),
    ///     Try::Success(3),
    /// ];
    /// let values: Vec<&i32> = outcomes.iter().flat_map(Try::iter).collect();
    /// assert_eq!(values, vec![&1, &3]);
    /// ```
    #[inline]
    pub const fn iter(&self) -> AtMostOne<&T> {
        match self {
            Self::Success(value) => AtMostOne::new(value),
            Self::Failure(_) => AtMostOne::empty(),
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T, E> IntoIterator for Try<T, E> {
    type Item = T;
    type IntoIter = AtMostOne<T>;

    #[inline]
    fn into_iter(self) -> AtMostOne<T> {
        match self {
            Self::Success(value) => AtMostOne::new(value),
            Self::Failure(_) => AtMostOne::empty(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Try<T, E> {
    type Item = &'a T;
    type IntoIter = AtMostOne<&'a T>;

    #[inline]
    fn into_iter(self) -> AtMostOne<&'a T> {
        self.iter()
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Try<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(cause) => write!(formatter, "Failure({cause})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Try<T, E> {
    /// Converts a `Result` to a `Try`.
    ///
    /// `Ok(value)` becomes `Success(value)`, and `Err(cause)` becomes
    /// `Failure(cause)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause),
        }
    }
}

impl<T, E> From<Try<T, E>> for Result<T, E> {
    /// Converts a `Try` to a `Result`; same as [`Try::get`].
    #[inline]
    fn from(outcome: Try<T, E>) -> Self {
        outcome.get()
    }
}

impl<T, E> From<Try<T, E>> for Either<E, T> {
    #[inline]
    fn from(outcome: Try<T, E>) -> Self {
        outcome.to_either()
    }
}
