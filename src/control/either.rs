//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`, never both. By
//! convention it is right-biased: `Right` carries the "expected" outcome and
//! the right-biased operations ([`Either::get`], [`Either::flat_map`],
//! [`Either::iter`], and the `Functor`/`Monad` instances) act on it, passing a
//! `Left` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use slang::control::Either;
//!
//! let right: Either<String, i32> = Either::Right(5);
//! assert_eq!(right.clone().bimap(|s| s.len(), |n| n * 2), Either::Right(10));
//!
//! // swap exchanges the roles of the two sides
//! let left: Either<i32, String> = right.swap();
//! assert_eq!(left, Either::Left(5));
//!
//! // fold handles both cases
//! let text = left.fold(|n| format!("number {n}"), |s| s);
//! assert_eq!(text, "number 5");
//! ```

use std::fmt;

use super::iterator::AtMostOne;

/// A value that is one of two alternatives.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Equality
///
/// Equality is structural and aware of the variant: `Left(5)` never equals
/// `Right(5)`.
///
/// ```rust
/// use slang::control::Either;
///
/// let left: Either<i32, i32> = Either::Left(5);
/// let right: Either<i32, i32> = Either::Right(5);
/// assert_ne!(left, right);
/// assert_eq!(left, Either::Left(5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure or first alternative.
    Left(L),
    /// The right variant, conventionally the success or second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Right-biased Access
    // =========================================================================

    /// Returns the right value, or the left value as the error.
    ///
    /// # Errors
    ///
    /// Returns `Err(left)` if this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.get(), Ok(42));
    ///
    /// let left: Either<String, i32> = Either::Left("missing".to_string());
    /// assert_eq!(left.get(), Err("missing".to_string()));
    /// ```
    #[inline]
    pub fn get(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the right value, or `default` if this is a `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_right(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies the function matching the populated side and rewraps the
    /// result in the same variant.
    ///
    /// Only one function is ever called: `left_function` for a `Left`,
    /// `right_function` for a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(5);
    /// let result = right.bimap(|s| s.len(), |n| n * 2);
    /// assert_eq!(result, Either::Right(10));
    ///
    /// let left: Either<String, i32> = Either::Left("four".to_string());
    /// let result = left.bimap(|s| s.len(), |n| n * 2);
    /// assert_eq!(result, Either::Left(4));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a right-biased computation; a `Left` is passed through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    ///
    /// let checked = |n: i32| -> Either<String, i32> {
    ///     if n < 100 { Either::Right(n) } else { Either::Left(format!("{n} too large")) }
    /// };
    ///
    /// assert_eq!(Either::Right(7).flat_map(checked), Either::Right(7));
    /// assert_eq!(Either::Right(700).flat_map(checked), Either::Left("700 too large".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`. The
    /// payload is moved, not copied, and the type parameters trade places.
    /// Swapping twice gives back the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.clone().swap().swap(), right);
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }

    /// Returns a right-biased iterator over a reference to the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slang::control::Either;
    ///
    /// let values: Vec<Either<&str, i32>> = vec![Either::Right(1), Either::Left("skip"), Either::Right(3)];
    /// let total: i32 = values.iter().flat_map(Either::iter).sum();
    /// assert_eq!(total, 4);
    /// ```
    #[inline]
    pub const fn iter(&self) -> AtMostOne<&R> {
        match self {
            Self::Left(_) => AtMostOne::empty(),
            Self::Right(value) => AtMostOne::new(value),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iteration is right-biased: a `Right` yields its value once, a `Left`
/// yields nothing.
impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = AtMostOne<R>;

    #[inline]
    fn into_iter(self) -> AtMostOne<R> {
        match self {
            Self::Left(_) => AtMostOne::empty(),
            Self::Right(value) => AtMostOne::new(value),
        }
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = AtMostOne<&'a R>;

    #[inline]
    fn into_iter(self) -> AtMostOne<&'a R> {
        self.iter()
    }
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`; same as [`Either::get`].
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.get()
    }
}
