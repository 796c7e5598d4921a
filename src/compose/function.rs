//! Method-style composition for single-argument functions.

use super::utils;

/// Extension methods for any `Fn(A) -> B`.
///
/// Every closure, function item and function pointer taking one argument
/// implements this trait, so composition can be written as a method chain.
///
/// # Examples
///
/// ```
/// use slang::compose::Function1;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// // double first, then add_one
/// assert_eq!(add_one.compose(double)(5), 11);
/// // add_one first, then double
/// assert_eq!(add_one.and_then(double)(5), 12);
/// ```
pub trait Function1<A, B>: Fn(A) -> B + Sized {
    /// Returns a function that applies `before` first, then `self`.
    ///
    /// Same as [`compose(self, before)`](utils::compose).
    #[inline]
    fn compose<V, G>(self, before: G) -> impl Fn(V) -> B
    where
        G: Fn(V) -> A,
    {
        utils::compose(self, before)
    }

    /// Returns a function that applies `self` first, then `after`.
    ///
    /// Same as [`and_then(self, after)`](utils::and_then).
    #[inline]
    fn and_then<C, G>(self, after: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        utils::and_then(self, after)
    }
}

impl<A, B, F> Function1<A, B> for F where F: Fn(A) -> B {}
