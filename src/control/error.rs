//! Error types for the control structures.
//!
//! The only recoverable condition raised by this module itself is
//! [`ExhaustedError`], produced when a lazy iterator is forced past its end.
//! Failures captured by `Try` are carried as values, not raised here.

/// Represents an attempt to pull an element from an iterator that has none
/// left.
///
/// An exhausted iterator stays exhausted: a fresh iterator has to be built to
/// traverse the elements again.
///
/// # Examples
///
/// ```rust
/// use slang::control::{ExhaustedError, Exhaustible, iterator};
///
/// let mut empty = iterator::empty::<i32>();
/// assert_eq!(empty.try_next(), Err(ExhaustedError::empty()));
/// assert_eq!(
///     format!("{}", ExhaustedError::empty()),
///     "next() on empty iterator"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExhaustedError {
    /// Whether the iterator never had an element to produce.
    pub was_empty: bool,
}

impl ExhaustedError {
    /// The error raised by an iterator that never had an element.
    #[inline]
    pub const fn empty() -> Self {
        Self { was_empty: true }
    }

    /// The error raised by an iterator that already produced its element.
    #[inline]
    pub const fn consumed() -> Self {
        Self { was_empty: false }
    }
}

impl std::fmt::Display for ExhaustedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.was_empty {
            write!(formatter, "next() on empty iterator")
        } else {
            write!(formatter, "next() on exhausted iterator")
        }
    }
}

impl std::error::Error for ExhaustedError {}
