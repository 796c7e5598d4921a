//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Try<_, E>` or `Either<L, _>` as type
//! constructors directly. [`TypeConstructor`] names the element type a
//! container currently holds and how to rebuild the same container around a
//! different element type.
//!
//! # Example
//!
//! ```rust
//! use slang::control::Try;
//! use slang::typeclass::TypeConstructor;
//!
//! fn relabel<T: TypeConstructor>(_value: T) -> Option<T::WithType<String>> {
//!     None
//! }
//!
//! let outcome: Try<i32> = Try::Success(42);
//! let relabelled: Option<Try<String>> = relabel(outcome);
//! assert!(relabelled.is_none());
//! ```

use crate::control::{Either, Try};

/// A type constructor with one "hole" for the element type.
///
/// # Type-level Semantics
///
/// - `Inner` is the element type currently held.
/// - `WithType<B>` is the same container holding `B` instead. Every other
///   type parameter (the failure type of `Try`, the left type of `Either`)
///   is preserved.
pub trait TypeConstructor {
    /// The element type currently held by the container.
    type Inner;

    /// The same container with its element type replaced by `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T, E> TypeConstructor for Try<T, E> {
    type Inner = T;
    type WithType<B> = Try<B, E>;
}

/// `Either` is right-biased: the hole is the `Right` type.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Cause;

    #[test]
    fn try_inner_type_is_the_success_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Try<i32>>();
        assert_inner::<Try<i32, String>>();
    }

    #[test]
    fn try_with_type_preserves_failure_type() {
        fn assert_try_with_type<T, E, B>()
        where
            Try<T, E>: TypeConstructor<Inner = T, WithType<B> = Try<B, E>>,
        {
        }

        assert_try_with_type::<i32, Cause, String>();
        assert_try_with_type::<String, (), bool>();
    }

    #[test]
    fn either_inner_type_is_the_right_type() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Either<i32, String>>();
    }

    #[test]
    fn either_with_type_preserves_left_type() {
        fn assert_either_with_type<L, R, B>()
        where
            Either<L, R>: TypeConstructor<Inner = R, WithType<B> = Either<L, B>>,
        {
        }

        assert_either_with_type::<String, i32, char>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Try<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_try_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_try_bool::<Step2>();
    }
}
