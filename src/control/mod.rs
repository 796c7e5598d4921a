//! Control structures for computations that may fail or branch.
//!
//! This module provides:
//!
//! - [`Try`]: the outcome of a computation, `Success(value)` or `Failure(cause)`
//! - [`Cause`]: the default failure description, able to capture and re-raise panics
//! - [`Either`]: a value that is one of two alternatives
//! - [`iterator`]: once-traversable empty and single-element iterators
//!
//! # Examples
//!
//! ## Capturing a Failure
//!
//! ```rust
//! use slang::control::{Cause, Try};
//!
//! let parsed: Try<i32> = Try::of(|| "42".parse::<i32>().map_err(|error| Cause::from_error(&error)));
//! assert_eq!(parsed, Try::Success(42));
//!
//! let divisor = std::hint::black_box(0);
//! let divided = Try::catching(|| 10 / divisor);
//! assert!(divided.is_failure());
//! assert!(divided.get_cause().is_some_and(Cause::is_panic));
//! ```
//!
//! ## Iterating at Most One Value
//!
//! ```rust
//! use slang::control::{Either, Try};
//!
//! let outcomes: Vec<Try<i32, String>> = vec![Try::Success(1), Try::Failure("skip".into()), Try::Success(2)];
//! let successes: Vec<i32> = outcomes.into_iter().flatten().collect();
//! assert_eq!(successes, vec![1, 2]);
//!
//! let right: Either<String, i32> = Either::Right(3);
//! assert_eq!(right.iter().count(), 1);
//! ```

mod attempt;
mod cause;
mod either;
mod error;
pub mod iterator;

pub use attempt::Try;
pub use cause::{Cause, Origin};
pub use either::Either;
pub use error::ExhaustedError;
pub use iterator::{AtMostOne, Empty, Exhaustible, IteratorState, Single, SingleWith};

static_assertions::assert_impl_all!(Cause: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(ExhaustedError: Send, Sync, Copy, std::error::Error);
static_assertions::assert_impl_all!(Try<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(AtMostOne<i32>: ExactSizeIterator, Exhaustible);
