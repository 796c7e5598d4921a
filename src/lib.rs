//! # slang
//!
//! Algebraic containers for computations that may fail or branch.
//!
//! ## Overview
//!
//! - **Try**: a computation's outcome, either `Success(value)` or
//!   `Failure(cause)`
//! - **Either**: a disjoint union of two alternatives, `Left` or `Right`
//! - **Lazy iterators**: once-traversable empty and single-element sequences
//!   through which the containers take part in iterator pipelines
//! - **Function Composition**: `compose`, `and_then`, `identity` and friends
//! - **Type Classes**: Functor, Monad and Bifunctor instances for the containers
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, Bifunctor)
//! - `compose`: Function composition utilities
//! - `control`: `Try`, `Either` and the lazy iterators
//! - `serde`: Serialization for the containers and [`Cause`](control::Cause)
//! - `tracing`: Diagnostic events when failures are captured or re-raised
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use slang::prelude::*;
//!
//! fn divide(dividend: i32, divisor: i32) -> Try<i32> {
//!     Try::catching(move || dividend / divisor)
//! }
//!
//! assert_eq!(divide(10, 2), Try::Success(5));
//! assert!(divide(10, 0).is_failure());
//!
//! let doubled = Either::<String, i32>::Right(5).bimap(|s| s.len(), |n| n * 2);
//! assert_eq!(doubled, Either::Right(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use slang::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;
