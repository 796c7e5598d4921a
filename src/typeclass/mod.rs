//! Type class traits for the container types.
//!
//! - [`Functor`]: Mapping over the value of a container
//! - [`Monad`]: Sequencing computations whose next step depends on the value
//! - [`Bifunctor`]: Mapping over both alternatives of a two-sided container
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which is what lets `Functor` and `Monad` talk about
//! "the same container holding a different type".
//!
//! # Examples
//!
//! ```rust
//! use slang::control::Try;
//! use slang::typeclass::{Functor, Monad};
//!
//! let parsed: Try<i32> = Try::Success(21);
//! let doubled = parsed.fmap(|n| n * 2);
//! assert_eq!(doubled, Try::Success(42));
//!
//! let chained = doubled.flat_map(|n| <Try<i32>>::pure(n + 1));
//! assert_eq!(chained, Try::Success(43));
//! ```

mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
