//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose`]: right-to-left composition of two functions
//! - [`and_then`]: left-to-right composition of two functions
//! - [`identity`]: the unit of composition
//! - [`constant`]: a function that always returns the same value
//! - [`Function1`]: `.compose(..)` and `.and_then(..)` as methods on any `Fn(A) -> B`
//! - [`compose!`]: right-to-left composition of any number of functions
//! - [`pipe!`]: left-to-right application of functions to a value
//!
//! # Examples
//!
//! ```
//! use slang::compose::{and_then, compose, identity};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(compose(add_one, double)(5), 11);
//! assert_eq!(and_then(add_one, double)(5), 12);
//! assert_eq!(compose(identity, add_one)(5), add_one(5));
//! ```
//!
//! # Laws
//!
//! ```text
//! compose(f, g)(x)  == f(g(x))
//! and_then(f, g)(x) == g(f(x)) == compose(g, f)(x)
//! compose(identity, f) == f == compose(f, identity)
//! compose(f, compose(g, h)) == compose(compose(f, g), h)
//! ```

mod compose_macro;
mod function;
mod pipe_macro;
mod utils;

pub use function::Function1;
pub use utils::{and_then, compose, constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
