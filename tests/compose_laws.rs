#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! ## and_then Laws
//! - **Reversal**: `and_then(f, g) == compose(g, f)`
//! - **Identity**: `and_then(identity, f) == f == and_then(f, identity)`
//!
//! ## Pipe Laws
//! - **Consistency with Compose**: `pipe!(x, f, g) == compose!(g, f)(x)`

use proptest::prelude::*;
use slang::compose::{and_then, compose, identity};
use slang::pipe;

fn f(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn g(n: i32) -> i32 {
    n.wrapping_mul(3)
}

fn h(n: i32) -> i64 {
    i64::from(n) - 7
}

proptest! {
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        prop_assert_eq!(compose(identity, g)(x), g(x));
    }

    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        prop_assert_eq!(compose(g, identity)(x), g(x));
    }

    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let left = compose(h, compose(g, f));
        let right = compose(compose(h, g), f);
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_and_then_is_reversed_compose(x in any::<i32>()) {
        prop_assert_eq!(and_then(f, g)(x), compose(g, f)(x));
    }

    #[test]
    fn prop_and_then_identity(x in any::<i32>()) {
        prop_assert_eq!(and_then(identity, f)(x), f(x));
        prop_assert_eq!(and_then(f, identity)(x), f(x));
    }

    #[test]
    fn prop_and_then_associativity(x in any::<i32>()) {
        let left = and_then(and_then(f, g), h);
        let right = and_then(f, and_then(g, h));
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_pipe_consistent_with_compose(x in any::<i32>()) {
        prop_assert_eq!(pipe!(x, f, g, h), compose!(h, g, f)(x));
    }
}
