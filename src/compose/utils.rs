//! Composition functions and basic combinators.
//!
//! - [`compose`]: right-to-left composition, `compose(f, g)(x) == f(g(x))`
//! - [`and_then`]: left-to-right composition, `and_then(f, g)(x) == g(f(x))`
//! - [`identity`]: the unit of both compositions (I combinator)
//! - [`constant`]: a function that ignores its input (K combinator)
//!
//! The composed functions call their parts in order on every invocation and
//! do not catch anything: a panic raised inside either part propagates
//! unchanged to the caller.

/// Composes two functions right to left.
///
/// The returned function applies `before` to its input, then `function` to
/// the result: `compose(f, before)(v) == f(before(v))`.
///
/// # Laws
///
/// - **Left identity**: `compose(identity, f)(x) == f(x)`
/// - **Right identity**: `compose(f, identity)(x) == f(x)`
/// - **Associativity**: `compose(f, compose(g, h))(x) == compose(compose(f, g), h)(x)`
///
/// # Examples
///
/// ```
/// use slang::compose::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// // add_one(double(5)) = 11
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(function: F, before: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| function(before(input))
}

/// Composes two functions left to right.
///
/// The returned function applies `function` to its input, then `after` to
/// the result: `and_then(f, after)(t) == after(f(t))`. This is
/// `compose(after, f)` with the arguments in reading order.
///
/// # Examples
///
/// ```
/// use slang::compose::and_then;
///
/// let parse = |text: &str| text.len();
/// let describe = |length: usize| format!("{length} bytes");
///
/// let pipeline = and_then(parse, describe);
/// assert_eq!(pipeline("hello"), "5 bytes");
/// ```
#[inline]
pub fn and_then<A, B, C, F, G>(function: F, after: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| after(function(input))
}

/// Returns the value unchanged.
///
/// The identity function is the unit element of both [`compose`] and
/// [`and_then`].
///
/// # Examples
///
/// ```
/// use slang::compose::{compose, identity};
///
/// let double = |x: i32| x * 2;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(compose(identity, double)(5), double(5));
/// assert_eq!(compose(double, identity)(5), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use slang::compose::constant;
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn test_compose_applies_before_first() {
        let order = RefCell::new(Vec::new());
        let first = |x: i32| {
            order.borrow_mut().push("before");
            x + 1
        };
        let second = |x: i32| {
            order.borrow_mut().push("function");
            x * 10
        };

        assert_eq!(compose(second, first)(1), 20);
        assert_eq!(*order.borrow(), vec!["before", "function"]);
    }

    #[rstest]
    fn test_and_then_applies_function_first() {
        let to_length = |text: String| text.len();
        let is_short = |length: usize| length < 4;
        let short = and_then(to_length, is_short);
        assert!(short("abc".to_string()));
        assert!(!short("abcd".to_string()));
    }

    #[rstest]
    fn test_panic_in_before_propagates() {
        let failing = |_: i32| -> i32 { panic!("before failed") };
        let composed = compose(|x: i32| x + 1, failing);
        let outcome = std::panic::catch_unwind(|| composed(1));
        let payload = outcome.expect_err("composition must not swallow the panic");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"before failed"));
    }

    #[rstest]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }
}
