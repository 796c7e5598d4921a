//! The `compose!` macro for variadic function composition.
//!
//! [`compose!`] is the n-ary form of [`compose`](super::compose): it composes
//! any number of functions from right to left.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use slang::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Composing functions that build `Try` values:
///
/// ```
/// use slang::compose;
/// use slang::control::Try;
///
/// let parse = |text: &str| Try::of(|| text.trim().parse::<i32>());
/// let doubled = |parsed: Try<i32, std::num::ParseIntError>| parsed.map(|n| n * 2);
///
/// let parse_and_double = compose!(doubled, parse);
/// assert_eq!(parse_and_double(" 21 "), Try::Success(42));
/// assert!(parse_and_double("x").is_failure());
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
