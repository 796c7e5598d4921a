//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(h, g, f)(x)`. Each function is called once, so `FnOnce`
/// closures are accepted.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use slang::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> 9 -> 18 -> 19
/// assert_eq!(pipe!(3, square, double, add_one), 19);
/// ```
///
/// Threading an `Either` through right-biased steps:
///
/// ```
/// use slang::control::Either;
/// use slang::pipe;
///
/// let positive = |n: i32| if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) };
/// let halve = |either: Either<String, i32>| either.map_right(|n| n / 2);
///
/// assert_eq!(pipe!(8, positive, halve), Either::Right(4));
/// assert_eq!(pipe!(-1, positive, halve), Either::Left("-1 is not positive".to_string()));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
