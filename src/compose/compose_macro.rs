//! The variadic `compose!` macro.

/// Composes any number of single-argument functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. With two functions this is the
/// macro form of [`compose`](crate::compose::compose).
///
/// # Syntax
///
/// - `compose!(f)` - `f` itself
/// - `compose!(f, g)` - `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - `compose!(f, compose!(g, h, ...))`
///
/// # Examples
///
/// ```
/// use fpkit::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// Types flow right to left through the chain:
///
/// ```
/// use fpkit::compose;
///
/// let to_string = |x: i32| x.to_string();
/// let length = |text: String| text.len();
///
/// assert_eq!(compose!(length, to_string)(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::compose::compose($outer_function, $inner_function)
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose(
            $outer_function,
            $crate::compose!($($remaining_functions),+),
        )
    };
}
