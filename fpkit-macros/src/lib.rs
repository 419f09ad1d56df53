//! Procedural macros for fpkit.
//!
//! # Available Function-like Macros
//!
//! - [`curry!`]: Converts a multi-argument closure or function into curried form
//!
//! # Example
//!
//! ```rust,ignore
//! use fpkit::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b);
//! assert_eq!(add(5)(3), 8);
//!
//! let add_five = add(5);
//! assert_eq!(add_five(10), 15);
//! assert_eq!(add_five(20), 25);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Converts a multi-argument closure or function into a chain of
/// single-argument closures.
///
/// # Forms
///
/// ```rust,ignore
/// // Closure: the arity is the number of closure parameters.
/// let volume = curry!(|width: f64, height: f64, depth: f64| width * height * depth);
/// assert_eq!(volume(2.0)(3.0)(4.0), 24.0);
///
/// // Function path with an explicit arity.
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// let curried_add = curry!(add, 2);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// The arity must be at least 2. Supplying more arguments than the arity is
/// a type error: the innermost closure returns the function's result, which
/// is not callable.
///
/// # Reuse
///
/// Every intermediate closure implements `Fn`, so partial applications can be
/// shared:
///
/// ```rust,ignore
/// let multiply = curry!(|a: i32, b: i32| a * b);
/// let double = multiply(2);
/// let triple = multiply(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// # Type constraints
///
/// Every argument except the last must implement `Clone`; captured arguments
/// are handed out with `Rc::unwrap_or_clone`.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}
