//! Function composition and currying.
//!
//! # Overview
//!
//! - [`compose`] / [`compose!`]: Compose functions right-to-left
//! - [`negate`]: Complement a predicate
//! - [`identity`]: Return the argument unchanged
//! - [`flip`]: Swap the arguments of a binary function
//! - [`Curry`]: Runtime currying against a declared arity, accepting the
//!   arguments in any split
//! - `curry!` (with the `macros` feature): Compile-time currying into nested
//!   single-argument closures
//!
//! # Examples
//!
//! ## Composition
//!
//! ```
//! use fpkit::compose::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose(f, g)(x) = f(g(x))
//! let composed = compose(add_one, double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Runtime currying
//!
//! ```
//! use fpkit::compose::{Application, Curry};
//!
//! let sum = Curry::new(3, |arguments: &[i32]| arguments.iter().sum::<i32>());
//!
//! let Ok(Application::Partial(with_two)) = sum.apply([1, 2]) else {
//!     panic!("two of three arguments leave a partial application");
//! };
//! assert_eq!(with_two.apply([3]).ok().and_then(Application::complete), Some(6));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`
//! - **Double negation**: `negate(negate(p)) == p`
//! - **Double flip**: `flip(flip(f)) == f`
//! - **Curry splits**: every partition of the arguments yields the direct call

mod combinators;
mod compose_macro;
mod curry;

pub use combinators::{compose, flip, identity, negate};
pub use curry::{Application, Curry, CurryError};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
#[cfg(feature = "macros")]
pub use crate::curry;
