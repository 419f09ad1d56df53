//! # fpkit
//!
//! Small functional combinators for Rust: currying, function composition,
//! predicate negation, folds and sequence traversal.
//!
//! ## Overview
//!
//! - **Composition**: [`compose`](compose::compose), `compose!`, [`negate`](compose::negate),
//!   [`identity`](compose::identity), [`flip`](compose::flip)
//! - **Currying**: the compile-time `curry!` macro and the runtime
//!   [`Curry`](compose::Curry) accumulator with a declared arity
//! - **Sequences**: `first`, `last`, `find_first`, `find_last`, `fold`,
//!   `reduce`, `map`, `filter`, `each`, `min_by`, `max_by`, each with a
//!   curried counterpart in `sequence::curried`
//! - **Records**: string-keyed property lookup through `get_property`
//!
//! ## Feature Flags
//!
//! - `compose`: Composition helpers and the runtime `Curry`
//! - `macros`: The `curry!` procedural macro
//! - `sequence`: Sequence access, search, folds and traversals
//! - `record`: `Record` and property lookup
//! - `serde`: `Serialize`/`Deserialize` for `Record`
//! - `tracing`: Trace events from `Curry::apply`
//! - `full`: Enable all features
//!
//! ## Argument order of folds
//!
//! `fold` and `reduce` call their combining function as
//! `function(element, accumulator)`, the reverse of [`Iterator::fold`].
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let evens = filter(|value: &i32| value % 2 == 0, vec![1, 2, 3, 4]);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let total = reduce(|element, accumulator| accumulator + element, evens, None);
//! assert_eq!(total, Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module. The curried sequence forms share names
/// with the direct ones, so they stay under `sequence::curried`.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "macros")]
pub use fpkit_macros::curry;
