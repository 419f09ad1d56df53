//! Sequence access, search, folds and traversals.
//!
//! Every operation takes its sequence as an [`IntoIterator`], so slices,
//! `Vec`s, `VecDeque`s and ranges all work. Passing a borrowed slice yields
//! borrowed elements; passing an owned `Vec` yields owned elements. Absent
//! results are reported as `None`.
//!
//! # Overview
//!
//! | Operation      | Result                                             |
//! |----------------|----------------------------------------------------|
//! | [`first`]      | element at position 0                              |
//! | [`last`]       | element at the highest position                    |
//! | [`find_first`] | lowest-position element satisfying a predicate     |
//! | [`find_last`]  | highest-position element satisfying a predicate    |
//! | [`fold`]       | left fold with a seed of any type                  |
//! | [`reduce`]     | left fold seeded by an optional start or the first element |
//! | [`map`]        | new `Vec` of transformed elements                  |
//! | [`filter`]     | new `Vec` of matching elements                     |
//! | [`each`]       | runs a side effect per element                     |
//! | [`min_by`]     | earliest element with the smallest key             |
//! | [`max_by`]     | earliest element with the largest key              |
//!
//! The [`curried`] submodule holds forms of each operation that take their
//! function first and return a function awaiting the sequence.
//!
//! # Fold argument order
//!
//! [`fold`] and [`reduce`] call their combining function as
//! `function(element, accumulator)`. [`Iterator::fold`] uses the opposite
//! order; wrap a conventional closure in [`flip`](crate::compose::flip) when
//! reusing one.
//!
//! ```
//! use fpkit::sequence::fold;
//!
//! let digits = fold(|digit: u32, number: u32| number * 10 + digit, [1, 2, 3], 0);
//! assert_eq!(digits, 123);
//! ```

mod access;
pub mod curried;
mod fold;
mod search;
mod traversal;

pub use access::{first, last};
pub use fold::{fold, reduce};
pub use search::{find_first, find_last};
pub use traversal::{each, filter, map, max_by, min_by};
