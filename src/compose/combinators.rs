//! Function combinators: composition, negation, identity and flip.
//!
//! These are the building blocks for point-free code:
//!
//! - [`identity`]: The I combinator
//! - [`compose`]: The B combinator, `f ∘ g`
//! - [`flip`]: The C combinator, swapping two arguments
//! - [`negate`]: Boolean complement of a predicate

/// Returns the value unchanged.
///
/// `identity` is the unit of composition, and `map(identity, sequence)`
/// copies a sequence into a fresh `Vec`.
///
/// # Examples
///
/// ```
/// use fpkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Composes two functions right-to-left.
///
/// The result calls `inner` with its argument and pipes the return value
/// into `outer`: `compose(f, g)(x) == f(g(x))`. Functions of several
/// arguments take them as a tuple.
///
/// # Examples
///
/// ```
/// use fpkit::compose::compose;
///
/// let add = |(left, right): (i32, i32)| left + right;
/// let describe = |total: i32| format!("total: {total}");
///
/// let summary = compose(describe, add);
/// assert_eq!(summary((2, 3)), "total: 5");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |input| outer(inner(input))
}

/// Returns the complement of a predicate.
///
/// The predicate receives its argument by reference, the same way
/// [`filter`](crate::sequence::filter) and the `find_*` searches call their
/// predicates, so a negated predicate can be passed to them directly.
///
/// # Examples
///
/// ```
/// use fpkit::compose::negate;
///
/// let is_even = |value: &i32| value % 2 == 0;
/// let is_odd = negate(is_even);
///
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn negate<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |value: &T| !predicate(value)
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`. This converts a conventional
/// `(accumulator, element)` closure into the `(element, accumulator)` order
/// that [`fold`](crate::sequence::fold) and
/// [`reduce`](crate::sequence::reduce) expect.
///
/// # Examples
///
/// ```
/// use fpkit::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let flipped = flip(subtract);
///
/// assert_eq!(subtract(10, 3), 7);
/// assert_eq!(flipped(10, 3), -7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
