//! Left folds with `(element, accumulator)` argument order.
//!
//! Both folds here pass the element first and the accumulator second. This
//! is the reverse of [`Iterator::fold`] and of
//! `Foldable::fold_left`-style APIs; every traversal in this crate is
//! written against it.

/// Folds `sequence` from left to right, starting from `start`.
///
/// Each step computes `accumulator = function(element, accumulator)`. An
/// empty sequence returns `start` unchanged. There is no short-circuit.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::fold;
///
/// let sentence = fold(
///     |word: &str, text: String| if text.is_empty() { word.to_string() } else { text + " " + word },
///     ["fold", "from", "left"],
///     String::new(),
/// );
/// assert_eq!(sentence, "fold from left");
/// ```
pub fn fold<I, B, F>(mut function: F, sequence: I, start: B) -> B
where
    I: IntoIterator,
    F: FnMut(I::Item, B) -> B,
{
    let mut accumulator = start;
    for element in sequence {
        accumulator = function(element, accumulator);
    }
    accumulator
}

/// Folds `sequence` from left to right into a value of the element type.
///
/// - An empty sequence returns `start` unchanged, so `None` without a seed.
/// - With `start == None` the first element seeds the accumulator and
///   combining begins at the second element.
/// - Otherwise combining begins at the first element.
///
/// Each step computes `accumulator = function(element, accumulator)`.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::reduce;
///
/// let add = |element: i32, accumulator: i32| accumulator + element;
///
/// assert_eq!(reduce(add, vec![1, 2, 3], Some(0)), Some(6));
/// assert_eq!(reduce(add, vec![1, 2, 3], None), Some(6));
/// assert_eq!(reduce(add, Vec::<i32>::new(), Some(5)), Some(5));
/// assert_eq!(reduce(add, Vec::<i32>::new(), None), None);
/// ```
///
/// The argument order matters for non-commutative functions:
///
/// ```
/// use fpkit::sequence::reduce;
///
/// // seed 1, then 2 - 1 = 1, then 3 - 1 = 2
/// let difference = reduce(|element: i32, accumulator: i32| element - accumulator, vec![1, 2, 3], None);
/// assert_eq!(difference, Some(2));
/// ```
pub fn reduce<I, F>(function: F, sequence: I, start: Option<I::Item>) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    let mut elements = sequence.into_iter();
    let seed = match start {
        Some(start) => start,
        None => elements.next()?,
    };
    Some(fold(function, elements, seed))
}
