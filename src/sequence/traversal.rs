//! Traversals built on [`fold`] and [`reduce`].

use super::fold::{fold, reduce};

/// Returns a new `Vec` holding `function(element)` for each element, in
/// order.
///
/// An empty sequence gives an empty `Vec`.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::map;
///
/// assert_eq!(map(|value: i32| value * 2, vec![1, 2, 3]), vec![2, 4, 6]);
/// assert_eq!(map(|value: &str| value.len(), ["a", "bcd"]), vec![1, 3]);
/// assert!(map(|value: i32| value * 2, Vec::<i32>::new()).is_empty());
/// ```
pub fn map<I, B, F>(mut function: F, sequence: I) -> Vec<B>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    fold(
        |element, mut mapped: Vec<B>| {
            mapped.push(function(element));
            mapped
        },
        sequence,
        Vec::new(),
    )
}

/// Returns a new `Vec` holding the elements for which `predicate` holds,
/// in their original relative order.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::filter;
///
/// assert_eq!(filter(|value: &i32| value % 2 == 0, vec![1, 2, 3, 4]), vec![2, 4]);
/// ```
pub fn filter<I, P>(mut predicate: P, sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    fold(
        |element, mut kept: Vec<I::Item>| {
            if predicate(&element) {
                kept.push(element);
            }
            kept
        },
        sequence,
        Vec::new(),
    )
}

/// Calls `function` once per element, in order, for its side effects.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::each;
///
/// let mut seen = Vec::new();
/// each(|value: &i32| seen.push(*value), &[3, 1, 2]);
/// assert_eq!(seen, vec![3, 1, 2]);
/// ```
pub fn each<I, F>(mut function: F, sequence: I)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    fold(|element, ()| function(element), sequence, ());
}

/// Returns the element whose key is smallest.
///
/// A later element replaces the current candidate only when its key is
/// strictly smaller, so the earliest of several minimal elements wins. Keys
/// that are incomparable (such as `NaN`) never replace the candidate.
/// Returns `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::min_by;
///
/// assert_eq!(min_by(|value: &i32| *value, vec![3, 1, 2]), Some(1));
///
/// let entries = [(1, 'a'), (1, 'b'), (2, 'c')];
/// assert_eq!(min_by(|entry: &&(i32, char)| entry.0, &entries), Some(&(1, 'a')));
/// ```
pub fn min_by<I, K, F>(mut key: F, sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    reduce(
        |element, candidate| {
            if key(&element) < key(&candidate) {
                element
            } else {
                candidate
            }
        },
        sequence,
        None,
    )
}

/// Returns the element whose key is largest.
///
/// A later element replaces the current candidate only when its key is
/// strictly larger, so the earliest of several maximal elements wins.
/// Returns `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::max_by;
///
/// assert_eq!(max_by(|value: &i32| *value, vec![3, 1, 2]), Some(3));
/// assert_eq!(max_by(|word: &&str| word.len(), ["ab", "cd", "e"]), Some("ab"));
/// ```
pub fn max_by<I, K, F>(mut key: F, sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item) -> K,
{
    reduce(
        |element, candidate| {
            if key(&element) > key(&candidate) {
                element
            } else {
                candidate
            }
        },
        sequence,
        None,
    )
}
