//! Curried forms of the sequence operations.
//!
//! Each function here takes the operation's function argument and returns a
//! function awaiting the sequence, so operations can be configured once and
//! passed around or composed:
//!
//! ```
//! use fpkit::compose;
//! use fpkit::sequence::curried;
//!
//! let doubled = curried::map::<Vec<i32>, _, _>(|value: i32| value * 2);
//! let evens = curried::filter::<Vec<i32>, _>(|value: &i32| value % 4 == 0);
//!
//! let pipeline = compose!(evens, doubled);
//! assert_eq!(pipeline(vec![1, 2, 3, 4]), vec![4, 8]);
//! ```
//!
//! The folds take three arguments and curry twice:
//! `curried::reduce(function)(sequence)(start)`. The intermediate function
//! holding the sequence can be called repeatedly, so the sequence must be
//! `Clone`; pass a slice to make that free. The intermediate function is a
//! boxed [`Folding`].

use std::rc::Rc;

/// A fold bound to its function and sequence, awaiting the start value.
pub type Folding<'a, S, R> = Box<dyn Fn(S) -> R + 'a>;

/// Curried [`find_first`](super::find_first).
///
/// # Examples
///
/// ```
/// use fpkit::sequence::curried;
///
/// let first_large = curried::find_first::<&[i32], _>(|value: &&i32| **value > 2);
/// assert_eq!(first_large(&[1, 2, 3, 4]), Some(&3));
/// assert_eq!(first_large(&[1]), None);
/// ```
pub fn find_first<I, P>(predicate: P) -> impl Fn(I) -> Option<I::Item>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool,
{
    move |sequence: I| super::find_first(&predicate, sequence)
}

/// Curried [`find_last`](super::find_last).
///
/// # Examples
///
/// ```
/// use fpkit::sequence::curried;
///
/// let last_large = curried::find_last::<Vec<i32>, _>(|value: &i32| *value > 2);
/// assert_eq!(last_large(vec![1, 2, 3, 4]), Some(4));
/// ```
pub fn find_last<I, P>(predicate: P) -> impl Fn(I) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    P: Fn(&I::Item) -> bool,
{
    move |sequence: I| super::find_last(&predicate, sequence)
}

/// Curried [`fold`](super::fold): `fold(function)(sequence)(start)`.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::curried;
///
/// let concatenate = curried::fold::<&[&str], String, _>(|part: &&str, text: String| text + *part);
/// let over_parts = concatenate(&["a", "b", "c"]);
///
/// assert_eq!(over_parts(String::new()), "abc");
/// assert_eq!(over_parts(String::from(">")), ">abc");
/// ```
pub fn fold<'a, I, B, F>(function: F) -> impl Fn(I) -> Folding<'a, B, B>
where
    I: IntoIterator + Clone + 'a,
    B: 'a,
    F: Fn(I::Item, B) -> B + 'a,
{
    let function = Rc::new(function);
    move |sequence: I| -> Folding<'a, B, B> {
        let function = Rc::clone(&function);
        Box::new(move |start: B| super::fold(&*function, sequence.clone(), start))
    }
}

/// Curried [`reduce`](super::reduce): `reduce(function)(sequence)(start)`.
///
/// The combining function receives `(element, accumulator)`.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::curried;
///
/// let sum = curried::reduce::<Vec<i32>, _>(|element: i32, accumulator: i32| accumulator + element);
/// let over_numbers = sum(vec![1, 2, 3]);
///
/// assert_eq!(over_numbers(Some(0)), Some(6));
/// assert_eq!(over_numbers(Some(10)), Some(16));
/// assert_eq!(sum(Vec::new())(None), None);
/// ```
pub fn reduce<'a, I, F>(
    function: F,
) -> impl Fn(I) -> Folding<'a, Option<I::Item>, Option<I::Item>>
where
    I: IntoIterator + Clone + 'a,
    F: Fn(I::Item, I::Item) -> I::Item + 'a,
{
    let function = Rc::new(function);
    move |sequence: I| -> Folding<'a, Option<I::Item>, Option<I::Item>> {
        let function = Rc::clone(&function);
        Box::new(move |start: Option<I::Item>| {
            super::reduce(&*function, sequence.clone(), start)
        })
    }
}

/// Curried [`map`](super::map).
pub fn map<I, B, F>(function: F) -> impl Fn(I) -> Vec<B>
where
    I: IntoIterator,
    F: Fn(I::Item) -> B,
{
    move |sequence: I| super::map(&function, sequence)
}

/// Curried [`filter`](super::filter).
pub fn filter<I, P>(predicate: P) -> impl Fn(I) -> Vec<I::Item>
where
    I: IntoIterator,
    P: Fn(&I::Item) -> bool,
{
    move |sequence: I| super::filter(&predicate, sequence)
}

/// Curried [`each`](super::each).
///
/// The returned function only borrows `function` immutably, so side effects
/// go through interior mutability.
///
/// ```
/// use std::cell::RefCell;
/// use fpkit::sequence::curried;
///
/// let log = RefCell::new(Vec::new());
/// let record = curried::each::<&[u8], _>(|byte: &u8| log.borrow_mut().push(*byte));
///
/// record(&[1, 2]);
/// record(&[3]);
/// assert_eq!(*log.borrow(), vec![1, 2, 3]);
/// ```
pub fn each<I, F>(function: F) -> impl Fn(I)
where
    I: IntoIterator,
    F: Fn(I::Item),
{
    move |sequence: I| super::each(&function, sequence)
}

/// Curried [`min_by`](super::min_by).
pub fn min_by<I, K, F>(key: F) -> impl Fn(I) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: Fn(&I::Item) -> K,
{
    move |sequence: I| super::min_by(&key, sequence)
}

/// Curried [`max_by`](super::max_by).
pub fn max_by<I, K, F>(key: F) -> impl Fn(I) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: Fn(&I::Item) -> K,
{
    move |sequence: I| super::max_by(&key, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curried_map_is_reusable() {
        let lengths = map::<Vec<&str>, _, _>(|word: &str| word.len());
        assert_eq!(lengths(vec!["a", "bb"]), vec![1, 2]);
        assert_eq!(lengths(vec![]), Vec::<usize>::new());
    }

    #[test]
    fn test_curried_min_and_max_share_tie_break() {
        let entries: [(u8, char); 4] = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let by_score = |entry: &&(u8, char)| entry.0;
        let lowest = min_by::<&[(u8, char)], _, _>(by_score);
        let highest = max_by::<&[(u8, char)], _, _>(by_score);

        assert_eq!(lowest(&entries), Some(&(1, 'b')));
        assert_eq!(highest(&entries), Some(&(2, 'a')));
    }

    #[test]
    fn test_curried_fold_reuses_sequence() {
        let count = fold::<&[i32], usize, _>(|_: &i32, seen: usize| seen + 1);
        let over_three = count(&[7, 8, 9]);
        assert_eq!(over_three(0), 3);
        assert_eq!(over_three(10), 13);
    }
}
