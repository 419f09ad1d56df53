//! Linear search from either end.

/// Returns the first element, scanning from position 0, for which
/// `predicate` holds.
///
/// Stops at the first match. Returns `None` if no element matches.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::find_first;
///
/// let numbers = [1, 2, 3, 4];
/// assert_eq!(find_first(|value: &&i32| **value > 2, &numbers), Some(&3));
/// assert_eq!(find_first(|value: &i32| *value > 9, numbers), None);
/// ```
pub fn find_first<I, P>(predicate: P, sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().find(predicate)
}

/// Returns the first element, scanning from the highest position down, for
/// which `predicate` holds.
///
/// Stops at the first match, which is the highest-position matching element.
/// Returns `None` if no element matches.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::find_last;
///
/// let numbers = vec![1, 2, 3, 4];
/// assert_eq!(find_last(|value: &i32| *value > 2, numbers), Some(4));
/// ```
pub fn find_last<I, P>(predicate: P, sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().rev().find(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_find_first_short_circuits() {
        let visited = Cell::new(0);
        let found = find_first(
            |value: &i32| {
                visited.set(visited.get() + 1);
                *value == 2
            },
            vec![1, 2, 3, 4],
        );

        assert_eq!(found, Some(2));
        assert_eq!(visited.get(), 2);
    }

    #[test]
    fn test_find_last_short_circuits_from_the_back() {
        let visited = Cell::new(0);
        let found = find_last(
            |value: &i32| {
                visited.set(visited.get() + 1);
                *value < 3
            },
            vec![1, 2, 3, 4],
        );

        assert_eq!(found, Some(2));
        assert_eq!(visited.get(), 3);
    }

    #[test]
    fn test_find_on_empty_is_none() {
        assert_eq!(find_first(|_: &i32| true, Vec::<i32>::new()), None);
        assert_eq!(find_last(|_: &i32| true, Vec::<i32>::new()), None);
    }
}
