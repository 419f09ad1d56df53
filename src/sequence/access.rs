//! Positional access.

/// Returns the element at position 0, or `None` for an empty sequence.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::first;
///
/// assert_eq!(first(&['a', 'b', 'c']), Some(&'a'));
/// assert_eq!(first(Vec::<char>::new()), None);
/// ```
pub fn first<I>(sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().next()
}

/// Returns the element at the highest position, or `None` for an empty
/// sequence.
///
/// Reads from the back of the iterator, so slices and `Vec`s answer without
/// walking their elements.
///
/// # Examples
///
/// ```
/// use fpkit::sequence::last;
///
/// assert_eq!(last(&['a', 'b', 'c']), Some(&'c'));
/// assert_eq!(last(Vec::<char>::new()), None);
/// ```
pub fn last<I>(sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
{
    sequence.into_iter().next_back()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_is_first_and_last() {
        let single = [9];
        assert_eq!(first(&single), last(&single));
    }

    #[test]
    fn test_owned_sequence_yields_owned_elements() {
        let words = vec![String::from("head"), String::from("tail")];
        assert_eq!(last(words), Some(String::from("tail")));
    }
}
