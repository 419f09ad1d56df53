//! Named property lookup.
//!
//! Rust structs already have typed field access, so property lookup by name
//! is offered for string-keyed maps: [`Record`], `HashMap<String, V>` and
//! `BTreeMap<String, V>`, all through the [`PropertySource`] trait. A missing
//! property is `None`.
//!
//! # Examples
//!
//! ```
//! use fpkit::record::{get_property, Record};
//!
//! let point = Record::new().with("x", 5).with("y", 7);
//!
//! assert_eq!(get_property("x", &point), Some(&5));
//! assert_eq!(get_property("z", &point), None);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Something that can answer a property lookup by name.
pub trait PropertySource<V> {
    /// Returns the value stored under `name`, or `None` if there is none.
    fn property(&self, name: &str) -> Option<&V>;
}

/// A string-keyed record of homogeneous values, ordered by name.
///
/// With the `serde` feature a `Record` serializes as a plain map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record<V> {
    fields: BTreeMap<String, V>,
}

impl<V> Record<V> {
    /// Creates an empty record.
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns the record with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: V) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Sets `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        self.fields.insert(name.into(), value)
    }

    /// Removes `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        self.fields.remove(name)
    }

    /// Returns the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.fields.get(name)
    }

    /// Returns `true` if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The number of properties.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no properties.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Property names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = std::collections::btree_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<V> PropertySource<V> for Record<V> {
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> PropertySource<V> for HashMap<String, V, S> {
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> PropertySource<V> for BTreeMap<String, V> {
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Returns the value of the property `name` in `source`, or `None` if it is
/// missing.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use fpkit::record::get_property;
///
/// let mut scores = HashMap::new();
/// scores.insert(String::from("a"), 5);
///
/// assert_eq!(get_property("a", &scores), Some(&5));
/// assert_eq!(get_property("z", &scores), None);
/// ```
pub fn get_property<'a, S, V>(name: &str, source: &'a S) -> Option<&'a V>
where
    S: PropertySource<V> + ?Sized,
{
    source.property(name)
}

/// Curried [`get_property`]: fixes the name and returns a function awaiting
/// the source.
///
/// The returned function clones the value out of the source so that it can
/// be mapped over a sequence of records.
///
/// # Examples
///
/// ```
/// use fpkit::record::{property, Record};
/// use fpkit::sequence::map;
///
/// let people = [
///     Record::new().with("age", 31),
///     Record::new().with("age", 27),
///     Record::new().with("height", 180),
/// ];
///
/// let ages = map(property::<Record<u32>, u32>("age"), &people);
/// assert_eq!(ages, vec![Some(31), Some(27), None]);
/// ```
pub fn property<S, V>(name: &str) -> impl Fn(&S) -> Option<V> + use<S, V>
where
    S: PropertySource<V> + ?Sized,
    V: Clone,
{
    let name = name.to_owned();
    move |source: &S| source.property(&name).cloned()
}
