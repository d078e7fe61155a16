//! The data a record is decoded from.
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A flat, multi-valued mapping from string keys to lists of string values.
///
/// Keys are case-sensitive. The decoder never mutates a source.
pub trait Source {
    /// All the values stored under `key`, in the order they were supplied.
    fn values(&self, key: &str) -> Option<&[String]>;
}

impl<S: BuildHasher> Source for HashMap<String, Vec<String>, S> {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl Source for BTreeMap<String, Vec<String>> {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }
}

impl<T: Source + ?Sized> Source for &T {
    fn values(&self, key: &str) -> Option<&[String]> {
        (**self).values(key)
    }
}

/// An owned [`Source`], the typical output of parsing a query string or a
/// `application/x-www-form-urlencoded` body.
///
/// # Example
///
/// ```rust
/// use urlp::Values;
///
/// let values = Values::parse("room_id=1&room_id=2&name=Hi%20there");
/// assert_eq!(values.get("name"), Some("Hi there"));
/// assert_eq!(values.get_all("room_id"), ["1", "2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    inner: HashMap<String, Vec<String>>,
}

impl Values {
    /// Create an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a percent-encoded query string (without the leading `?`).
    ///
    /// `+` is decoded as a space. Repeated keys accumulate their values in order.
    pub fn parse(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes()).collect()
    }

    /// Add a value to the list stored under `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Replace the list stored under `key`, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.inner.insert(key.into(), values)
    }

    /// Remove the list stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.inner.remove(key)
    }

    /// The first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value stored under `key`. Empty if the key is absent.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.inner.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// `true` if `key` is present, even with an empty list of values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over keys and their values, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl Source for Values {
    fn values(&self, key: &str) -> Option<&[String]> {
        self.inner.get(key).map(Vec::as_slice)
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

impl<S: BuildHasher> From<HashMap<String, Vec<String>, S>> for Values {
    fn from(map: HashMap<String, Vec<String>, S>) -> Self {
        Self {
            inner: map.into_iter().collect(),
        }
    }
}
