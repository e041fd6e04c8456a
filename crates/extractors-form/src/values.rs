//! Multi-valued form data.

use extractors_core::{ExtractError, ExtractionSource, Key, Raw, Source};
use std::collections::HashMap;

/// Form or query values: each key maps to zero or more strings.
///
/// # Example
///
/// ```rust
/// use extractors_form::FormValues;
///
/// let values = FormValues::parse_urlencoded("tag=a&tag=b&name=hello+world").unwrap();
///
/// assert_eq!(values.get("tag"), ["a", "b"]);
/// assert_eq!(values.first("name"), Some("hello world"));
/// assert!(values.get("missing").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    inner: HashMap<String, Vec<String>>,
}

impl FormValues {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` string.
    pub fn parse_urlencoded(input: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let mut values = Self::new();
        values.extend_urlencoded(input)?;
        Ok(values)
    }

    /// Appends the pairs of an `application/x-www-form-urlencoded` string
    /// after any values already present.
    pub fn extend_urlencoded(&mut self, input: &str) -> Result<(), serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(input)?;
        for (key, value) in pairs {
            self.append(key, value);
        }
        Ok(())
    }

    /// Appends a value for `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces all values for `key`.
    pub fn set(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.inner.insert(key.into(), values);
    }

    /// Returns all values for `key`, empty if the key is unknown.
    pub fn get(&self, key: &str) -> &[String] {
        self.inner.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the first value for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).first().map(String::as_str)
    }

    /// Returns true if `key` was submitted, even with no values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for FormValues {
    fn from(inner: HashMap<String, Vec<String>>) -> Self {
        Self { inner }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.append(key, value);
        }
        values
    }
}

impl Source for FormValues {
    fn origin(&self) -> ExtractionSource {
        ExtractionSource::Form
    }

    fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
        Ok(Raw::from_slice(self.get(key.name())))
    }
}

/// View of [`FormValues`] that rejects keys which were never submitted.
pub(crate) struct Strict<'a>(pub(crate) &'a FormValues);

impl Source for Strict<'_> {
    fn origin(&self) -> ExtractionSource {
        ExtractionSource::Form
    }

    fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
        if !self.0.contains_key(key.name()) {
            return Err(ExtractError::not_present(ExtractionSource::Form, key));
        }
        self.0.lookup(key)
    }
}
