//! Route parameter storage.
//!
//! Routers insert [`PathParams`] into the request extensions after matching,
//! so handlers can parse them without knowing the router.

use extractors_core::{ExtractError, ExtractionSource, Key, Raw, Source};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Maximum number of parameters stored inline (stack allocated).
const INLINE_PARAMS: usize = 4;

/// Parameters captured by a route match, as `(name, value)` pairs.
///
/// # Example
///
/// ```rust
/// use extractors_path::PathParams;
///
/// let mut params = PathParams::new();
/// params.push("userId", "123");
/// params.push("action", "view");
///
/// assert_eq!(params.get("userId"), Some("123"));
/// assert_eq!(params.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathParams {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl PathParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter. If `name` is already set, the earlier value wins on
    /// lookup.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value of the parameter `name`, if the route captured it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over the parameters in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<&HashMap<String, String>> for PathParams {
    fn from(map: &HashMap<String, String>) -> Self {
        map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

/// Classifies a route value: no entry is an error, an empty segment is absent.
fn classify<'a>(key: &Key, value: Option<&'a str>) -> Result<Raw<'a>, ExtractError> {
    value
        .map(Raw::non_empty)
        .ok_or_else(|| ExtractError::not_present(ExtractionSource::Path, key))
}

impl Source for PathParams {
    fn origin(&self) -> ExtractionSource {
        ExtractionSource::Path
    }

    fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
        classify(key, self.get(key.name()))
    }
}

/// Raw route variables, as produced by routers that expose a plain map.
pub(crate) struct RouteMap<'a>(pub(crate) &'a HashMap<String, String>);

impl Source for RouteMap<'_> {
    fn origin(&self) -> ExtractionSource {
        ExtractionSource::Path
    }

    fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
        classify(key, self.0.get(key.name()).map(String::as_str))
    }
}
