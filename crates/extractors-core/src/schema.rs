//! Keys and schemas.

use crate::Parser;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// A named key looked up in a source.
///
/// Depending on the source this is an environment variable name, a form
/// field name, or a route parameter name. `Display` wraps the name in braces
/// so it stands out in error messages.
///
/// ```rust
/// use extractors_core::Key;
///
/// let key = Key::from("DATABASE_URL");
/// assert_eq!(key.name(), "DATABASE_URL");
/// assert_eq!(key.to_string(), "{DATABASE_URL}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

impl Key {
    /// Creates a key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the bare key name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Describes how a set of keys should be decoded.
///
/// Keys are unique; inserting a key twice keeps the last parser. Walks visit
/// keys in lexicographic order, so when several fields would fail the
/// reported one is always the same.
///
/// # Example
///
/// ```rust
/// use extractors_core::{Parser, Schema};
///
/// let schema = Schema::new()
///     .field("HOST", Parser::string(true))
///     .field("PORT", Parser::int_or(8080));
///
/// assert_eq!(schema.len(), 2);
/// assert!(schema.get("PORT").is_some_and(|p| p.has_default()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: BTreeMap<Key, Parser>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any parser already registered for `key`.
    pub fn field(mut self, key: impl Into<Key>, parser: Parser) -> Self {
        self.insert(key, parser);
        self
    }

    /// Adds a field in place, returning the parser it replaced.
    pub fn insert(&mut self, key: impl Into<Key>, parser: Parser) -> Option<Parser> {
        self.fields.insert(key.into(), parser)
    }

    /// Returns the parser registered for `key`.
    pub fn get(&self, key: &str) -> Option<&Parser> {
        self.fields.get(key)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Parser)> {
        self.fields.iter()
    }
}

impl<K: Into<Key>> FromIterator<(K, Parser)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, Parser)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, p)| (k.into(), p)).collect(),
        }
    }
}

impl<K: Into<Key>, const N: usize> From<[(K, Parser); N]> for Schema {
    fn from(fields: [(K, Parser); N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a Key, &'a Parser);
    type IntoIter = std::collections::btree_map::Iter<'a, Key, Parser>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
