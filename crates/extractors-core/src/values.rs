//! Decoded values produced by a schema walk.

use crate::{ExtractionSource, Key, Secret, Value};
use std::collections::{BTreeMap, BTreeSet};

/// The values decoded by one walk, keyed by schema key.
///
/// Keys whose optional parser saw no value have no entry. Keys filled from a
/// parser's default are reported by [`is_default`](Self::is_default).
///
/// # Example
///
/// ```rust
/// use extractors_core::{ExtractionSource, Key, Value, Values};
///
/// let mut values = Values::new(ExtractionSource::Env);
/// values.insert(Key::from("PORT"), Value::Int(8080), true);
///
/// assert_eq!(values.int("PORT"), Some(8080));
/// assert!(values.is_default("PORT"));
/// assert_eq!(values.string("PORT"), None);
/// ```
#[derive(Debug)]
pub struct Values {
    origin: ExtractionSource,
    entries: BTreeMap<Key, Value>,
    defaulted: BTreeSet<Key>,
}

impl Values {
    /// Creates an empty set of values for the given source.
    pub fn new(origin: ExtractionSource) -> Self {
        Self {
            origin,
            entries: BTreeMap::new(),
            defaulted: BTreeSet::new(),
        }
    }

    /// Records a decoded value.
    pub fn insert(&mut self, key: Key, value: Value, from_default: bool) {
        if from_default {
            self.defaulted.insert(key.clone());
        } else {
            self.defaulted.remove(&key);
        }
        self.entries.insert(key, value);
    }

    /// Returns the source these values were read from.
    pub fn origin(&self) -> ExtractionSource {
        self.origin
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Removes and returns the value for `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.defaulted.remove(key);
        self.entries.remove(key)
    }

    /// Returns true if a value was recorded for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns true if the value for `key` came from the parser's default.
    pub fn is_default(&self, key: &str) -> bool {
        self.defaulted.contains(key)
    }

    /// Returns the number of recorded values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates recorded values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Returns the text value for `key`.
    pub fn string(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the signed integer value for `key`.
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value for `key`.
    pub fn float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value for `key`.
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the unsigned integer value for `key`.
    pub fn uint64(&self, key: &str) -> Option<u64> {
        match self.get(key)? {
            Value::UInt64(u) => Some(*u),
            _ => None,
        }
    }

    /// Returns the secret value for `key`.
    pub fn secret(&self, key: &str) -> Option<&Secret> {
        match self.get(key)? {
            Value::Secret(s) => Some(s),
            _ => None,
        }
    }

    /// Moves the secret value for `key` out of the set.
    ///
    /// Values of any other kind are left in place.
    pub fn take_secret(&mut self, key: &str) -> Option<Secret> {
        if !matches!(self.get(key)?, Value::Secret(_)) {
            return None;
        }
        match self.remove(key)? {
            Value::Secret(s) => Some(s),
            _ => None,
        }
    }
}
