//! The schema walker.

use crate::{Decoded, ExtractError, ExtractionSource, Key, Raw, Schema, Values};
use tracing::{debug, trace};

/// Something that yields the raw value for a key.
///
/// Implemented by each concrete source (environment, form values, path
/// parameters). Lookups are read-only.
pub trait Source {
    /// Which kind of source this is, for error reporting.
    fn origin(&self) -> ExtractionSource;

    /// Returns the raw value for `key`.
    ///
    /// Sources that can tell "unknown key" apart from "empty value" return
    /// [`ExtractError::FieldNotPresent`] for the former.
    fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError>;
}

impl<S: Source + ?Sized> Source for &S {
    fn origin(&self) -> ExtractionSource {
        (**self).origin()
    }

    fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
        (**self).lookup(key)
    }
}

/// Decodes every schema field from `source`.
///
/// Fields are visited in key order and the walk stops at the first failure,
/// which is returned annotated with the offending key. Raw values are never
/// logged.
///
/// # Example
///
/// ```rust
/// use extractors_core::{extract, ExtractError, ExtractionSource, Key, Parser, Raw, Schema, Source};
///
/// struct Fixed;
///
/// impl Source for Fixed {
///     fn origin(&self) -> ExtractionSource {
///         ExtractionSource::Env
///     }
///
///     fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
///         Ok(match key.name() {
///             "BAR" => Raw::non_empty("12"),
///             _ => Raw::Absent,
///         })
///     }
/// }
///
/// let schema = Schema::new()
///     .field("BAR", Parser::int(true))
///     .field("BAZ", Parser::string_or("fallback"));
///
/// let values = extract(&Fixed, &schema).unwrap();
/// assert_eq!(values.int("BAR"), Some(12));
/// assert_eq!(values.string("BAZ"), Some("fallback"));
/// ```
pub fn extract<S: Source + ?Sized>(source: &S, schema: &Schema) -> Result<Values, ExtractError> {
    let origin = source.origin();
    debug!(%origin, fields = schema.len(), "extracting fields");

    let mut values = Values::new(origin);
    for (key, parser) in schema {
        let decoded = source
            .lookup(key)
            .and_then(|raw| {
                parser
                    .decode(&raw)
                    .map_err(|error| ExtractError::field(origin, key, error))
            })
            .map_err(|err| {
                debug!(%origin, %key, kind = ?err.kind(), "field extraction failed");
                err
            })?;

        match decoded {
            Decoded::Present(value) => {
                trace!(%key, kind = %parser.kind(), "field decoded");
                values.insert(key.clone(), value, false);
            }
            Decoded::Default(value) => {
                trace!(%key, kind = %parser.kind(), "field absent, using default");
                values.insert(key.clone(), value, true);
            }
            Decoded::Absent => {
                trace!(%key, kind = %parser.kind(), "optional field absent");
            }
        }
    }

    debug!(%origin, decoded = values.len(), "fields extracted");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeError, ErrorKind, Parser};
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MapSource {
        entries: HashMap<&'static str, &'static str>,
        visited: RefCell<Vec<String>>,
    }

    impl MapSource {
        fn new(entries: &[(&'static str, &'static str)]) -> Self {
            Self {
                entries: entries.iter().copied().collect(),
                visited: RefCell::new(Vec::new()),
            }
        }
    }

    impl Source for MapSource {
        fn origin(&self) -> ExtractionSource {
            ExtractionSource::Env
        }

        fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
            self.visited.borrow_mut().push(key.name().to_owned());
            Ok(self
                .entries
                .get(key.name())
                .map_or(Raw::Absent, |v| Raw::non_empty(*v)))
        }
    }

    #[test]
    fn test_extract_success() {
        let source = MapSource::new(&[("FOO", "foo"), ("BAR", "12")]);
        let schema = Schema::new()
            .field("FOO", Parser::string(true))
            .field("BAR", Parser::int(true));

        let values = extract(&source, &schema).unwrap();

        assert_eq!(values.string("FOO"), Some("foo"));
        assert_eq!(values.int("BAR"), Some(12));
        assert_eq!(values.origin(), ExtractionSource::Env);
    }

    #[test]
    fn test_extract_missing_required() {
        let source = MapSource::new(&[("FOO", ""), ("BAR", "12")]);
        let schema = Schema::new()
            .field("FOO", Parser::string(true))
            .field("BAR", Parser::int(true));

        let err = extract(&source, &schema).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert_eq!(err.key().map(Key::name), Some("FOO"));
        assert_eq!(err.to_string(), "failed to parse {FOO}: missing");
    }

    #[test]
    fn test_extract_stops_at_first_failure() {
        let source = MapSource::new(&[("A", "x"), ("B", "y"), ("C", "3")]);
        let schema = Schema::new()
            .field("C", Parser::int(true))
            .field("B", Parser::int(true))
            .field("A", Parser::int(true));

        let err = extract(&source, &schema).unwrap_err();

        // Key order is lexicographic, so A is always the reported failure.
        assert_eq!(err.key().map(Key::name), Some("A"));
        assert!(matches!(
            err.decode_error(),
            Some(DecodeError::Malformed { raw, .. }) if raw == "x"
        ));
        assert_eq!(*source.visited.borrow(), ["A"]);
    }

    #[test]
    fn test_extract_optional_and_default() {
        let source = MapSource::new(&[]);
        let schema = Schema::new()
            .field("OPT", Parser::float(false))
            .field("DEF", Parser::float_or(50.5));

        let values = extract(&source, &schema).unwrap();

        assert!(!values.contains("OPT"));
        assert_eq!(values.float("DEF"), Some(50.5));
        assert!(values.is_default("DEF"));
    }

    #[test]
    fn test_extract_propagates_source_errors() {
        struct Strict;

        impl Source for Strict {
            fn origin(&self) -> ExtractionSource {
                ExtractionSource::Path
            }

            fn lookup(&self, key: &Key) -> Result<Raw<'_>, ExtractError> {
                Err(ExtractError::not_present(self.origin(), key))
            }
        }

        let schema = Schema::new().field("id", Parser::string(false));
        let err = extract(&Strict, &schema).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FieldNotPresent);
    }

    #[test]
    fn test_extract_empty_schema() {
        let values = extract(&MapSource::new(&[("FOO", "foo")]), &Schema::new()).unwrap();
        assert!(values.is_empty());
    }
}
