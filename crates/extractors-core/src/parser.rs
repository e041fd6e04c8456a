//! Decoding rules for raw string values.
//!
//! A [`Parser`] pairs a target [`Kind`] with a required/optional policy.
//! Sources hand it a [`Raw`] value and get back a [`Decoded`] outcome or a
//! [`DecodeError`].

use crate::{DecodeError, Secret};
use std::borrow::Cow;
use std::fmt;

/// Target type of a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Text, taken as-is
    String,
    /// Signed 64-bit integer
    Int,
    /// 64-bit float
    Float,
    /// Boolean (`1`/`t`/`true`, `0`/`f`/`false`, any case)
    Bool,
    /// Text wrapped in a redacting [`Secret`]
    Secret,
    /// Unsigned 64-bit integer
    UInt64,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Secret => write!(f, "secret"),
            Self::UInt64 => write!(f, "uint64"),
        }
    }
}

/// A successfully decoded value.
#[derive(Debug)]
pub enum Value {
    /// Decoded text
    String(String),
    /// Decoded signed integer
    Int(i64),
    /// Decoded float
    Float(f64),
    /// Decoded boolean
    Bool(bool),
    /// Decoded unsigned integer
    UInt64(u64),
    /// Decoded sensitive text
    Secret(Secret),
}

impl Value {
    /// Returns the kind this value was decoded as.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::String(_) => Kind::String,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Bool(_) => Kind::Bool,
            Self::UInt64(_) => Kind::UInt64,
            Self::Secret(_) => Kind::Secret,
        }
    }
}

/// Raw representation of one key as read from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raw<'a> {
    /// The source has nothing usable for the key.
    Absent,
    /// Exactly one raw value.
    One(Cow<'a, str>),
    /// More than one raw value (multi-valued sources only).
    Many(usize),
}

impl<'a> Raw<'a> {
    /// Treats an empty string as absent, as env and path sources do.
    pub fn non_empty(text: impl Into<Cow<'a, str>>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::Absent
        } else {
            Self::One(text)
        }
    }

    /// Classifies a list of values the way multi-valued sources do.
    ///
    /// A single empty string is a present value here.
    pub fn from_slice(values: &'a [String]) -> Self {
        match values {
            [] => Self::Absent,
            [one] => Self::One(Cow::Borrowed(one.as_str())),
            many => Self::Many(many.len()),
        }
    }
}

/// Outcome of decoding one raw value.
#[derive(Debug)]
pub enum Decoded {
    /// A present raw value was converted.
    Present(Value),
    /// The raw value was absent and the parser's default applies.
    Default(Value),
    /// The raw value was absent and the parser is optional without default.
    Absent,
}

/// Default carried by `..._or` parsers.
///
/// Secrets never have defaults, which keeps [`Secret`] free of `Clone`.
#[derive(Debug, Clone, PartialEq)]
enum Fallback {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Fallback {
    fn to_value(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Int(i) => Value::Int(*i),
            Self::Float(f) => Value::Float(*f),
            Self::Bool(b) => Value::Bool(*b),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Policy {
    Required,
    Optional,
    Default(Fallback),
}

/// A decoding rule: target kind plus required/optional policy.
///
/// # Example
///
/// ```rust
/// use extractors_core::{Decoded, Parser, Raw, Value};
///
/// let port = Parser::int_or(8080);
/// match port.decode(&Raw::Absent).unwrap() {
///     Decoded::Default(Value::Int(p)) => assert_eq!(p, 8080),
///     other => panic!("unexpected {other:?}"),
/// }
///
/// let port = Parser::int(true);
/// assert!(port.decode(&Raw::non_empty("http")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Parser {
    kind: Kind,
    policy: Policy,
}

impl Parser {
    fn with_policy(kind: Kind, required: bool) -> Self {
        Self {
            kind,
            policy: if required {
                Policy::Required
            } else {
                Policy::Optional
            },
        }
    }

    /// Text parser.
    pub fn string(required: bool) -> Self {
        Self::with_policy(Kind::String, required)
    }

    /// Text parser falling back to `alt` when absent.
    pub fn string_or(alt: impl Into<String>) -> Self {
        Self {
            kind: Kind::String,
            policy: Policy::Default(Fallback::String(alt.into())),
        }
    }

    /// Signed integer parser.
    pub fn int(required: bool) -> Self {
        Self::with_policy(Kind::Int, required)
    }

    /// Signed integer parser falling back to `alt` when absent.
    pub fn int_or(alt: i64) -> Self {
        Self {
            kind: Kind::Int,
            policy: Policy::Default(Fallback::Int(alt)),
        }
    }

    /// Float parser.
    pub fn float(required: bool) -> Self {
        Self::with_policy(Kind::Float, required)
    }

    /// Float parser falling back to `alt` when absent.
    pub fn float_or(alt: f64) -> Self {
        Self {
            kind: Kind::Float,
            policy: Policy::Default(Fallback::Float(alt)),
        }
    }

    /// Boolean parser.
    pub fn bool(required: bool) -> Self {
        Self::with_policy(Kind::Bool, required)
    }

    /// Boolean parser falling back to `alt` when absent.
    pub fn bool_or(alt: bool) -> Self {
        Self {
            kind: Kind::Bool,
            policy: Policy::Default(Fallback::Bool(alt)),
        }
    }

    /// Unsigned integer parser.
    pub fn uint64(required: bool) -> Self {
        Self::with_policy(Kind::UInt64, required)
    }

    /// Secret text parser.
    pub fn secret(required: bool) -> Self {
        Self::with_policy(Kind::Secret, required)
    }

    /// Makes the parser optional, dropping any default.
    pub fn optional(mut self) -> Self {
        self.policy = Policy::Optional;
        self
    }

    /// Returns the target kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns true if an absent value is an error.
    pub fn is_required(&self) -> bool {
        matches!(self.policy, Policy::Required)
    }

    /// Returns true if the parser carries a default.
    pub fn has_default(&self) -> bool {
        matches!(self.policy, Policy::Default(_))
    }

    /// Decodes a raw value according to the parser's kind and policy.
    pub fn decode(&self, raw: &Raw<'_>) -> Result<Decoded, DecodeError> {
        match raw {
            Raw::Many(count) => Err(DecodeError::MultipleValues { count: *count }),
            Raw::Absent => match &self.policy {
                Policy::Required => Err(DecodeError::Missing),
                Policy::Optional => Ok(Decoded::Absent),
                Policy::Default(fallback) => Ok(Decoded::Default(fallback.to_value())),
            },
            Raw::One(text) => self.convert(text).map(Decoded::Present),
        }
    }

    fn convert(&self, text: &str) -> Result<Value, DecodeError> {
        let malformed = |reason: &dyn fmt::Display| DecodeError::malformed(text, self.kind, reason);
        match self.kind {
            Kind::String => Ok(Value::String(text.to_owned())),
            Kind::Secret => Ok(Value::Secret(Secret::new(text))),
            Kind::Int => text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| malformed(&e)),
            Kind::Float => text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| malformed(&e)),
            // u64::from_str allows a leading '+'; unsigned segments must not.
            Kind::UInt64 if text.starts_with('+') => Err(malformed(&"invalid syntax")),
            Kind::UInt64 => text
                .parse::<u64>()
                .map(Value::UInt64)
                .map_err(|e| malformed(&e)),
            Kind::Bool => parse_bool(text)
                .map(Value::Bool)
                .ok_or_else(|| malformed(&"invalid syntax")),
        }
    }
}

/// Parse a boolean from a string.
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
