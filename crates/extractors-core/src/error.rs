//! Extraction error types.
//!
//! Decoding a single raw value fails with a [`DecodeError`]. The walker wraps
//! that in an [`ExtractError`] naming the key and the source it came from.

use crate::{Key, Kind};
use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Source of extraction (where the raw values were read from).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionSource {
    /// Process environment, an env file, or an in-memory map standing in for one
    Env,
    /// URL-encoded form body and query string values
    Form,
    /// Route parameters matched from the URL path
    Path,
}

impl fmt::Display for ExtractionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "environment"),
            Self::Form => write!(f, "form"),
            Self::Path => write!(f, "url path"),
        }
    }
}

/// Failure to decode one raw value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required value was absent.
    #[error("missing")]
    Missing,

    /// A present value does not conform to the target kind.
    #[error("unable to parse {raw:?} as {kind}: {reason}")]
    Malformed {
        /// The offending raw text.
        raw: String,
        /// The kind the text was decoded as.
        kind: Kind,
        /// Explanation from the underlying conversion.
        reason: String,
    },

    /// More than one value was supplied for a scalar field.
    #[error("expected only one value to exist, found {count}")]
    MultipleValues {
        /// Number of values present.
        count: usize,
    },
}

impl DecodeError {
    /// Create a new malformed value error.
    pub fn malformed(raw: impl Into<String>, kind: Kind, reason: impl fmt::Display) -> Self {
        Self::Malformed {
            raw: raw.into(),
            kind,
            reason: reason.to_string(),
        }
    }
}

/// Coarse classification of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field's raw representation denotes absence.
    MissingRequired,
    /// A present raw value failed type-specific conversion.
    MalformedValue,
    /// More than one raw value was present for a scalar destination.
    MultipleValues,
    /// The schema references a key the source does not know at all.
    FieldNotPresent,
    /// The backing source could not be consulted.
    SourceUnavailable,
}

/// Error returned by a schema walk.
///
/// # Example
///
/// ```rust
/// use extractors_core::{DecodeError, ErrorKind, ExtractError, ExtractionSource};
/// use http::StatusCode;
///
/// let err = ExtractError::field(ExtractionSource::Form, "email", DecodeError::Missing);
/// assert_eq!(err.kind(), ErrorKind::MissingRequired);
/// assert_eq!(err.to_string(), "failed to parse {email}: missing");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = ExtractError::field(ExtractionSource::Env, "FOO", DecodeError::Missing);
/// assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
/// ```
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The value for `key` could not be decoded.
    #[error("failed to parse {key}: {error}")]
    Field {
        /// Where the value was read from.
        origin: ExtractionSource,
        /// The offending key.
        key: Key,
        /// Underlying decode failure.
        #[source]
        error: DecodeError,
    },

    /// The source has no entry for `key`.
    #[error("{origin} element not present: {key}")]
    FieldNotPresent {
        /// Where the value was looked up.
        origin: ExtractionSource,
        /// The key that is not present.
        key: Key,
    },

    /// The source itself could not be read.
    #[error("{origin} source unavailable: {cause}")]
    SourceUnavailable {
        /// Which source failed.
        origin: ExtractionSource,
        /// Underlying error.
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ExtractError {
    /// Create a new field decode error.
    pub fn field(origin: ExtractionSource, key: impl Into<Key>, error: DecodeError) -> Self {
        Self::Field {
            origin,
            key: key.into(),
            error,
        }
    }

    /// Create a new field not present error.
    pub fn not_present(origin: ExtractionSource, key: impl Into<Key>) -> Self {
        Self::FieldNotPresent {
            origin,
            key: key.into(),
        }
    }

    /// Create a new source unavailable error.
    pub fn unavailable(
        origin: ExtractionSource,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::SourceUnavailable {
            origin,
            cause: cause.into(),
        }
    }

    /// Returns the error classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Field { error, .. } => match error {
                DecodeError::Missing => ErrorKind::MissingRequired,
                DecodeError::Malformed { .. } => ErrorKind::MalformedValue,
                DecodeError::MultipleValues { .. } => ErrorKind::MultipleValues,
            },
            Self::FieldNotPresent { .. } => ErrorKind::FieldNotPresent,
            Self::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
        }
    }

    /// Returns the extraction source.
    #[must_use]
    pub fn origin(&self) -> ExtractionSource {
        match self {
            Self::Field { origin, .. }
            | Self::FieldNotPresent { origin, .. }
            | Self::SourceUnavailable { origin, .. } => *origin,
        }
    }

    /// Returns the offending key if applicable.
    #[must_use]
    pub fn key(&self) -> Option<&Key> {
        match self {
            Self::Field { key, .. } | Self::FieldNotPresent { key, .. } => Some(key),
            Self::SourceUnavailable { .. } => None,
        }
    }

    /// Returns the decode failure if this error wraps one.
    #[must_use]
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Field { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the appropriate HTTP status code for this error.
    ///
    /// Environment errors are deployment problems and a path key missing
    /// from the route is a wiring mistake, so both map to 500. Every other
    /// form or path failure was caused by the request and maps to 400.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match (self.kind(), self.origin()) {
            (ErrorKind::FieldNotPresent, ExtractionSource::Path)
            | (_, ExtractionSource::Env) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Returns the error code suitable for error envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::MissingRequired => "MISSING_PARAMETER",
            ErrorKind::MalformedValue => "INVALID_PARAMETER",
            ErrorKind::MultipleValues => "MULTIPLE_VALUES",
            ErrorKind::FieldNotPresent => "FIELD_NOT_PRESENT",
            ErrorKind::SourceUnavailable => "SOURCE_UNAVAILABLE",
        }
    }
}
