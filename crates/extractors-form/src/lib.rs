//! # Extractors Form
//!
//! Schema-driven parsing of URL-encoded form and query values.
//!
//! Form keys may carry several values. A key with exactly one value is
//! decoded, a key with no values is absent, and a key with more than one
//! value is always an error. A single empty value is present and decoded
//! like any other string.
//!
//! ## Example
//!
//! ```rust
//! use extractors_form as form;
//! use http::Request;
//!
//! let request = Request::post("/signup?ref=newsletter")
//!     .header("content-type", "application/x-www-form-urlencoded")
//!     .body(String::from("email=a%40b.c&age=31"))
//!     .unwrap();
//!
//! let values = form::parse_form(
//!     &request,
//!     &form::Schema::new()
//!         .field("email", form::string(true))
//!         .field("age", form::int(true))
//!         .field("ref", form::string_or("direct"))
//!         .field("subscribe", form::bool_or(false)),
//! )
//! .unwrap();
//!
//! assert_eq!(values.string("email"), Some("a@b.c"));
//! assert_eq!(values.int("age"), Some(31));
//! assert_eq!(values.string("ref"), Some("newsletter"));
//! assert_eq!(values.bool("subscribe"), Some(false));
//! ```

#![doc(html_root_url = "https://docs.rs/extractors-form/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod request;
mod values;

pub use config::{FormConfig, DEFAULT_MAX_BODY_SIZE};
pub use extractors_core::{ExtractError, Key, Parser, Schema, Secret, Values};
pub use request::{FormBodyError, FormRequest};
pub use values::FormValues;

use extractors_core::{extract, ExtractionSource};
use tracing::debug;
use values::Strict;

/// Parses `schema` from already collected form values.
///
/// Keys that were never submitted are treated as absent.
pub fn parse(values: &FormValues, schema: &Schema) -> Result<Values, ExtractError> {
    extract(values, schema)
}

/// Parses `schema` from form values, failing on any schema key that was
/// never submitted, whether or not its parser is required.
pub fn parse_strict(values: &FormValues, schema: &Schema) -> Result<Values, ExtractError> {
    extract(&Strict(values), schema)
}

/// Collects the form values of `request` with the default [`FormConfig`] and
/// parses `schema` from them.
pub fn parse_form<R>(request: &R, schema: &Schema) -> Result<Values, ExtractError>
where
    R: FormRequest + ?Sized,
{
    parse_form_with(request, schema, &FormConfig::default())
}

/// Collects the form values of `request` under `config` and parses `schema`
/// from them.
///
/// A request whose values cannot be read fails with
/// [`ErrorKind::SourceUnavailable`](extractors_core::ErrorKind::SourceUnavailable).
pub fn parse_form_with<R>(
    request: &R,
    schema: &Schema,
    config: &FormConfig,
) -> Result<Values, ExtractError>
where
    R: FormRequest + ?Sized,
{
    let values = request.form_values(config).map_err(|err| {
        debug!(error = %err, "form values unavailable");
        ExtractError::unavailable(ExtractionSource::Form, err)
    })?;

    if config.strict {
        parse_strict(&values, schema)
    } else {
        parse(&values, schema)
    }
}

/// Decodes a form value as text. If `required`, a missing value is an error.
pub fn string(required: bool) -> Parser {
    Parser::string(required)
}

/// Decodes a form value as text, using `alt` if it is missing.
pub fn string_or(alt: impl Into<String>) -> Parser {
    Parser::string_or(alt)
}

/// Decodes a form value as a [`Secret`]. If `required`, a missing value is an
/// error.
pub fn secret(required: bool) -> Parser {
    Parser::secret(required)
}

/// Decodes a form value as an `i64`. If `required`, a missing value is an
/// error.
pub fn int(required: bool) -> Parser {
    Parser::int(required)
}

/// Decodes a form value as an `i64`, using `alt` if it is missing.
pub fn int_or(alt: i64) -> Parser {
    Parser::int_or(alt)
}

/// Decodes a form value as an `f64`. If `required`, a missing value is an
/// error.
pub fn float(required: bool) -> Parser {
    Parser::float(required)
}

/// Decodes a form value as an `f64`, using `alt` if it is missing.
pub fn float_or(alt: f64) -> Parser {
    Parser::float_or(alt)
}

/// Decodes a form value as a `bool`. If `required`, a missing value is an
/// error.
pub fn bool(required: bool) -> Parser {
    Parser::bool(required)
}

/// Decodes a form value as a `bool`, using `alt` if it is missing.
pub fn bool_or(alt: bool) -> Parser {
    Parser::bool_or(alt)
}
