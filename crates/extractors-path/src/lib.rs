//! # Extractors Path
//!
//! Schema-driven parsing of URL path parameters.
//!
//! A router captures path variables and stores them as [`PathParams`] in the
//! request extensions. A schema key the route never captured is a wiring
//! mistake, so it fails with `FieldNotPresent` whatever the parser's policy.
//! An empty segment counts as a missing value.
//!
//! ## Example
//!
//! ```rust
//! use extractors_path::{self as path, PathParams};
//! use http::Request;
//!
//! let mut request = Request::get("/users/42/posts/7").body(()).unwrap();
//! request
//!     .extensions_mut()
//!     .insert([("user", "42"), ("post", "7")].into_iter().collect::<PathParams>());
//!
//! let values = path::parse(
//!     &request,
//!     &path::Schema::new()
//!         .field("user", path::string())
//!         .field("post", path::uint64()),
//! )
//! .unwrap();
//!
//! assert_eq!(values.string("user"), Some("42"));
//! assert_eq!(values.uint64("post"), Some(7));
//! ```

#![doc(html_root_url = "https://docs.rs/extractors-path/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod params;

pub use extractors_core::{ExtractError, Key, Parser, Schema, Values};
pub use params::PathParams;

use extractors_core::extract;
use http::Request;
use params::RouteMap;
use std::collections::HashMap;
use tracing::debug;

/// Parses `schema` from the [`PathParams`] stored in the request extensions.
///
/// A request without path parameters behaves like an empty route, so every
/// schema key fails as not present.
pub fn parse<B>(request: &Request<B>, schema: &Schema) -> Result<Values, ExtractError> {
    match request.extensions().get::<PathParams>() {
        Some(params) => parse_params(params, schema),
        None => {
            debug!(path = %request.uri().path(), "request carries no path parameters");
            parse_params(&PathParams::new(), schema)
        }
    }
}

/// Parses `schema` from a plain map of route variables.
pub fn parse_values(
    values: &HashMap<String, String>,
    schema: &Schema,
) -> Result<Values, ExtractError> {
    extract(&RouteMap(values), schema)
}

/// Parses `schema` from captured route parameters.
pub fn parse_params(params: &PathParams, schema: &Schema) -> Result<Values, ExtractError> {
    extract(params, schema)
}

/// Decodes a path segment as text. The segment must be non-empty.
pub fn string() -> Parser {
    Parser::string(true)
}

/// Decodes a path segment as an `i64`. The segment must be non-empty.
pub fn int() -> Parser {
    Parser::int(true)
}

/// Decodes a path segment as a `u64`. The segment must be non-empty.
pub fn uint64() -> Parser {
    Parser::uint64(true)
}
