//! # Extractors Env
//!
//! Schema-driven parsing of environment variables.
//!
//! Declare which variables you need and how to decode them, then parse them
//! from the process environment, a `KEY=VALUE` file, a dotenv document, or an
//! in-memory map. An unset variable and a variable set to the empty string
//! are treated the same.
//!
//! ## Example
//!
//! ```rust
//! use extractors_env as env;
//! use std::collections::HashMap;
//!
//! let vars = HashMap::from([
//!     ("HOST".to_string(), "db.internal".to_string()),
//!     ("PASSWORD".to_string(), "hunter2".to_string()),
//! ]);
//!
//! let mut values = env::parse_map(
//!     &vars,
//!     &env::Schema::new()
//!         .field("HOST", env::string(true))
//!         .field("PORT", env::int_or(5432))
//!         .field("VERBOSE", env::bool(false))
//!         .field("PASSWORD", env::secret(true)),
//! )
//! .unwrap();
//!
//! assert_eq!(values.string("HOST"), Some("db.internal"));
//! assert_eq!(values.int("PORT"), Some(5432));
//! assert_eq!(values.bool("VERBOSE"), None);
//! assert_eq!(values.take_secret("PASSWORD").unwrap().expose_secret(), "hunter2");
//! ```

#![doc(html_root_url = "https://docs.rs/extractors-env/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod environment;

pub use environment::Environment;
pub use extractors_core::{ExtractError, Key, Parser, Schema, Secret, Values};

use extractors_core::{extract, ExtractionSource};
use std::collections::HashMap;
use std::path::Path;

/// Parses `schema` from the process environment.
pub fn parse_os(schema: &Schema) -> Result<Values, ExtractError> {
    parse(&Environment::Os, schema)
}

/// Parses `schema` from a `KEY=VALUE` file.
///
/// The file is scanned once per schema field. A missing file behaves like an
/// empty environment, so only required fields fail.
pub fn parse_file(path: impl AsRef<Path>, schema: &Schema) -> Result<Values, ExtractError> {
    parse(&Environment::file(path.as_ref()), schema)
}

/// Parses `schema` from a copy of `vars`.
pub fn parse_map(vars: &HashMap<String, String>, schema: &Schema) -> Result<Values, ExtractError> {
    parse(&Environment::map(vars), schema)
}

/// Parses `schema` from a dotenv document without modifying the process
/// environment.
pub fn parse_dotenv(path: impl AsRef<Path>, schema: &Schema) -> Result<Values, ExtractError> {
    let environment = Environment::from_dotenv(path)
        .map_err(|err| ExtractError::unavailable(ExtractionSource::Env, err))?;
    parse(&environment, schema)
}

/// Parses `schema` from `environment`.
pub fn parse(environment: &Environment, schema: &Schema) -> Result<Values, ExtractError> {
    extract(environment, schema)
}

/// Decodes a variable as text. If `required`, an unset or empty variable is
/// an error.
pub fn string(required: bool) -> Parser {
    Parser::string(required)
}

/// Decodes a variable as text, using `alt` if it is unset or empty.
pub fn string_or(alt: impl Into<String>) -> Parser {
    Parser::string_or(alt)
}

/// Decodes a variable as a [`Secret`]. If `required`, an unset or empty
/// variable is an error.
pub fn secret(required: bool) -> Parser {
    Parser::secret(required)
}

/// Decodes a variable as an `i64`. If `required`, an unset or empty variable
/// is an error.
pub fn int(required: bool) -> Parser {
    Parser::int(required)
}

/// Decodes a variable as an `i64`, using `alt` if it is unset or empty.
pub fn int_or(alt: i64) -> Parser {
    Parser::int_or(alt)
}

/// Decodes a variable as an `f64`. If `required`, an unset or empty variable
/// is an error.
pub fn float(required: bool) -> Parser {
    Parser::float(required)
}

/// Decodes a variable as an `f64`, using `alt` if it is unset or empty.
pub fn float_or(alt: f64) -> Parser {
    Parser::float_or(alt)
}

/// Decodes a variable as a `bool`. If `required`, an unset or empty variable
/// is an error.
pub fn bool(required: bool) -> Parser {
    Parser::bool(required)
}

/// Decodes a variable as a `bool`, using `alt` if it is unset or empty.
pub fn bool_or(alt: bool) -> Parser {
    Parser::bool_or(alt)
}
