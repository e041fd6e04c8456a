//! # Extractors Core
//!
//! Schema-driven decoding of typed values from string-keyed sources.
//!
//! A [`Schema`] maps each [`Key`] to a [`Parser`]. The [`extract`] walker
//! asks a [`Source`] for every key's raw value, decodes it, and returns the
//! results as [`Values`]. The first failure stops the walk and comes back as
//! an [`ExtractError`] naming the key.
//!
//! | Parser | Decodes to | Absent value |
//! |--------|------------|--------------|
//! | [`Parser::string`] | `String` | error if required, else skipped |
//! | [`Parser::int`] | `i64` | error if required, else skipped |
//! | [`Parser::float`] | `f64` | error if required, else skipped |
//! | [`Parser::bool`] | `bool` | error if required, else skipped |
//! | [`Parser::uint64`] | `u64` | error if required, else skipped |
//! | [`Parser::secret`] | [`Secret`] | error if required, else skipped |
//! | `Parser::*_or(alt)` | as above | `alt` |
//!
//! Concrete sources live in the `extractors-env`, `extractors-form` and
//! `extractors-path` crates.

#![doc(html_root_url = "https://docs.rs/extractors-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod extract;
mod parser;
mod schema;
mod secret;
mod values;

pub use error::{DecodeError, ErrorKind, ExtractError, ExtractionSource};
pub use extract::{extract, Source};
pub use parser::{Decoded, Kind, Parser, Raw, Value};
pub use schema::{Key, Schema};
pub use secret::Secret;
pub use values::Values;
