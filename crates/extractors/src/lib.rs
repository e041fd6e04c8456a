//! # Extractors
//!
//! **Schema-driven extraction of typed values from weakly-typed sources**
//!
//! Declare which keys you need and how each one decodes, then run a single
//! pass over one of three sources:
//!
//! - **Environment** – process variables, `KEY=VALUE` files, dotenv documents
//!   or in-memory maps ([`env`])
//! - **Forms** – URL-encoded bodies and query strings of HTTP requests ([`form`])
//! - **URL paths** – route parameters captured by a router ([`path`])
//!
//! Every source shares the same schema, decoders and error type from
//! [`core`]. The walk stops at the first failing key, visiting keys in
//! lexicographic order.
//!
//! ## Quick Start
//!
//! ```rust
//! use extractors::prelude::*;
//! use std::collections::HashMap;
//!
//! let vars = HashMap::from([
//!     ("LISTEN_PORT".to_string(), "8080".to_string()),
//!     ("API_TOKEN".to_string(), "s3cr3t".to_string()),
//! ]);
//!
//! let mut values = env::parse_map(
//!     &vars,
//!     &Schema::new()
//!         .field("LISTEN_PORT", env::int(true))
//!         .field("LOG_JSON", env::bool_or(false))
//!         .field("API_TOKEN", env::secret(true)),
//! )
//! .unwrap();
//!
//! assert_eq!(values.int("LISTEN_PORT"), Some(8080));
//! assert_eq!(values.bool("LOG_JSON"), Some(false));
//!
//! let token: Secret = values.take_secret("API_TOKEN").unwrap();
//! assert_eq!(format!("{token:?}"), "[REDACTED]");
//! ```

#![doc(html_root_url = "https://docs.rs/extractors/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export the shared schema, decoders and errors
pub use extractors_core as core;

// Re-export environment parsing
pub use extractors_env as env;

// Re-export form parsing
pub use extractors_form as form;

// Re-export path parsing
pub use extractors_path as path;

/// Prelude module for convenient imports.
///
/// Brings the source modules into scope under their short names together
/// with the shared types.
///
/// # Example
///
/// ```rust
/// use extractors::prelude::*;
///
/// let schema = Schema::new().field("id", path::uint64());
/// assert_eq!(schema.len(), 1);
/// ```
pub mod prelude {
    pub use crate::{env, form, path};

    pub use extractors_core::{
        ErrorKind, ExtractError, ExtractionSource, Key, Parser, Schema, Secret, Value, Values,
    };

    pub use extractors_env::Environment;

    pub use extractors_form::{FormConfig, FormRequest, FormValues};

    pub use extractors_path::PathParams;
}
