//! Form parsing configuration.

use serde::Deserialize;

/// Default maximum body size for form parsing (10 MB).
pub const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for reading form values from a request.
///
/// Can be embedded in a larger configuration file:
///
/// ```rust
/// use extractors_form::FormConfig;
///
/// let config: FormConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
/// assert!(config.strict);
/// assert_eq!(config.max_body_size, extractors_form::DEFAULT_MAX_BODY_SIZE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Largest URL-encoded body that will be decoded, in bytes.
    pub max_body_size: usize,
    /// Reject schema keys that were not submitted at all, even optional ones.
    pub strict: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            strict: false,
        }
    }
}

impl FormConfig {
    /// Create a new form configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum body size.
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.max_body_size = size;
        self
    }

    /// Enable or disable strict key checking.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
