//! Redacting container for sensitive decoded text.

use std::fmt;

/// A decoded value that must not end up in logs or error output.
///
/// `Secret` is produced by secret parsers for passwords, API keys and
/// tokens. Its `Debug` and `Display` output is always `[REDACTED]`, and the
/// text can only be reached through [`expose_secret`](Self::expose_secret).
///
/// # Examples
///
/// ```
/// use extractors_core::Secret;
///
/// let password = Secret::new("hunter2");
///
/// assert_eq!(format!("{password:?}"), "[REDACTED]");
/// assert_eq!(password.to_string(), "[REDACTED]");
/// assert_eq!(password.expose_secret(), "hunter2");
/// ```
// Do not derive Clone, Default, or serde traits; each would let the text be
// duplicated or written out without going through expose_secret.
pub struct Secret {
    inner: String,
}

impl Secret {
    /// Wraps sensitive text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Explicitly exposes the secret text.
    ///
    /// Make sure the returned text is not logged or displayed.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Returns true if the secret text is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
