//! Reading form values out of HTTP requests.

use crate::{FormConfig, FormValues};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method, Request};
use thiserror::Error;

/// Failure to read form values from a request.
#[derive(Error, Debug)]
pub enum FormBodyError {
    /// The method carries a form body but the request has none.
    #[error("missing form body")]
    MissingBody,

    /// The body exceeds the configured limit.
    #[error("form body too large: max {limit} bytes, got {actual} bytes")]
    TooLarge {
        /// Configured maximum in bytes.
        limit: usize,
        /// Actual body size in bytes.
        actual: usize,
    },

    /// The body is not valid UTF-8.
    #[error("form body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The body or query string could not be decoded.
    #[error("malformed form data: {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),
}

/// A request whose form values can be collected.
///
/// For `POST`, `PUT` and `PATCH` requests with an
/// `application/x-www-form-urlencoded` body the body values come first,
/// followed by the query string values. Other requests only contribute their
/// query string.
///
/// # Example
///
/// ```rust
/// use extractors_form::{FormConfig, FormRequest};
/// use http::Request;
///
/// let request = Request::post("/login?next=%2Fhome")
///     .header("content-type", "application/x-www-form-urlencoded")
///     .body(String::from("user=alice"))
///     .unwrap();
///
/// let values = request.form_values(&FormConfig::default()).unwrap();
/// assert_eq!(values.first("user"), Some("alice"));
/// assert_eq!(values.first("next"), Some("/home"));
/// ```
pub trait FormRequest {
    /// Collects the body and query string values of the request.
    fn form_values(&self, config: &FormConfig) -> Result<FormValues, FormBodyError>;
}

impl FormRequest for Request<Bytes> {
    fn form_values(&self, config: &FormConfig) -> Result<FormValues, FormBodyError> {
        collect(self, Some(self.body()), config)
    }
}

impl FormRequest for Request<Vec<u8>> {
    fn form_values(&self, config: &FormConfig) -> Result<FormValues, FormBodyError> {
        collect(self, Some(self.body()), config)
    }
}

impl FormRequest for Request<String> {
    fn form_values(&self, config: &FormConfig) -> Result<FormValues, FormBodyError> {
        collect(self, Some(self.body().as_bytes()), config)
    }
}

impl FormRequest for Request<&'static str> {
    fn form_values(&self, config: &FormConfig) -> Result<FormValues, FormBodyError> {
        collect(self, Some(self.body().as_bytes()), config)
    }
}

impl FormRequest for Request<()> {
    fn form_values(&self, config: &FormConfig) -> Result<FormValues, FormBodyError> {
        collect(self, None, config)
    }
}

fn collect<B>(
    request: &Request<B>,
    body: Option<&[u8]>,
    config: &FormConfig,
) -> Result<FormValues, FormBodyError> {
    let mut values = FormValues::new();

    if carries_form_body(request.method()) {
        let body = body.ok_or(FormBodyError::MissingBody)?;
        if is_urlencoded(request.headers()) {
            if body.len() > config.max_body_size {
                return Err(FormBodyError::TooLarge {
                    limit: config.max_body_size,
                    actual: body.len(),
                });
            }
            values.extend_urlencoded(std::str::from_utf8(body)?)?;
        }
    }

    if let Some(query) = request.uri().query() {
        values.extend_urlencoded(query)?;
    }

    Ok(values)
}

fn carries_form_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .is_some_and(|m| m.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str())
}
