//! Parsing schemas against form values and HTTP requests.

use bytes::Bytes;
use extractors_core::ErrorKind;
use extractors_form::{self as form, FormConfig, FormValues, Schema};
use http::{Request, StatusCode};

const URLENCODED: &str = "application/x-www-form-urlencoded";

fn single(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().copied().collect()
}

#[test]
fn test_parse_single_values() {
    let values = form::parse(
        &single(&[
            ("foo", "foo"),
            ("bar", "12"),
            ("baz", "3.5"),
            ("b1", "true"),
            ("b2", "F"),
            ("password", "hunter2"),
        ]),
        &Schema::new()
            .field("foo", form::string(true))
            .field("bar", form::int(true))
            .field("baz", form::float(true))
            .field("b1", form::bool(true))
            .field("b2", form::bool(true))
            .field("password", form::secret(true)),
    )
    .unwrap();

    assert_eq!(values.string("foo"), Some("foo"));
    assert_eq!(values.int("bar"), Some(12));
    assert_eq!(values.float("baz"), Some(3.5));
    assert_eq!(values.bool("b1"), Some(true));
    assert_eq!(values.bool("b2"), Some(false));
    assert_eq!(values.secret("password").map(|s| s.expose_secret()), Some("hunter2"));
}

#[test]
fn test_parse_or() {
    let values = form::parse(
        &single(&[("i1", "42"), ("f1", "1.1"), ("b1", "true")]),
        &Schema::new()
            .field("s1", form::string_or("baz"))
            .field("i1", form::int_or(77))
            .field("i2", form::int_or(77))
            .field("f1", form::float_or(50.5))
            .field("f2", form::float_or(50.5))
            .field("b1", form::bool_or(false))
            .field("b2", form::bool_or(true)),
    )
    .unwrap();

    assert_eq!(values.string("s1"), Some("baz"));
    assert_eq!(values.int("i1"), Some(42));
    assert_eq!(values.int("i2"), Some(77));
    assert_eq!(values.float("f1"), Some(1.1));
    assert_eq!(values.float("f2"), Some(50.5));
    assert_eq!(values.bool("b1"), Some(true));
    assert_eq!(values.bool("b2"), Some(true));
    assert!(values.is_default("s1"));
    assert!(!values.is_default("i1"));
}

#[test]
fn test_empty_value_is_present() {
    let values = form::parse(
        &single(&[("comment", "")]),
        &Schema::new().field("comment", form::string(true)),
    )
    .unwrap();
    assert_eq!(values.string("comment"), Some(""));

    let err = form::parse(
        &single(&[("age", "")]),
        &Schema::new().field("age", form::int_or(18)),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedValue);
}

#[test]
fn test_parse_html_form_request() {
    let request = Request::post("/profile?tab=settings")
        .header("content-type", URLENCODED)
        .body(Bytes::from_static(b"name=Ada+Lovelace&born=1815&admin=on"))
        .unwrap();

    let err = form::parse_form(
        &request,
        &Schema::new()
            .field("name", form::string(true))
            .field("born", form::int(true))
            .field("admin", form::bool(false)),
    )
    .unwrap_err();
    // "on" is what browsers send for checked boxes, but it is not a bool literal.
    assert_eq!(err.kind(), ErrorKind::MalformedValue);

    let values = form::parse_form(
        &request,
        &Schema::new()
            .field("name", form::string(true))
            .field("born", form::int(true))
            .field("tab", form::string(true)),
    )
    .unwrap();
    assert_eq!(values.string("name"), Some("Ada Lovelace"));
    assert_eq!(values.int("born"), Some(1815));
    assert_eq!(values.string("tab"), Some("settings"));
}

#[test]
fn test_request_without_body_is_unavailable() {
    let request = Request::post("/").body(()).unwrap();
    let err = form::parse_form(&request, &Schema::new().field("a", form::string(false))).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert!(err.to_string().contains("missing form body"), "{err}");
}

#[test]
fn test_strict_key_missing() {
    let values = single(&[("present", "1")]);
    let schema = Schema::new()
        .field("present", form::int(true))
        .field("absent", form::string(false));

    let err = form::parse_strict(&values, &schema).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldNotPresent);
    assert_eq!(err.to_string(), "form element not present: {absent}");

    let lenient = form::parse(&values, &schema).unwrap();
    assert_eq!(lenient.int("present"), Some(1));
    assert!(!lenient.contains("absent"));
}

#[test]
fn test_strict_config_applies_to_requests() {
    let request = Request::get("/?present=1").body(()).unwrap();
    let schema = Schema::new()
        .field("present", form::int(true))
        .field("absent", form::int_or(5));

    let values = form::parse_form(&request, &schema).unwrap();
    assert_eq!(values.int("absent"), Some(5));

    let err = form::parse_form_with(&request, &schema, &FormConfig::new().with_strict(true))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FieldNotPresent);
}

#[test]
fn test_value_missing() {
    let mut values = FormValues::new();
    values.set("name", Vec::new());

    for schema in [
        Schema::new().field("name", form::string(true)),
        Schema::new().field("other", form::int(true)),
    ] {
        let err = form::parse(&values, &schema).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert!(err.to_string().ends_with(": missing"), "{err}");
    }
}

#[test]
fn test_malformed_values() {
    let values = single(&[("i", "twelve"), ("f", "1.2.3"), ("b", "yes")]);

    for (key, parser) in [
        ("i", form::int(true)),
        ("f", form::float_or(1.0)),
        ("b", form::bool(false)),
    ] {
        let err = form::parse(&values, &Schema::new().field(key, parser)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedValue, "{key}");
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }
}

#[test]
fn test_multiple_values_rejected() {
    let values = single(&[("tag", "a"), ("tag", "b")]);

    for parser in [form::string(true), form::string(false), form::string_or("x")] {
        let err = form::parse(&values, &Schema::new().field("tag", parser)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MultipleValues);
        assert_eq!(
            err.to_string(),
            "failed to parse {tag}: expected only one value to exist, found 2"
        );
    }
}

#[test]
fn test_body_too_large() {
    let request = Request::post("/")
        .header("content-type", URLENCODED)
        .body(String::from("payload=0123456789"))
        .unwrap();
    let schema = Schema::new().field("payload", form::string(true));

    let err = form::parse_form_with(&request, &schema, &FormConfig::new().with_max_body_size(4))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceUnavailable);

    let values = form::parse_form(&request, &schema).unwrap();
    assert_eq!(values.string("payload"), Some("0123456789"));
}

#[test]
fn test_config_from_json() {
    let config: FormConfig =
        serde_json::from_str(r#"{"max_body_size": 2048, "strict": true}"#).unwrap();
    assert_eq!(config, FormConfig::new().with_max_body_size(2048).with_strict(true));

    let config: FormConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, FormConfig::default());
}
