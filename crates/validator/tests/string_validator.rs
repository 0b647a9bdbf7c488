//! Integration tests for the string validator.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};
use value_validators::prelude::*;

#[rstest]
#[case(json!(null), Options::new(), Some(ValidationError::new("Not a string")))]
#[case(json!(""), Options::new(), None)]
#[case(json!(""), Options::new().with("length", 1), Some(ValidationError::lower_bound()))]
#[case(json!("1"), Options::new().with("length", 1), None)]
#[case(json!("1"), Options::new().with("length", 0), Some(ValidationError::upper_bound()))]
#[case(json!(""), Options::new().with("length", 0), None)]
#[case(json!(""), Options::new().with("minlength", 1), Some(ValidationError::lower_bound()))]
#[case(json!("1"), Options::new().with("minlength", 1), None)]
#[case(json!("1"), Options::new().with("maxlength", 0), Some(ValidationError::upper_bound()))]
#[case(json!(""), Options::new().with("maxlength", 0), None)]
#[case(
    json!("1"),
    Options::new().with("regex", "/^$/"),
    Some(ValidationError::new("String does not match the regular expression /^$/"))
)]
#[case(json!(""), Options::new().with("regex", "/^$/"), None)]
fn validate(
    #[case] value: JsonValue,
    #[case] options: Options,
    #[case] expected: Option<ValidationError>,
) {
    let mut validator = StringValidator::new();
    validator.set_options(options);

    let result = validator.validate(&value.into()).unwrap();
    let expected: Vec<_> = expected.into_iter().collect();
    assert_eq!(result.errors(), expected.as_slice());
}

#[rstest]
#[case(json!(0))]
#[case(json!(false))]
#[case(json!(["a"]))]
#[case(json!({ "text": "a" }))]
fn not_a_string_regardless_of_options(#[case] value: JsonValue) {
    let validator = StringValidator::with_options(
        Options::new().with("length", json!([1, 2, 3])).with("regex", "/(/"),
    );
    let result = validator.validate(&value.into()).unwrap();
    assert_eq!(result.errors(), &[ValidationError::new("Not a string")]);
}

#[test]
fn title_is_not_a_string() {
    let validator = StringValidator::new();
    let result = validator.validate(&Title::new("Page").into()).unwrap();
    assert_eq!(result.errors(), &[ValidationError::new("Not a string")]);
}

#[test]
fn length_range_pair() {
    let validator = StringValidator::with_options(Options::new().with("length", json!([2, 4])));
    assert_eq!(
        validator.validate(&"a".into()).unwrap().errors(),
        &[ValidationError::lower_bound()]
    );
    assert!(validator.validate(&"abcd".into()).unwrap().is_valid());
    assert_eq!(
        validator.validate(&"abcde".into()).unwrap().errors(),
        &[ValidationError::upper_bound()]
    );
}

#[test]
fn side_option_overrides_length() {
    let validator = StringValidator::with_options(
        Options::new().with("length", 1).with("maxlength", false),
    );
    assert!(validator.validate(&"long text".into()).unwrap().is_valid());
}

#[test]
fn bound_errors_precede_pattern_error() {
    let validator = StringValidator::with_options(
        Options::new()
            .with("length", json!([3, 1]))
            .with("regex", "/^[a-z]$/"),
    );
    let result = validator.validate(&"AB".into()).unwrap();
    assert_eq!(
        result.errors(),
        &[
            ValidationError::upper_bound(),
            ValidationError::lower_bound(),
            ValidationError::pattern_mismatch("/^[a-z]$/"),
        ]
    );
}

#[test]
fn pattern_message_keeps_configured_text() {
    let validator = StringValidator::with_options(Options::new().with("regex", "~^x~i"));
    assert!(validator.validate(&"X-ray".into()).unwrap().is_valid());

    let result = validator.validate(&"ray".into()).unwrap();
    assert_eq!(
        result.errors()[0].message(),
        "String does not match the regular expression ~^x~i"
    );
    assert_eq!(result.errors()[0].code(), None);
}

#[test]
fn invalid_pattern_is_configuration_error() {
    let validator = StringValidator::with_options(Options::new().with("regex", "/(/"));
    let err = validator.validate(&"x".into()).unwrap_err();
    assert_eq!(err.option(), "regex");
    assert!(err.to_string().contains("/(/"));
}
