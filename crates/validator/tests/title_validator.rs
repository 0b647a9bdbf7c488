//! Integration tests for the title validator.

use std::sync::Arc;

use mockall::{mock, predicate};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use value_validators::prelude::*;

mock! {
    pub Checker {}

    impl ExistenceChecker for Checker {
        fn exists(&self, title: &Title) -> bool;
    }
}

fn missing_titles() -> MockChecker {
    let mut checker = MockChecker::new();
    checker.expect_exists().return_const(false);
    checker
}

#[rstest]
#[case(Value::from(json!(null)), false, Some(ValidationError::new("Not a title")))]
#[case(Value::from(Title::new("Missing")), false, None)]
#[case(Value::from(Title::new("Missing")), true, Some(ValidationError::new("Title does not exist")))]
fn validate(
    #[case] value: Value,
    #[case] has_to_exist: bool,
    #[case] expected: Option<ValidationError>,
) {
    let mut validator = TitleValidator::new(missing_titles());
    validator.set_options(Options::new().with("hastoexist", has_to_exist));

    let result = validator.validate(&value).unwrap();
    let expected: Vec<_> = expected.into_iter().collect();
    assert_eq!(result.errors(), expected.as_slice());
}

#[test]
fn checker_called_once_with_the_title() {
    let mut checker = MockChecker::new();
    checker
        .expect_exists()
        .with(predicate::eq(Title::in_namespace(4, "Policy")))
        .times(1)
        .return_const(true);

    let validator =
        TitleValidator::new(checker).options_from(Options::new().with("hastoexist", true));
    let result = validator
        .validate(&Title::in_namespace(4, "Policy").into())
        .unwrap();
    assert!(result.is_valid());
}

#[test]
fn checker_not_called_when_existence_not_required() {
    let mut checker = MockChecker::new();
    checker.expect_exists().never();

    let validator = TitleValidator::new(checker);
    assert!(validator.validate(&Title::new("Anything").into()).unwrap().is_valid());
}

#[test]
fn checker_not_called_for_non_titles() {
    let mut checker = MockChecker::new();
    checker.expect_exists().never();

    let validator =
        TitleValidator::new(checker).options_from(Options::new().with("hastoexist", true));
    let result = validator.validate(&json!("Page").into()).unwrap();
    assert_eq!(result.errors(), &[ValidationError::new("Not a title")]);
}

#[test]
fn shared_known_titles() {
    let titles: Arc<dyn ExistenceChecker> =
        Arc::new([Title::new("Main Page")].into_iter().collect::<KnownTitles>());

    let strict = TitleValidator::with_checker(Arc::clone(&titles))
        .options_from(Options::new().with("hastoexist", true));
    let lenient = TitleValidator::with_checker(titles);

    let missing = Value::from(Title::new("Sandbox"));
    assert_eq!(
        strict.validate(&missing).unwrap().errors(),
        &[ValidationError::new("Title does not exist")]
    );
    assert!(lenient.validate(&missing).unwrap().is_valid());
    assert!(
        strict
            .validate(&Title::new("Main Page").into())
            .unwrap()
            .is_valid()
    );
}

#[test]
fn repeated_validation_is_stable() {
    let validator = TitleValidator::new(missing_titles())
        .options_from(Options::new().with("hastoexist", true));
    let value = Value::from(Title::new("Missing"));

    assert_eq!(
        validator.validate(&value).unwrap(),
        validator.validate(&value).unwrap()
    );
}
