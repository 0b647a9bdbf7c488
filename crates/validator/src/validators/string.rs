//! String validator
//!
//! Checks that a value is text, that its length satisfies the `length` /
//! `minlength` / `maxlength` options, and that it matches the `regex`
//! option. Length is counted in Unicode scalar values.

use serde_json::Value as JsonValue;

use crate::foundation::{
    ConfigurationError, Options, ValidationError, ValidationResult, Value, ValueValidator,
};
use crate::validators::bounds::{BoundKeys, Bounds};
use crate::validators::pattern::Pattern;

const REGEX_OPTION: &str = "regex";

/// Validates strings by length and pattern.
///
/// | option      | shape                                     |
/// |-------------|-------------------------------------------|
/// | `length`    | `[low, high]`, or `n` meaning `[n, n]`    |
/// | `minlength` | non-negative integer, or unset            |
/// | `maxlength` | non-negative integer, or unset            |
/// | `regex`     | pattern string (delimited or bare), unset |
///
/// Bound errors come first, then the pattern error; all of them are
/// reported when several checks fail.
///
/// # Examples
///
/// ```
/// use value_validators::prelude::*;
///
/// let validator = StringValidator::with_options(Options::new().with("regex", "/^$/"));
/// let result = validator.validate(&"1".into()).unwrap();
/// assert_eq!(
///     result.errors()[0].message(),
///     "String does not match the regular expression /^$/",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    options: Options,
}

impl StringValidator {
    /// Creates a validator without constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    fn pattern(&self) -> Result<Option<Pattern>, ConfigurationError> {
        match self.options.get(REGEX_OPTION) {
            None | Some(JsonValue::Null | JsonValue::Bool(false)) => Ok(None),
            Some(JsonValue::String(text)) => {
                let pattern =
                    Pattern::parse(text).map_err(|source| ConfigurationError::InvalidPattern {
                        option: REGEX_OPTION,
                        pattern: text.clone(),
                        source,
                    })?;
                Ok(Some(pattern))
            }
            Some(found) => Err(ConfigurationError::InvalidType {
                option: REGEX_OPTION,
                expected: "a pattern string",
                found: found.clone(),
            }),
        }
    }

    fn check(&self, text: &str) -> Result<ValidationResult, ConfigurationError> {
        let bounds = Bounds::resolve(&self.options, &BoundKeys::LENGTH)?;
        let pattern = self.pattern()?;

        let mut errors = bounds.check_len(text.chars().count());
        if let Some(pattern) = pattern
            && !pattern.is_match(text)
        {
            errors.push(ValidationError::pattern_mismatch(pattern.as_str()));
        }

        Ok(ValidationResult::from(errors))
    }
}

impl ValueValidator for StringValidator {
    fn name(&self) -> &'static str {
        "string"
    }

    fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn validate(&self, value: &Value) -> Result<ValidationResult, ConfigurationError> {
        let Some(text) = value.as_str() else {
            tracing::debug!(validator = self.name(), kind = value.kind(), "not a string");
            return Ok(ValidationResult::failure(vec![ValidationError::new(
                "Not a string",
            )]));
        };

        let result = self
            .check(text)
            .inspect_err(|error| tracing::warn!(validator = self.name(), %error, "invalid options"))?;

        tracing::debug!(
            validator = self.name(),
            errors = result.len(),
            "validated string"
        );
        Ok(result)
    }
}
