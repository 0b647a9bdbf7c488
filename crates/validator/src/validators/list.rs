//! Collection validator
//!
//! Checks that a value is a collection and that its element count satisfies
//! the `elementcount` / `minelements` / `maxelements` options.

use crate::foundation::{
    ConfigurationError, Options, ValidationError, ValidationResult, Value, ValueValidator,
};
use crate::validators::bounds::{BoundKeys, Bounds};

/// Validates collections by element count.
///
/// | option         | shape                          |
/// |----------------|--------------------------------|
/// | `elementcount` | `[low, high]`                  |
/// | `minelements`  | non-negative integer, or unset |
/// | `maxelements`  | non-negative integer, or unset |
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_validators::prelude::*;
///
/// let validator = ListValidator::with_options(
///     Options::new().with("elementcount", json!([2, 0])),
/// );
///
/// let result = validator.validate(&json!([1]).into()).unwrap();
/// assert_eq!(
///     result.errors(),
///     &[ValidationError::upper_bound(), ValidationError::lower_bound()],
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListValidator {
    options: Options,
}

impl ListValidator {
    /// Creates a validator without bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl ValueValidator for ListValidator {
    fn name(&self) -> &'static str {
        "list"
    }

    fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn validate(&self, value: &Value) -> Result<ValidationResult, ConfigurationError> {
        let Some(count) = value.element_count() else {
            tracing::debug!(validator = self.name(), kind = value.kind(), "not an array");
            return Ok(ValidationResult::failure(vec![ValidationError::new(
                "Not an array",
            )]));
        };

        let bounds = Bounds::resolve(&self.options, &BoundKeys::ELEMENT_COUNT).inspect_err(
            |error| tracing::warn!(validator = self.name(), %error, "invalid options"),
        )?;

        let result = ValidationResult::from(bounds.check_len(count));
        tracing::debug!(
            validator = self.name(),
            count,
            errors = result.len(),
            "validated collection"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_accept_any_array() {
        let validator = ListValidator::new();
        assert!(validator.validate(&json!([]).into()).unwrap().is_valid());
        assert!(validator.validate(&json!([1, 2, 3]).into()).unwrap().is_valid());
    }

    #[test]
    fn test_object_counts_entries() {
        let validator = ListValidator::with_options(Options::new().with("maxelements", 1));
        let result = validator
            .validate(&json!({ "a": 1, "b": 2 }).into())
            .unwrap();
        assert_eq!(result.errors(), &[ValidationError::upper_bound()]);
    }

    #[test]
    fn test_non_array_ignores_malformed_options() {
        let validator =
            ListValidator::with_options(Options::new().with("elementcount", json!([0])));
        let result = validator.validate(&json!("abc").into()).unwrap();
        assert_eq!(result.errors(), &[ValidationError::new("Not an array")]);
    }

    #[test]
    fn test_set_options_replaces() {
        let mut validator = ListValidator::with_options(Options::new().with("minelements", 1));
        validator.set_options(Options::new());
        assert!(validator.options().is_empty());
        assert!(validator.validate(&json!([]).into()).unwrap().is_valid());
    }
}
