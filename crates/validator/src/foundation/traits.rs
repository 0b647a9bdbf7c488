//! Core traits for the validation system
//!
//! This module defines the contract every validator implements.

use crate::foundation::{ConfigurationError, Options, ValidationResult, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The contract all validators implement.
///
/// A validator is configured once with [`set_options`](Self::set_options)
/// and then validates values. Validation never fails fast on the value: every
/// failed constraint becomes an entry of the returned [`ValidationResult`].
/// Only malformed options abort the call, as a [`ConfigurationError`].
///
/// The trait is object safe, so heterogeneous validators can be kept as
/// `Box<dyn ValueValidator>`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_validators::prelude::*;
///
/// let mut validator = ListValidator::new();
/// validator.set_options(Options::new().with("maxelements", 1));
///
/// let result = validator.validate(&json!([1, 2]).into()).unwrap();
/// assert_eq!(result.errors(), &[ValidationError::upper_bound()]);
/// ```
pub trait ValueValidator {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Replaces the options consulted by [`validate`](Self::validate).
    fn set_options(&mut self, options: Options);

    /// The options currently in effect.
    fn options(&self) -> &Options;

    /// Validates a value against the configured options.
    ///
    /// # Returns
    ///
    /// * `Ok(result)` with zero or more errors in check order
    /// * `Err(ConfigurationError)` if an option is malformed
    fn validate(&self, value: &Value) -> Result<ValidationResult, ConfigurationError>;
}

impl<V: ValueValidator + ?Sized> ValueValidator for Box<V> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn set_options(&mut self, options: Options) {
        (**self).set_options(options);
    }

    fn options(&self) -> &Options {
        (**self).options()
    }

    fn validate(&self, value: &Value) -> Result<ValidationResult, ConfigurationError> {
        (**self).validate(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
