//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`ValueValidator`]
//! - **Errors**: [`ValidationError`], [`ValidationResult`], [`ConfigurationError`]
//! - **Inputs**: [`Value`], [`Title`], [`Options`]
//!
//! # Two failure channels
//!
//! A value that breaks a constraint is reported inside a
//! [`ValidationResult`]; the caller inspects
//! [`is_valid`](ValidationResult::is_valid) or
//! [`errors`](ValidationResult::errors). A validator configured with options
//! it cannot interpret returns a [`ConfigurationError`] instead. The two are
//! never mixed: a configuration error means no result was produced at all.
//!
//! ```
//! use serde_json::json;
//! use value_validators::prelude::*;
//!
//! let mut validator = StringValidator::new();
//! validator.set_options(Options::new().with("length", json!([1, 2])));
//! assert!(validator.validate(&"".into()).unwrap().errors().len() == 1);
//!
//! validator.set_options(Options::new().with("length", json!([1, 2, 3])));
//! assert!(validator.validate(&"".into()).is_err());
//! ```

// Module declarations
pub mod configuration;
pub mod error;
pub mod options;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use configuration::ConfigurationError;
pub use error::{ValidationError, ValidationResult};
pub use options::Options;
pub use traits::ValueValidator;
pub use value::{Title, Value};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with several validators and merges their results.
///
/// Errors keep the order of `validators`, and within each validator its own
/// check order. The first configuration error aborts the whole call.
///
/// # Examples
///
/// ```
/// use value_validators::foundation::validate_with_all;
/// use value_validators::prelude::*;
///
/// let short = StringValidator::with_options(Options::new().with("maxlength", 3));
/// let digits = StringValidator::with_options(Options::new().with("regex", "/^[0-9]+$/"));
///
/// let result = validate_with_all(&"abcd".into(), &[&short, &digits]).unwrap();
/// assert_eq!(result.len(), 2);
/// ```
pub fn validate_with_all(
    value: &Value,
    validators: &[&dyn ValueValidator],
) -> Result<ValidationResult, ConfigurationError> {
    let mut merged = ValidationResult::success();

    for validator in validators {
        merged = ValidationResult::merge(merged, validator.validate(value)?);
    }

    Ok(merged)
}

// ============================================================================
// TESTS
// ============================================================================
