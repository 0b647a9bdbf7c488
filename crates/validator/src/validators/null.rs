//! No-op validator.

use crate::foundation::{ConfigurationError, Options, ValidationResult, Value, ValueValidator};

/// Accepts every value. Options are stored but never read.
#[derive(Debug, Clone, Default)]
pub struct NullValidator {
    options: Options,
}

impl NullValidator {
    /// Creates the validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValueValidator for NullValidator {
    fn name(&self) -> &'static str {
        "null"
    }

    fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn validate(&self, _value: &Value) -> Result<ValidationResult, ConfigurationError> {
        Ok(ValidationResult::success())
    }
}
