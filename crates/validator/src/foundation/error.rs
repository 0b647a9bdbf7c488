//! Error types for validation failures
//!
//! [`ValidationError`] describes one failed constraint. [`ValidationResult`]
//! is the ordered collection a validator hands back from a single
//! `validate` call; an empty collection means the value is valid.
//!
//! All string fields use `Cow<'static, str>` so the fixed messages emitted by
//! the built-in validators never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// Equality is structural: two errors are equal when both the message and
/// the code match.
///
/// # Examples
///
/// ```
/// use value_validators::foundation::ValidationError;
///
/// let plain = ValidationError::new("Not an array");
/// assert_eq!(plain.code(), None);
///
/// let coded = ValidationError::with_code("Value exceeding upper bound", "length");
/// assert_eq!(coded.code(), Some("length"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional classification tag for programmatic handling.
    ///
    /// Bound violations carry `"length"`; type mismatches carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates an error without a classification code.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Creates an error tagged with a classification code.
    pub fn with_code(
        message: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the classification code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Converts the error to a JSON object for reporting.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "code": self.code,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Code attached to bound violations.
    pub const LENGTH_CODE: &'static str = "length";

    /// The measured count or length is above the upper bound.
    pub fn upper_bound() -> Self {
        Self::with_code("Value exceeding upper bound", Self::LENGTH_CODE)
    }

    /// The measured count or length is below the lower bound.
    pub fn lower_bound() -> Self {
        Self::with_code("Value exceeding lower bound", Self::LENGTH_CODE)
    }

    /// The text did not match the configured pattern.
    ///
    /// The message embeds the pattern exactly as it was configured.
    pub fn pattern_mismatch(pattern: &str) -> Self {
        Self::new(format!(
            "String does not match the regular expression {pattern}"
        ))
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of one `validate` call: zero or more errors in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A result without errors.
    #[must_use]
    pub fn success() -> Self {
        Self { errors: Vec::new() }
    }

    /// A result carrying the given errors, in order.
    #[must_use]
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Concatenates two results, keeping `first`'s errors ahead of `second`'s.
    #[must_use]
    pub fn merge(first: Self, second: Self) -> Self {
        let mut errors = first.errors;
        errors.extend(second.errors);
        Self { errors }
    }

    /// Returns true when no constraint failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the result, yielding its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<Vec<ValidationError>> for ValidationResult {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::failure(errors)
    }
}

impl FromIterator<ValidationError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationResult {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("Validation passed");
        }
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
