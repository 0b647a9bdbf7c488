//! Configuration (usage) errors.
//!
//! These describe a malformed option, not an invalid value. They are
//! returned as the `Err` side of `validate` before any result is built and
//! are never mixed into a [`ValidationResult`](super::ValidationResult).

use serde_json::Value as JsonValue;

/// A validator was configured with an option it cannot interpret.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// A range option is not a `[low, high]` pair of non-negative integers.
    #[error("option '{option}' must be a [low, high] pair of non-negative integers, got {found}")]
    InvalidRange {
        /// The option name.
        option: &'static str,
        /// The configured value.
        found: JsonValue,
    },

    /// A single-bound option is neither a non-negative integer nor unset.
    #[error("option '{option}' must be a non-negative integer, null or false, got {found}")]
    InvalidBound {
        /// The option name.
        option: &'static str,
        /// The configured value.
        found: JsonValue,
    },

    /// An option has the wrong JSON type.
    #[error("option '{option}' must be {expected}, got {found}")]
    InvalidType {
        /// The option name.
        option: &'static str,
        /// Description of the accepted shape.
        expected: &'static str,
        /// The configured value.
        found: JsonValue,
    },

    /// A pattern option does not compile.
    #[error("option '{option}' holds an invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The option name.
        option: &'static str,
        /// The pattern as configured.
        pattern: String,
        /// The compiler's complaint.
        #[source]
        source: regex::Error,
    },
}

impl ConfigurationError {
    /// Name of the offending option.
    pub fn option(&self) -> &'static str {
        match self {
            Self::InvalidRange { option, .. }
            | Self::InvalidBound { option, .. }
            | Self::InvalidType { option, .. }
            | Self::InvalidPattern { option, .. } => *option,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_range_display() {
        let err = ConfigurationError::InvalidRange {
            option: "elementcount",
            found: json!([0, 0, 0]),
        };
        assert_eq!(
            err.to_string(),
            "option 'elementcount' must be a [low, high] pair of non-negative integers, got [0,0,0]"
        );
        assert_eq!(err.option(), "elementcount");
    }

    #[test]
    fn invalid_type_display() {
        let err = ConfigurationError::InvalidType {
            option: "hastoexist",
            expected: "a boolean",
            found: json!("yes"),
        };
        assert_eq!(
            err.to_string(),
            "option 'hastoexist' must be a boolean, got \"yes\""
        );
    }
}
