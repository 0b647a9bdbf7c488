//! Title validator
//!
//! Checks that a value is a [`Title`] and, when the `hastoexist` option is
//! set, that the title exists. Existence is answered by an injected
//! [`ExistenceChecker`]; the validator asks at most once per call and never
//! caches the answer.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::foundation::{
    ConfigurationError, Options, Title, ValidationError, ValidationResult, Value, ValueValidator,
};

const HAS_TO_EXIST_OPTION: &str = "hastoexist";

// ============================================================================
// EXISTENCE CHECKER
// ============================================================================

/// Answers whether a title currently exists.
///
/// Implemented for any `Fn(&Title) -> bool` closure and for [`KnownTitles`].
pub trait ExistenceChecker: Send + Sync {
    /// Returns true if the title exists.
    fn exists(&self, title: &Title) -> bool;
}

impl<F> ExistenceChecker for F
where
    F: Fn(&Title) -> bool + Send + Sync,
{
    fn exists(&self, title: &Title) -> bool {
        self(title)
    }
}

/// In-memory set of existing titles.
///
/// # Examples
///
/// ```
/// use value_validators::foundation::Title;
/// use value_validators::validators::{ExistenceChecker, KnownTitles};
///
/// let titles: KnownTitles = [Title::new("Main Page")].into_iter().collect();
/// assert!(titles.exists(&Title::new("Main Page")));
/// assert!(!titles.exists(&Title::new("Sandbox")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnownTitles {
    titles: HashSet<Title>,
}

impl KnownTitles {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a title as existing.
    pub fn insert(&mut self, title: Title) -> bool {
        self.titles.insert(title)
    }

    /// Forgets a title.
    pub fn remove(&mut self, title: &Title) -> bool {
        self.titles.remove(title)
    }
}

impl FromIterator<Title> for KnownTitles {
    fn from_iter<I: IntoIterator<Item = Title>>(iter: I) -> Self {
        Self {
            titles: iter.into_iter().collect(),
        }
    }
}

impl ExistenceChecker for KnownTitles {
    fn exists(&self, title: &Title) -> bool {
        self.titles.contains(title)
    }
}

// ============================================================================
// TITLE VALIDATOR
// ============================================================================

/// Validates title references.
///
/// | option       | shape                     |
/// |--------------|---------------------------|
/// | `hastoexist` | boolean, `null` for false |
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_validators::prelude::*;
///
/// let validator = TitleValidator::new(|_: &Title| false)
///     .options_from(Options::new().with("hastoexist", true));
///
/// let result = validator.validate(&Title::new("Missing").into()).unwrap();
/// assert_eq!(result.errors(), &[ValidationError::new("Title does not exist")]);
///
/// let result = validator.validate(&json!("Missing").into()).unwrap();
/// assert_eq!(result.errors(), &[ValidationError::new("Not a title")]);
/// ```
#[derive(Clone)]
pub struct TitleValidator {
    options: Options,
    checker: Arc<dyn ExistenceChecker>,
}

impl TitleValidator {
    /// Creates a validator backed by `checker`.
    pub fn new(checker: impl ExistenceChecker + 'static) -> Self {
        Self::with_checker(Arc::new(checker))
    }

    /// Creates a validator sharing an existing checker.
    pub fn with_checker(checker: Arc<dyn ExistenceChecker>) -> Self {
        Self {
            options: Options::new(),
            checker,
        }
    }

    /// Replaces the options, returning the validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn options_from(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    fn has_to_exist(&self) -> Result<bool, ConfigurationError> {
        match self.options.get(HAS_TO_EXIST_OPTION) {
            None | Some(JsonValue::Null) => Ok(false),
            Some(JsonValue::Bool(flag)) => Ok(*flag),
            Some(found) => Err(ConfigurationError::InvalidType {
                option: HAS_TO_EXIST_OPTION,
                expected: "a boolean",
                found: found.clone(),
            }),
        }
    }
}

impl fmt::Debug for TitleValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleValidator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ValueValidator for TitleValidator {
    fn name(&self) -> &'static str {
        "title"
    }

    fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn validate(&self, value: &Value) -> Result<ValidationResult, ConfigurationError> {
        let Some(title) = value.as_title() else {
            tracing::debug!(validator = self.name(), kind = value.kind(), "not a title");
            return Ok(ValidationResult::failure(vec![ValidationError::new(
                "Not a title",
            )]));
        };

        let has_to_exist = self
            .has_to_exist()
            .inspect_err(|error| tracing::warn!(validator = self.name(), %error, "invalid options"))?;

        if has_to_exist && !self.checker.exists(title) {
            tracing::debug!(validator = self.name(), %title, "title does not exist");
            return Ok(ValidationResult::failure(vec![ValidationError::new(
                "Title does not exist",
            )]));
        }

        tracing::debug!(validator = self.name(), %title, "validated title");
        Ok(ValidationResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_known_titles() {
        let mut titles = KnownTitles::new();
        assert!(titles.insert(Title::new("A")));
        assert!(!titles.insert(Title::new("A")));
        assert!(titles.exists(&Title::new("A")));
        assert!(!titles.exists(&Title::in_namespace(1, "A")));
        assert!(titles.remove(&Title::new("A")));
        assert!(!titles.exists(&Title::new("A")));
    }

    #[test]
    fn test_checker_not_consulted_without_option() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let validator = TitleValidator::new(move |_: &Title| {
            counter.fetch_add(1, Ordering::SeqCst);
            false
        });

        assert!(validator.validate(&Title::new("X").into()).unwrap().is_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_existing_title_passes() {
        let titles: KnownTitles = [Title::new("Main Page")].into_iter().collect();
        let validator =
            TitleValidator::new(titles).options_from(Options::new().with("hastoexist", true));
        assert!(
            validator
                .validate(&Title::new("Main Page").into())
                .unwrap()
                .is_valid()
        );
    }

    #[test]
    fn test_null_option_means_false() {
        let validator = TitleValidator::new(|_: &Title| false)
            .options_from(Options::new().with("hastoexist", JsonValue::Null));
        assert!(validator.validate(&Title::new("X").into()).unwrap().is_valid());
    }

    #[test]
    fn test_non_boolean_option_rejected() {
        let validator = TitleValidator::new(|_: &Title| true)
            .options_from(Options::new().with("hastoexist", "yes"));
        assert!(matches!(
            validator.validate(&Title::new("X").into()),
            Err(ConfigurationError::InvalidType { option: "hastoexist", .. })
        ));
    }

    #[test]
    fn test_debug_omits_checker() {
        let validator = TitleValidator::new(KnownTitles::new());
        assert!(format!("{validator:?}").starts_with("TitleValidator"));
    }
}
