//! Prelude module for convenient imports.
//!
//! Provides a single `use value_validators::prelude::*;` import that brings
//! in the validator trait, the result and error types, and every built-in
//! validator.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use value_validators::prelude::*;
//!
//! let tags = ListValidator::with_options(Options::new().with("maxelements", 10));
//! assert!(tags.validate(&json!(["a", "b"]).into()).unwrap().is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core trait, errors, inputs
// ============================================================================

pub use crate::foundation::{
    ConfigurationError, Options, Title, ValidationError, ValidationResult, Value, ValueValidator,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    ExistenceChecker, KnownTitles, ListValidator, NullValidator, StringValidator, TitleValidator,
};
