//! # value-validators
//!
//! Option-driven validators that check one value at a time and report every
//! failed constraint instead of stopping at the first.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use value_validators::prelude::*;
//!
//! let mut validator = StringValidator::new();
//! validator.set_options(Options::new().with("length", json!([1, 8])).with("regex", "/^[a-z]+$/"));
//!
//! assert!(validator.validate(&"alice".into()).unwrap().is_valid());
//!
//! let result = validator.validate(&"".into()).unwrap();
//! assert_eq!(result.errors().len(), 2); // too short, and no match
//! ```
//!
//! ## Built-in Validators
//!
//! - **Collection**: [`ListValidator`](validators::ListValidator), options
//!   `elementcount`, `minelements`, `maxelements`
//! - **String**: [`StringValidator`](validators::StringValidator), options
//!   `length`, `minlength`, `maxlength`, `regex`
//! - **Title**: [`TitleValidator`](validators::TitleValidator), option
//!   `hastoexist`, backed by an [`ExistenceChecker`](validators::ExistenceChecker)
//! - **No-op**: [`NullValidator`](validators::NullValidator)
//!
//! Malformed options surface as a
//! [`ConfigurationError`](foundation::ConfigurationError), never as an entry
//! of the [`ValidationResult`](foundation::ValidationResult).

pub mod foundation;
pub mod prelude;
pub mod validators;
