//! Built-in validators
//!
//! # Validators
//!
//! - [`ListValidator`]: collections, by element count
//! - [`StringValidator`]: strings, by length and pattern
//! - [`TitleValidator`]: title references, by existence
//! - [`NullValidator`]: accepts everything
//!
//! # Shared pieces
//!
//! - [`Bounds`] / [`BoundKeys`]: range vs. min/max option reconciliation
//! - [`Pattern`]: delimited pattern parsing
//! - [`ExistenceChecker`] / [`KnownTitles`]: title existence lookups

pub mod bounds;
pub mod list;
pub mod null;
pub mod pattern;
pub mod string;
pub mod title;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use bounds::{BoundKeys, Bounds};
pub use list::ListValidator;
pub use null::NullValidator;
pub use pattern::Pattern;
pub use string::StringValidator;
pub use title::{ExistenceChecker, KnownTitles, TitleValidator};
