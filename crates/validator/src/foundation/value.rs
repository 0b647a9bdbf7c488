//! Values accepted by validators.
//!
//! A [`Value`] is either plain JSON data (null, numbers, strings, arrays,
//! objects) or a [`Title`], a reference to a named page that only an external
//! [`ExistenceChecker`](crate::validators::ExistenceChecker) can resolve.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ============================================================================
// TITLE
// ============================================================================

/// Reference to a named external entity.
///
/// The validators never look inside a title; they only hand it to the
/// configured existence checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Title {
    namespace: i32,
    text: String,
}

impl Title {
    /// The main (unprefixed) namespace.
    pub const MAIN_NAMESPACE: i32 = 0;

    /// Creates a title in the main namespace.
    pub fn new(text: impl Into<String>) -> Self {
        Self::in_namespace(Self::MAIN_NAMESPACE, text)
    }

    /// Creates a title in the given namespace.
    pub fn in_namespace(namespace: i32, text: impl Into<String>) -> Self {
        Self {
            namespace,
            text: text.into(),
        }
    }

    /// Namespace number.
    #[must_use]
    pub fn namespace(&self) -> i32 {
        self.namespace
    }

    /// Title text without namespace prefix.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace == Self::MAIN_NAMESPACE {
            f.write_str(&self.text)
        } else {
            write!(f, "{}:{}", self.namespace, self.text)
        }
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// Input to [`ValueValidator::validate`](super::ValueValidator::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Plain data.
    Json(JsonValue),
    /// Reference to a named entity.
    Title(Title),
}

impl Value {
    /// Short type name, used in log events.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(JsonValue::Null) => "null",
            Self::Json(JsonValue::Bool(_)) => "boolean",
            Self::Json(JsonValue::Number(_)) => "number",
            Self::Json(JsonValue::String(_)) => "string",
            Self::Json(JsonValue::Array(_)) => "array",
            Self::Json(JsonValue::Object(_)) => "object",
            Self::Title(_) => "title",
        }
    }

    /// Element count if the value is a collection.
    ///
    /// Both JSON arrays and JSON objects count as collections.
    #[must_use]
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Self::Json(JsonValue::Array(items)) => Some(items.len()),
            Self::Json(JsonValue::Object(map)) => Some(map.len()),
            _ => None,
        }
    }

    /// The text if the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Json(JsonValue::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The title if the value is a title reference.
    #[must_use]
    pub fn as_title(&self) -> Option<&Title> {
        match self {
            Self::Title(title) => Some(title),
            Self::Json(_) => None,
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        Self::Json(value)
    }
}

impl From<Title> for Value {
    fn from(title: Title) -> Self {
        Self::Title(title)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Json(JsonValue::String(text.to_owned()))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Json(JsonValue::String(text))
    }
}
