//! Validator options
//!
//! Options are a flat map from a case-insensitive name to a JSON value.
//! Names are stored lower-case; lookups lower-case the requested name, so
//! `"MinElements"` and `"minelements"` address the same entry. Each
//! validator reads the names it recognizes and ignores the rest.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Named configuration options for a validator.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_validators::foundation::Options;
///
/// let options = Options::new()
///     .with("ElementCount", json!([1, 3]))
///     .with("unknown", json!("ignored"));
///
/// assert_eq!(options.get("elementcount"), Some(&json!([1, 3])));
/// assert!(options.contains("ELEMENTCOUNT"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: BTreeMap<String, JsonValue>,
}

impl Options {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an option, returning the updated set.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<JsonValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces an option in place.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<JsonValue>) {
        self.entries.insert(name.as_ref().to_lowercase(), value.into());
    }

    /// Looks up an option. A present `null` is returned as `Some(&Null)`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.entries.get(&name.to_lowercase())
    }

    /// Returns true if the option is present, whatever its value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: AsRef<str>,
    V: Into<JsonValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (name, value) in iter {
            options.insert(name, value);
        }
        options
    }
}

impl From<serde_json::Map<String, JsonValue>> for Options {
    fn from(map: serde_json::Map<String, JsonValue>) -> Self {
        map.into_iter().collect()
    }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, JsonValue>::deserialize(deserializer)
            .map(|entries| entries.into_iter().collect())
    }
}
