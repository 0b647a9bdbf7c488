//! Count and length bounds
//!
//! Collection and string validators accept their bounds in two spellings: a
//! combined range option holding `[low, high]`, and separate lower and upper
//! options. [`Bounds::resolve`] reconciles them:
//!
//! 1. A present range option sets both sides. It must be a two-element array
//!    of non-negative integers; validators that allow it also take a single
//!    integer `n` meaning `[n, n]`. Anything else, `null` included, is a
//!    [`ConfigurationError`].
//! 2. A present lower or upper option then overrides its side. `null` and
//!    `false` clear the side; any other value must be a non-negative integer.
//!
//! Bounds are literal and inclusive: an upper bound of `0` only admits empty
//! values. When both sides are violated (possible when `lower > upper`) the
//! upper-bound error comes first.

use serde_json::Value as JsonValue;

use crate::foundation::{ConfigurationError, Options, ValidationError};

// ============================================================================
// OPTION NAMES
// ============================================================================

/// The option names one validator uses for its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundKeys {
    /// Combined `[low, high]` option.
    pub range: &'static str,
    /// Lower-bound option.
    pub lower: &'static str,
    /// Upper-bound option.
    pub upper: &'static str,
    /// Whether the range option also accepts a single integer.
    pub scalar_range: bool,
}

impl BoundKeys {
    /// Element count bounds of collections.
    pub const ELEMENT_COUNT: Self = Self {
        range: "elementcount",
        lower: "minelements",
        upper: "maxelements",
        scalar_range: false,
    };

    /// Character length bounds of strings.
    pub const LENGTH: Self = Self {
        range: "length",
        lower: "minlength",
        upper: "maxlength",
        scalar_range: true,
    };
}

// ============================================================================
// SINGLE BOUND OPTION
// ============================================================================

/// Parsed state of a lower or upper option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundOption {
    /// The option is absent.
    NotSet,
    /// The option is `null` or `false`.
    Disabled,
    /// The option holds a bound.
    Value(u64),
}

impl BoundOption {
    fn parse(option: &'static str, value: Option<&JsonValue>) -> Result<Self, ConfigurationError> {
        match value {
            None => Ok(Self::NotSet),
            Some(JsonValue::Null | JsonValue::Bool(false)) => Ok(Self::Disabled),
            Some(found) => integer(found).map(Self::Value).ok_or_else(|| {
                ConfigurationError::InvalidBound {
                    option,
                    found: found.clone(),
                }
            }),
        }
    }

    /// Applies this option on top of the bound taken from the range.
    fn apply(self, current: Option<u64>) -> Option<u64> {
        match self {
            Self::NotSet => current,
            Self::Disabled => None,
            Self::Value(bound) => Some(bound),
        }
    }
}

/// A non-negative integer, either as a JSON number or as decimal text.
fn integer(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(number) => number.as_u64(),
        JsonValue::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_range(
    option: &'static str,
    value: &JsonValue,
    scalar: bool,
) -> Result<(u64, u64), ConfigurationError> {
    let pair = match value {
        JsonValue::Array(items) if items.len() == 2 => {
            integer(&items[0]).zip(integer(&items[1]))
        }
        JsonValue::Array(_) => None,
        other if scalar => integer(other).map(|n| (n, n)),
        _ => None,
    };

    pair.ok_or_else(|| ConfigurationError::InvalidRange {
        option,
        found: value.clone(),
    })
}

// ============================================================================
// BOUNDS
// ============================================================================

/// Effective inclusive bounds for one validation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Minimum permitted count, if any.
    pub lower: Option<u64>,
    /// Maximum permitted count, if any.
    pub upper: Option<u64>,
}

impl Bounds {
    /// No constraint on either side.
    pub const UNBOUNDED: Self = Self {
        lower: None,
        upper: None,
    };

    /// Creates bounds from explicit sides.
    #[must_use]
    pub fn new(lower: Option<u64>, upper: Option<u64>) -> Self {
        Self { lower, upper }
    }

    /// Resolves the bounds configured under `keys`.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use value_validators::foundation::Options;
    /// use value_validators::validators::{BoundKeys, Bounds};
    ///
    /// let options = Options::new()
    ///     .with("elementcount", json!([1, 5]))
    ///     .with("maxelements", false);
    ///
    /// let bounds = Bounds::resolve(&options, &BoundKeys::ELEMENT_COUNT).unwrap();
    /// assert_eq!(bounds, Bounds::new(Some(1), None));
    /// ```
    pub fn resolve(options: &Options, keys: &BoundKeys) -> Result<Self, ConfigurationError> {
        let (lower, upper) = match options.get(keys.range) {
            Some(range) => {
                let (low, high) = parse_range(keys.range, range, keys.scalar_range)?;
                (Some(low), Some(high))
            }
            None => (None, None),
        };

        let lower = BoundOption::parse(keys.lower, options.get(keys.lower))?.apply(lower);
        let upper = BoundOption::parse(keys.upper, options.get(keys.upper))?.apply(upper);

        let bounds = Self { lower, upper };
        tracing::trace!(range = keys.range, ?bounds, "resolved bounds");
        Ok(bounds)
    }

    /// Checks a measured count, returning upper then lower violations.
    #[must_use]
    pub fn check(&self, measured: u64) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.upper.is_some_and(|upper| measured > upper) {
            errors.push(ValidationError::upper_bound());
        }
        if self.lower.is_some_and(|lower| measured < lower) {
            errors.push(ValidationError::lower_bound());
        }

        errors
    }

    /// Checks a collection or string length.
    #[must_use]
    pub fn check_len(&self, len: usize) -> Vec<ValidationError> {
        self.check(u64::try_from(len).unwrap_or(u64::MAX))
    }
}

// ============================================================================
// TESTS
// ============================================================================
