//! Typed configuration read from `data-*` attributes.
//!
//! Attribute access goes through a lookup closure, so the same parsing works
//! for DOM elements and for plain maps in tests.

use thiserror::Error;

/// Resource path of a trigger element (required).
pub const ATTR_CSV_SOURCE: &str = "data-csv-source";
/// Optional `key=value` row filter of a trigger element.
pub const ATTR_FILTER: &str = "data-filter";
/// Numeric target of a counter element (required).
pub const ATTR_COUNT: &str = "data-count";
/// Text appended after a counter value (optional).
pub const ATTR_SUFFIX: &str = "data-suffix";

/// Errors raised while reading element attributes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// A required attribute is absent or blank
    #[error("missing required attribute `{0}`")]
    Missing(&'static str),

    /// An attribute that must be numeric is not
    #[error("attribute `{name}` is not a number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// A `{key, value}` row filter parsed from `"key=value"`.
///
/// Filters are carried through to rendering but do not restrict rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSpec {
    pub key: String,
    pub value: String,
}

impl FilterSpec {
    /// Parse `"key=value"`, splitting at the first `=`.
    ///
    /// Returns `None` without an `=` or with an empty key.
    pub fn parse(s: &str) -> Option<Self> {
        let (key, value) = s.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// Configuration of a trigger element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerConfig {
    /// Path of the delimited-text resource to load
    pub source: String,
    /// Optional row filter
    pub filter: Option<FilterSpec>,
}

impl TriggerConfig {
    /// Create a trigger config for `source` without a filter.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            filter: None,
        }
    }

    /// Read a trigger config through an attribute lookup.
    ///
    /// An unparseable filter is dropped with a warning rather than failing
    /// the trigger.
    pub fn from_attributes<F>(attr: F) -> Result<Self, AttributeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = attr(ATTR_CSV_SOURCE)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(AttributeError::Missing(ATTR_CSV_SOURCE))?;

        let filter = attr(ATTR_FILTER)
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| {
                let parsed = FilterSpec::parse(&raw);
                if parsed.is_none() {
                    tracing::warn!(source = %source, filter = %raw, "ignoring malformed filter");
                }
                parsed
            });

        Ok(Self { source, filter })
    }
}

/// Configuration of an animated counter element.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterConfig {
    /// Value the counter ends on
    pub target: f64,
    /// Intermediate values show one decimal place
    pub fractional: bool,
    /// Appended after the number
    pub suffix: String,
}

impl CounterConfig {
    /// Read a counter config through an attribute lookup.
    ///
    /// The target is fractional when its text contains a decimal point.
    pub fn from_attributes<F>(attr: F) -> Result<Self, AttributeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = attr(ATTR_COUNT)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(AttributeError::Missing(ATTR_COUNT))?;

        let target = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AttributeError::InvalidNumber {
                name: ATTR_COUNT,
                value: raw.clone(),
            })?;

        Ok(Self {
            target,
            fractional: raw.contains('.'),
            suffix: attr(ATTR_SUFFIX).unwrap_or_default(),
        })
    }

    /// Text shown while counting, for the intermediate value `current`.
    pub fn frame_text(&self, current: f64) -> String {
        if self.fractional {
            format!("{:.1}{}", current, self.suffix)
        } else {
            format!("{}{}", current.floor() as i64, self.suffix)
        }
    }

    /// Text shown once the counter reaches its target.
    pub fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}
