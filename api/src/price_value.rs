//! Defines the value side of a pair -> price mapping.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// A single price as delivered by the upstream store.
///
/// Upstream data is loosely typed: most prices arrive as JSON numbers, some
/// sources send pre-formatted strings, and a pair can be present with a
/// `null` price while a feed is warming up.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, strum::EnumIs)]
#[serde(untagged)]
pub enum PriceValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl From<f64> for PriceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for PriceValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for PriceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PriceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<PriceValue>> From<Option<T>> for PriceValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Missing)
    }
}

/// Numbers print without a trailing `.0` for whole values, text prints as-is,
/// and a missing price prints as an empty cell.
impl fmt::Display for PriceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}
