//! Trading pair identifiers of the form `BASE/QUOTE`.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    #[error("pair '{0}' has no '/' separator")]
    MissingSeparator(String),
    #[error("pair '{0}' has an empty currency code")]
    EmptyCode(String),
}

/// A trading instrument such as `BTC/USD`.
///
/// `quote` is `None` only for strings that were parsed leniently and had no
/// separator. Strict parsing through `FromStr` always yields both codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    base: String,
    quote: Option<String>,
}

impl Pair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: Some(quote.into()),
        }
    }

    /// Splits a pair string at its first `/` without validating it.
    ///
    /// Used for display, where upstream keys are rendered as-is: a key with
    /// no separator becomes a base-only pair.
    pub fn lenient(s: &str) -> Self {
        match s.split_once('/') {
            Some((base, quote)) => Self::new(base, quote),
            None => Self {
                base: s.to_string(),
                quote: None,
            },
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }
}

impl FromStr for Pair {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (base, quote) = s
            .split_once('/')
            .ok_or_else(|| PairError::MissingSeparator(s.to_string()))?;
        if base.is_empty() || quote.is_empty() {
            return Err(PairError::EmptyCode(s.to_string()));
        }
        Ok(Self::new(base.to_ascii_uppercase(), quote.to_ascii_uppercase()))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.quote {
            Some(quote) => write!(f, "{}/{}", self.base, quote),
            None => f.write_str(&self.base),
        }
    }
}
