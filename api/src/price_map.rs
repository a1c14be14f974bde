//! Provides an insertion-ordered map of trading pair -> price.

use crate::price_value::PriceValue;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use std::fmt;

/// A map holding the latest price for each trading pair (e.g. `"BTC/USD"`).
///
/// Unlike a `HashMap`, iteration yields pairs in the order they were first
/// inserted, which is also the order they appear in the JSON object the map
/// was decoded from. The price table lists rows in this order until the user
/// sorts, so the order must survive a round trip through a server function.
///
/// Pair counts are small (hundreds at most), so lookups are linear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceMap(Vec<(String, PriceValue)>);

impl PriceMap {
    /// Creates a new, empty `PriceMap`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts or updates the price for a given pair.
    ///
    /// An existing pair keeps its position and the old value is returned.
    pub fn insert(&mut self, pair: impl Into<String>, value: impl Into<PriceValue>) -> Option<PriceValue> {
        let pair = pair.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == pair) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((pair, value));
                None
            }
        }
    }

    /// Removes a pair, returning its price if it existed.
    pub fn remove(&mut self, pair: &str) -> Option<PriceValue> {
        let idx = self.0.iter().position(|(p, _)| p == pair)?;
        Some(self.0.remove(idx).1)
    }

    /// Retrieves the price for a specific pair.
    pub fn get(&self, pair: &str) -> Option<&PriceValue> {
        self.0.iter().find(|(p, _)| p == pair).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over `(pair, price)` in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

/// An iterator over the entries of a `PriceMap`.
pub struct Iter<'a>(std::slice::Iter<'a, (String, PriceValue)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a PriceValue);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(pair, value)| (pair.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PriceMap {
    type Item = (&'a str, &'a PriceValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<PriceValue>> FromIterator<(K, V)> for PriceMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (pair, value) in iter {
            map.insert(pair, value);
        }
        map
    }
}

impl Serialize for PriceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (pair, value) in &self.0 {
            map.serialize_entry(pair, value)?;
        }
        map.end()
    }
}

struct PriceMapVisitor;

impl<'de> Visitor<'de> for PriceMapVisitor {
    type Value = PriceMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of trading pair to price")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<PriceMap, A::Error> {
        let mut map = PriceMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((pair, value)) = access.next_entry::<String, PriceValue>()? {
            map.insert(pair, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for PriceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PriceMapVisitor)
    }
}
