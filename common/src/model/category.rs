//! Cumulative donation amounts per category.
//!
//! Categories keep the order in which they were first seen, and that order
//! is preserved when the totals are serialized as a JSON object.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Category names every ledger starts with, each at a total of zero.
pub const SEEDED_CATEGORIES: [&str; 4] = ["Education", "Healthcare", "Environment", "Community"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(String, f64)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals with every name in `SEEDED_CATEGORIES` present at `0.0`.
    pub fn seeded() -> Self {
        let mut totals = Self::new();
        for name in SEEDED_CATEGORIES {
            totals.credit(name, 0.0);
        }
        totals
    }

    /// Adds `amount` to `name`, inserting the category at the end if it has
    /// not been seen before.
    pub fn credit(&mut self, name: &str, amount: f64) {
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((name.to_string(), amount)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, total)| *total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, total) in &self.entries {
            map.serialize_entry(name, total)?;
        }
        map.end()
    }
}

struct CategoryTotalsVisitor;

impl<'de> Visitor<'de> for CategoryTotalsVisitor {
    type Value = CategoryTotals;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category names to amounts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut totals = CategoryTotals::new();
        while let Some((name, amount)) = access.next_entry::<String, f64>()? {
            totals.credit(&name, amount);
        }
        Ok(totals)
    }
}

impl<'de> Deserialize<'de> for CategoryTotals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CategoryTotalsVisitor)
    }
}
