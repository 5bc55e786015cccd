//! Metadata of a recipe

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::quantity::Value;

/// Metadata of a recipe
///
/// An ordered key/value map. Keys are stored exactly as written; the typed
/// accessors perform key aliasing at read time, so `prep_time` and
/// `prep-time` resolve to the same entry without rewriting the map.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    /// All the raw key/value pairs from the recipe, in insertion order
    pub map: IndexMap<String, Value>,
}

impl Metadata {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Gets a raw value by its exact key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Inserts a value, replacing (in place) any previous entry for the key.
    pub(crate) fn insert(&mut self, key: String, value: Value) {
        self.map.insert(key, value);
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of servings.
    ///
    /// A textual value counts if it starts with digits, so `"4 people"`
    /// yields 4.
    pub fn servings(&self) -> Option<i64> {
        match self.get("servings")? {
            Value::Int(n) => Some(*n),
            Value::Decimal(n) => Some(*n as i64),
            Value::Text(t) => leading_int(t),
        }
    }

    pub fn title(&self) -> Option<&Value> {
        self.get("title")
    }

    pub fn source(&self) -> Option<&Value> {
        self.get("source")
    }

    pub fn prep_time(&self) -> Option<&Value> {
        self.aliased("prep_time", "prep-time")
    }

    pub fn cook_time(&self) -> Option<&Value> {
        self.aliased("cook_time", "cook-time")
    }

    pub fn total_time(&self) -> Option<&Value> {
        self.aliased("total_time", "total-time")
    }

    /// Recipe tags.
    ///
    /// A comma separated string value is split into one tag per element,
    /// each trimmed. Missing or non textual values yield no tags.
    pub fn tags(&self) -> Vec<String> {
        match self.get("tags") {
            Some(Value::Text(t)) => t.split(',').map(|tag| tag.trim().to_string()).collect(),
            _ => Vec::new(),
        }
    }

    fn aliased(&self, key: &str, alias: &str) -> Option<&Value> {
        self.get(key).or_else(|| self.get(alias))
    }
}

fn leading_int(text: &str) -> Option<i64> {
    let digits: &str = {
        let end = text
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(text.len());
        &text[..end]
    };
    digits.parse().ok()
}
