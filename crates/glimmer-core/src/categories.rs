//! Category map: named lists of candidate messages.
//!
//! Keys fall into a few families that are only distinguished by how the
//! selector consumes them: the fixed time-of-day keys (`anytime`,
//! `morning`, `afternoon`, `evening`), weather category names, date
//! patterns (regexes tested against `YYYY-MM-DD`), and the person-aware
//! keys (`greetings`, `anyone`, `unknown`, individual names).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from category key to an ordered list of message templates.
///
/// Lookups for unknown keys are treated as absent, never an error.
/// A BTreeMap keeps key iteration deterministic, which fixes the order
/// in which date-matched lists are concatenated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(pub BTreeMap<String, Vec<String>>);

impl Categories {
    /// Empty category map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The built-in default set.
    pub fn default_set() -> Self {
        let mut map = BTreeMap::new();
        map.insert("anytime".to_string(), vec!["Hey there sexy!".to_string()]);
        map.insert(
            "morning".to_string(),
            vec![
                "Good morning, handsome!".to_string(),
                "Enjoy your day!".to_string(),
                "How was your sleep?".to_string(),
            ],
        );
        map.insert(
            "afternoon".to_string(),
            vec![
                "Hello, beauty!".to_string(),
                "You look sexy!".to_string(),
                "Looking good today!".to_string(),
            ],
        );
        map.insert(
            "evening".to_string(),
            vec![
                "Wow, you look hot!".to_string(),
                "You look nice!".to_string(),
                "Hi, sexy!".to_string(),
            ],
        );
        map.insert("....-01-01".to_string(), vec!["Happy new year!".to_string()]);
        Self(map)
    }

    /// Entries under `key`, or an empty slice when the key is absent.
    pub fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `key` exists in the map (even with an empty list).
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate keys and lists in deterministic (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    /// Replace or add a category.
    pub fn insert<K: Into<String>>(&mut self, key: K, entries: Vec<String>) {
        self.0.insert(key.into(), entries);
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a category map from a JSON document whose top level is an
    /// object of key -> array of strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
