//! Concept categories and the containers that hold extracted values.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six fixed buckets a concept can be classified into.
///
/// The declaration order is the order categories appear in serialized
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptCategory {
    Keywords,
    Operators,
    ControlStructures,
    FunctionCalls,
    Identifiers,
    Literals,
}

impl ConceptCategory {
    /// All categories, in result order.
    pub const ALL: [ConceptCategory; 6] = [
        ConceptCategory::Keywords,
        ConceptCategory::Operators,
        ConceptCategory::ControlStructures,
        ConceptCategory::FunctionCalls,
        ConceptCategory::Identifiers,
        ConceptCategory::Literals,
    ];

    /// The wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Operators => "operators",
            Self::ControlStructures => "control_structures",
            Self::FunctionCalls => "function_calls",
            Self::Identifiers => "identifiers",
            Self::Literals => "literals",
        }
    }
}

impl fmt::Display for ConceptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConceptCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown concept category: {}", s))
    }
}

/// Deduplicated values accumulated during a single traversal.
///
/// Every category is present from construction, so an empty category is
/// distinguishable from a missing one only by its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptSets {
    sets: BTreeMap<ConceptCategory, BTreeSet<String>>,
}

impl ConceptSets {
    /// Create an empty set for every category.
    pub fn new() -> Self {
        Self {
            sets: ConceptCategory::ALL
                .into_iter()
                .map(|c| (c, BTreeSet::new()))
                .collect(),
        }
    }

    /// Add a value to a category. Returns `false` if it was already present.
    pub fn insert(&mut self, category: ConceptCategory, value: impl Into<String>) -> bool {
        self.sets.entry(category).or_default().insert(value.into())
    }

    /// Values collected for a category.
    pub fn get(&self, category: ConceptCategory) -> &BTreeSet<String> {
        // Populated for every category in `new`.
        &self.sets[&category]
    }

    /// Iterate categories with their values, in result order.
    pub fn iter(&self) -> impl Iterator<Item = (ConceptCategory, &BTreeSet<String>)> {
        self.sets.iter().map(|(c, v)| (*c, v))
    }

    /// Total number of values across all categories.
    pub fn total(&self) -> usize {
        self.sets.values().map(BTreeSet::len).sum()
    }
}

impl Default for ConceptSets {
    fn default() -> Self {
        Self::new()
    }
}

/// Final, sorted output of an analysis.
///
/// Serializes as a JSON object keyed by category name with every category
/// present, e.g. `{"keywords": ["if"], "operators": [">"], ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    categories: BTreeMap<ConceptCategory, Vec<String>>,
}

impl ExtractionResult {
    /// Build a result from per-category sequences. Missing categories become empty.
    pub fn from_categories(
        categories: impl IntoIterator<Item = (ConceptCategory, Vec<String>)>,
    ) -> Self {
        let mut result = Self::empty();
        for (category, values) in categories {
            result.categories.insert(category, values);
        }
        result
    }

    /// A result with every category empty.
    pub fn empty() -> Self {
        Self {
            categories: ConceptCategory::ALL
                .into_iter()
                .map(|c| (c, Vec::new()))
                .collect(),
        }
    }

    /// Sorted values for a category.
    pub fn get(&self, category: ConceptCategory) -> &[String] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate categories with their values, in result order.
    pub fn iter(&self) -> impl Iterator<Item = (ConceptCategory, &[String])> {
        self.categories.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    /// Whether every category is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Union of values over all categories.
    pub fn all_values(&self) -> BTreeSet<String> {
        self.categories.values().flatten().cloned().collect()
    }
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self::empty()
    }
}
