//! Narrative bands and the descriptions attached to them

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::traits::Trait;

/// Narrative band a trait score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    High,
    ModeratelyHigh,
    ModeratelyLow,
    Low,
}

impl Category {
    /// Highest band first
    pub const ALL: [Category; 4] = [
        Category::High,
        Category::ModeratelyHigh,
        Category::ModeratelyLow,
        Category::Low,
    ];

    /// Table key, as written in inventory files
    pub fn key(&self) -> &'static str {
        match self {
            Category::High => "high",
            Category::ModeratelyHigh => "moderatelyHigh",
            Category::ModeratelyLow => "moderatelyLow",
            Category::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::High => "high",
            Category::ModeratelyHigh => "moderately high",
            Category::ModeratelyLow => "moderately low",
            Category::Low => "low",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Description of what a score band means for one trait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeEntry {
    pub text: String,
    pub example: String,

    /// Fictional counterpart with a similar profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

impl NarrativeEntry {
    pub fn new(text: &str, example: &str, character: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            example: example.to_string(),
            character: character.map(str::to_string),
        }
    }
}

/// Per-trait narratives; key order is the order traits are reported in
pub type NarrativeTable = IndexMap<Trait, IndexMap<Category, NarrativeEntry>>;
