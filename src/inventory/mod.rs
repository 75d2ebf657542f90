//! Questionnaire definitions
//!
//! An inventory bundles everything needed to score one questionnaire:
//! - The ordered item list (response index `i` answers `items[i]`)
//! - The Likert scale and category thresholds
//! - The narrative table consulted after scoring
//!
//! The historical TIPI and BFI-44 forms are built in; more can be loaded from YAML.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod builtin;
pub mod loader;
pub mod narrative;
pub mod scale;
pub mod traits;

use narrative::{Category, NarrativeEntry, NarrativeTable};
use scale::{LikertScale, SCALE_MAX_POINTS, SCALE_MIN, Thresholds};
use traits::Trait;

/// One questionnaire statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    #[serde(rename = "trait")]
    pub trait_: Trait,
    #[serde(default)]
    pub reversed: bool,
}

impl Item {
    pub fn new(text: &str, trait_: Trait, reversed: bool) -> Self {
        Self {
            text: text.to_string(),
            trait_,
            reversed,
        }
    }
}

/// Problems with an inventory definition
#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("inventory '{0}' has no items")]
    NoItems(String),

    #[error("inventory '{id}' has a {max}-point scale; at least 2 points are required")]
    ScaleTooSmall { id: String, max: i32 },

    #[error("inventory '{id}' has a {max}-point scale; at most {limit} points are allowed")]
    ScaleTooLarge { id: String, max: i32, limit: i32 },

    #[error("inventory '{id}' has {labels} scale labels for a {max}-point scale")]
    LabelCount { id: String, labels: usize, max: i32 },

    #[error("inventory '{id}' thresholds low={low} high={high} must satisfy 1 <= low < high <= {max}")]
    BadThresholds { id: String, low: f64, high: f64, max: i32 },

    #[error("inventory '{id}' has no narratives for {trait_}")]
    MissingTrait { id: String, trait_: Trait },

    #[error("inventory '{id}' has no '{category}' narrative for {trait_}")]
    MissingCategory { id: String, trait_: Trait, category: Category },

    #[error("inventory '{id}' has narratives for {trait_} but no items measure it")]
    UnusedTrait { id: String, trait_: Trait },
}

fn default_stem() -> String {
    "I see myself as:".to_string()
}

fn default_closing() -> String {
    "Based on these results, describe my personality profile in a few paragraphs and suggest how I can use my strengths."
        .to_string()
}

/// A complete, scoreable questionnaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Short identifier used on the command line (e.g. "tipi")
    pub id: String,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Lead-in shown before each item text
    #[serde(default = "default_stem")]
    pub stem: String,

    pub scale: LikertScale,

    /// Explicit thresholds; derived from the scale when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,

    pub items: Vec<Item>,

    pub narratives: NarrativeTable,

    /// Final instruction sentence of the generated prompt
    #[serde(default = "default_closing")]
    pub closing: String,
}

impl Inventory {
    /// Effective category thresholds
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds.unwrap_or_else(|| Thresholds::for_scale(&self.scale))
    }

    /// Distinct traits in the order they first appear among the items
    pub fn traits(&self) -> IndexSet<Trait> {
        self.items.iter().map(|item| item.trait_).collect()
    }

    /// Number of items measuring a trait
    pub fn item_count(&self, trait_: Trait) -> usize {
        self.items.iter().filter(|item| item.trait_ == trait_).count()
    }

    pub fn narrative(&self, trait_: Trait, category: Category) -> Option<&NarrativeEntry> {
        self.narratives.get(&trait_).and_then(|entries| entries.get(&category))
    }

    /// Check the definition is complete enough that scoring can never fail on it
    pub fn validate(&self) -> Result<(), InventoryError> {
        let id = self.id.clone();

        if self.items.is_empty() {
            return Err(InventoryError::NoItems(id));
        }

        if self.scale.max < 2 {
            return Err(InventoryError::ScaleTooSmall { id, max: self.scale.max });
        }

        if self.scale.max > SCALE_MAX_POINTS {
            return Err(InventoryError::ScaleTooLarge {
                id,
                max: self.scale.max,
                limit: SCALE_MAX_POINTS,
            });
        }

        if !self.scale.labels.is_empty() && self.scale.labels.len() != self.scale.max as usize {
            return Err(InventoryError::LabelCount {
                id,
                labels: self.scale.labels.len(),
                max: self.scale.max,
            });
        }

        let t = self.thresholds();
        let max = self.scale.max as f64;
        if !(t.low >= SCALE_MIN as f64 && t.low < t.high && t.high <= max) {
            return Err(InventoryError::BadThresholds {
                id,
                low: t.low,
                high: t.high,
                max: self.scale.max,
            });
        }

        let measured = self.traits();
        for trait_ in &measured {
            let Some(entries) = self.narratives.get(trait_) else {
                return Err(InventoryError::MissingTrait { id, trait_: *trait_ });
            };
            if let Some(category) = Category::ALL.into_iter().find(|c| !entries.contains_key(c)) {
                return Err(InventoryError::MissingCategory {
                    id,
                    trait_: *trait_,
                    category,
                });
            }
        }

        if let Some(unused) = self.narratives.keys().find(|t| !measured.contains(*t)) {
            return Err(InventoryError::UnusedTrait { id, trait_: *unused });
        }

        Ok(())
    }
}
