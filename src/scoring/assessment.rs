//! Scores plus the narratives they select

use indexmap::IndexMap;
use serde::Serialize;

use super::classify::classify;
use super::error::ScoreError;
use super::{ScoreMap, score};
use crate::inventory::Inventory;
use crate::inventory::narrative::{Category, NarrativeEntry};
use crate::inventory::traits::Trait;

/// The narrative selected for one trait
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitNarrative {
    pub score: f64,
    pub category: Category,
    #[serde(flatten)]
    pub entry: NarrativeEntry,
}

/// Result of one submission
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub inventory: String,
    pub scores: ScoreMap,
    /// Keyed in narrative table order
    pub narratives: IndexMap<Trait, TraitNarrative>,
}

/// Score a submission and pick a narrative for every trait
pub fn assess(inventory: &Inventory, responses: &[i32]) -> Result<Assessment, ScoreError> {
    let scores = score(&inventory.items, &inventory.scale, responses)?;
    let thresholds = inventory.thresholds();

    let mut narratives = IndexMap::new();
    for trait_ in inventory.narratives.keys() {
        let Some(&value) = scores.get(trait_) else {
            continue;
        };
        let category = classify(value, &thresholds);
        let entry = inventory
            .narrative(*trait_, category)
            .ok_or(ScoreError::MissingNarrative {
                trait_: *trait_,
                category,
            })?
            .clone();
        narratives.insert(
            *trait_,
            TraitNarrative {
                score: value,
                category,
                entry,
            },
        );
    }

    // Validation guarantees every scored trait has narratives
    if let Some(trait_) = scores.keys().find(|t| !narratives.contains_key(*t)) {
        let category = classify(scores[trait_], &thresholds);
        return Err(ScoreError::MissingNarrative {
            trait_: *trait_,
            category,
        });
    }

    log::debug!("Assessed {} traits for inventory '{}'", narratives.len(), inventory.id);

    Ok(Assessment {
        inventory: inventory.id.clone(),
        scores,
        narratives,
    })
}
