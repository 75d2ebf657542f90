//! LLM prompt assembly
//!
//! The prompt is plain text meant to be pasted into a chat interface:
//! scale legend, raw answers in item order, trait means, narratives, closing line.

use indexmap::IndexMap;

use crate::inventory::Inventory;
use crate::inventory::traits::Trait;
use crate::scoring::ScoreMap;
use crate::scoring::assessment::TraitNarrative;

/// Knobs that come from configuration rather than the inventory
#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub include_characters: bool,
    /// Replaces the inventory's closing sentence
    pub closing_instruction: Option<String>,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            include_characters: true,
            closing_instruction: None,
        }
    }
}

/// Build the prompt for one assessed submission
pub fn build_prompt(
    inventory: &Inventory,
    responses: &[i32],
    scores: &ScoreMap,
    narratives: &IndexMap<Trait, TraitNarrative>,
    options: &PromptOptions,
) -> String {
    let scale = &inventory.scale;
    let mut out = String::new();

    out.push_str(&format!(
        "I completed the {}. For each statement I rated how well it describes me on a {}-{} scale ({}).\n\n",
        inventory.name,
        scale.min(),
        scale.max,
        scale.legend()
    ));

    out.push_str("My answers:\n");
    for (i, (item, raw)) in inventory.items.iter().zip(responses).enumerate() {
        let label = scale.label(*raw).map(|l| format!(" ({})", l)).unwrap_or_default();
        out.push_str(&format!("{}. {} {}: {}{}\n", i + 1, inventory.stem, item.text, raw, label));
    }

    out.push_str(&format!("\nMy trait scores (mean on the {}-{} scale):\n", scale.min(), scale.max));
    for trait_ in narratives.keys() {
        if let Some(value) = scores.get(trait_) {
            out.push_str(&format!("- {}: {:.2}\n", trait_, value));
        }
    }

    out.push_str("\nWhat the scores suggest:\n");
    for (trait_, narrative) in narratives {
        out.push_str(&format!(
            "- {} ({}): {} Example: {}",
            trait_,
            narrative.category.label(),
            narrative.entry.text,
            narrative.entry.example
        ));
        if options.include_characters
            && let Some(character) = &narrative.entry.character
        {
            out.push_str(&format!(" Fictional counterpart: {}.", character));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(options.closing_instruction.as_deref().unwrap_or(&inventory.closing));
    out.push('\n');

    out
}
