//! Subcommand implementations

use eyre::{Context, Result};

use crate::cli::AnswerSource;
use crate::config::Config;
use crate::inventory::Inventory;
use crate::inventory::loader::Catalog;
use crate::scoring::assessment::{Assessment, assess};
use crate::scoring::responses::{load_answers, parse_answers};

pub mod completions;
pub mod config;
pub mod list;
pub mod prompt;
pub mod score;
pub mod show;
pub mod take;
pub mod validate;

/// Pick the requested inventory, falling back to the configured default
pub fn resolve_inventory<'a>(catalog: &'a Catalog, id: Option<&str>, config: &Config) -> Result<&'a Inventory> {
    let id = id.unwrap_or(&config.default_inventory);
    log::debug!("Resolving inventory '{}'", id);

    catalog
        .find(id)
        .ok_or_else(|| eyre::eyre!("Unknown inventory '{}'. Run 'bfi list' to see available inventories", id))
}

/// Read answers from whichever source was given on the command line
pub fn read_answers(source: &AnswerSource) -> Result<Vec<i32>> {
    match (&source.answers, &source.file) {
        (Some(answers), _) => Ok(parse_answers(answers)?),
        (None, Some(path)) => load_answers(path),
        (None, None) => eyre::bail!("No answers given; use --answers or --file"),
    }
}

/// Assess a submission, logging rejected answers and incomplete inventories differently
pub fn assess_logged(inventory: &Inventory, responses: &[i32]) -> Result<Assessment> {
    assess(inventory, responses)
        .inspect_err(|e| {
            if e.is_invalid_input() {
                log::warn!("Rejected answers for '{}': {}", inventory.id, e);
            } else {
                log::error!("Inventory '{}' is incomplete: {}", inventory.id, e);
            }
        })
        .with_context(|| format!("Failed to score '{}'", inventory.id))
}
