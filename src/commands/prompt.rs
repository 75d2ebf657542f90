use eyre::Result;

use crate::cli::AnswerSource;
use crate::config::Config;
use crate::inventory::loader::Catalog;
use crate::prompt::build_prompt;

pub fn run(inventory: Option<&str>, source: &AnswerSource, config: &Config) -> Result<()> {
    let catalog = Catalog::load(config.inventories_dir())?;
    let inventory = super::resolve_inventory(&catalog, inventory, config)?;
    let responses = super::read_answers(source)?;

    let assessment = super::assess_logged(inventory, &responses)?;
    let prompt = build_prompt(
        inventory,
        &responses,
        &assessment.scores,
        &assessment.narratives,
        &config.prompt.options(),
    );

    print!("{}", prompt);

    Ok(())
}
