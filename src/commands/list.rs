//! List available inventories

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::inventory::loader::Catalog;

#[derive(Serialize)]
struct InventorySummary {
    id: String,
    name: String,
    items: usize,
    scale_max: i32,
    traits: Vec<String>,
    builtin: bool,
}

pub fn run(format: OutputFormat, config: &Config) -> Result<()> {
    let inventories_dir = config.inventories_dir();
    let catalog = Catalog::load(inventories_dir.clone())?;

    let summaries: Vec<InventorySummary> = catalog
        .entries()
        .map(|(inv, builtin)| InventorySummary {
            id: inv.id.clone(),
            name: inv.name.clone(),
            items: inv.items.len(),
            scale_max: inv.scale.max,
            traits: inv.traits().iter().map(|t| t.to_string()).collect(),
            builtin,
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&summaries)?),
        OutputFormat::Text => {
            println!("{}", "Available Inventories:".bold());
            println!();

            for summary in &summaries {
                let source = if summary.builtin { "[built-in]".dimmed() } else { "[custom]".yellow() };
                let default_badge = if summary.id.eq_ignore_ascii_case(&config.default_inventory) {
                    " (default)".green().to_string()
                } else {
                    String::new()
                };
                println!("  {} {} {}{}", "●".green(), summary.id.bold(), source, default_badge);
                println!("    {}", summary.name);
                println!(
                    "    {}",
                    format!("{} items, 1-{} scale", summary.items, summary.scale_max).dimmed()
                );
                println!("    Traits: {}", summary.traits.join(", ").cyan());
                println!();
            }

            if !summaries.iter().any(|s| !s.builtin) {
                println!(
                    "  {} Add custom inventories as YAML files in {}",
                    "(tip)".dimmed(),
                    inventories_dir.display()
                );
            }
        }
    }

    Ok(())
}
