//! Show an inventory definition

use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::inventory::loader::Catalog;

pub fn run(inventory: Option<&str>, format: OutputFormat, config: &Config) -> Result<()> {
    let catalog = Catalog::load(config.inventories_dir())?;
    let inventory = super::resolve_inventory(&catalog, inventory, config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(inventory)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(inventory)?),
        OutputFormat::Text => {
            let thresholds = inventory.thresholds();

            println!("{} {}", "Inventory:".bold(), inventory.name.green().bold());
            if !inventory.description.is_empty() {
                println!("{}", inventory.description.dimmed());
            }
            println!();

            println!("{}", "Scale:".bold());
            println!("  {}", inventory.scale.legend());
            println!();

            println!("{}", "Thresholds:".bold());
            println!(
                "  low {:.2}  mid {:.2}  high {:.2}",
                thresholds.low,
                thresholds.mid(),
                thresholds.high
            );
            println!();

            println!("{} {}", "Items:".bold(), inventory.stem.dimmed());
            let width = inventory.items.len().to_string().len();
            for (i, item) in inventory.items.iter().enumerate() {
                let reversed = if item.reversed { " (R)".yellow().to_string() } else { String::new() };
                println!(
                    "  {:>width$}. {} {}{}",
                    i + 1,
                    item.text,
                    format!("[{}]", item.trait_).cyan(),
                    reversed,
                    width = width
                );
            }
            println!();

            println!("{}", "Traits:".bold());
            for trait_ in inventory.traits() {
                println!("  {} {} ({} items)", "•".cyan(), trait_, inventory.item_count(trait_));
            }
        }
    }

    Ok(())
}
