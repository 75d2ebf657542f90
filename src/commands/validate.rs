//! Check inventory definitions

use colored::*;
use eyre::Result;

use crate::config::Config;
use crate::inventory::loader::{Catalog, InventoryLoader};
use crate::inventory::{Inventory, builtin};

pub fn run(inventory: &str, config: &Config) -> Result<()> {
    if inventory != "all" {
        let catalog = Catalog::load(config.inventories_dir())?;
        let inv = super::resolve_inventory(&catalog, Some(inventory), config)?;
        if check(inv) {
            return Ok(());
        }
        eyre::bail!("Inventory '{}' failed validation", inv.id);
    }

    let mut failures = 0;

    println!("{}", "Built-in:".bold());
    for inv in builtin::all() {
        if !check(inv) {
            failures += 1;
        }
    }
    println!();

    let inventories_dir = config.inventories_dir();
    println!("{} {}", "Custom:".bold(), inventories_dir.display().to_string().dimmed());
    let scanned = InventoryLoader::new(inventories_dir).scan()?;
    if scanned.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (path, result) in &scanned {
        match result {
            Ok(inv) => {
                if builtin::get(&inv.id).is_some() {
                    println!(
                        "  {} {} {}",
                        "⚠".yellow(),
                        inv.id,
                        format!("({}: id is reserved by a built-in and will be ignored)", path.display()).dimmed()
                    );
                } else if !check(inv) {
                    failures += 1;
                }
            }
            Err(e) => {
                failures += 1;
                println!("  {} {}: {:#}", "✗".red(), path.display(), e);
            }
        }
    }

    if failures > 0 {
        eyre::bail!("{} inventory definition(s) failed validation", failures);
    }

    Ok(())
}

fn check(inv: &Inventory) -> bool {
    match inv.validate() {
        Ok(()) => {
            println!(
                "  {} {} {}",
                "✓".green(),
                inv.id,
                format!("({} items, {} traits, 1-{} scale)", inv.items.len(), inv.traits().len(), inv.scale.max)
                    .dimmed()
            );
            true
        }
        Err(e) => {
            println!("  {} {}: {}", "✗".red(), inv.id, e);
            false
        }
    }
}
