use colored::*;
use eyre::{Context, Result};
use std::fs;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::{Config, LogLevel};

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
        ConfigAction::Set { key, value } => set(&key, &value, config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "BFI Configuration".bold());
            println!();

            println!("log_level: {}", config.log_level.as_filter());
            println!("default_inventory: {}", config.default_inventory);
            println!();

            println!("{}:", "paths".cyan());
            println!("  inventories: {}", config.paths.inventories.display());
            println!();

            println!("{}:", "prompt".cyan());
            println!("  include_characters: {}", config.prompt.include_characters);
            println!(
                "  closing_instruction: {}",
                config.prompt.closing_instruction.as_deref().unwrap_or("(inventory default)")
            );
            println!();

            println!("{}:", "output".cyan());
            println!(
                "  bar_width: {}",
                config
                    .output
                    .bar_width
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "(terminal)".to_string())
            );
        }
    }

    Ok(())
}

fn lookup(key: &str, config: &Config) -> Option<String> {
    match key {
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "default_inventory" => Some(config.default_inventory.clone()),
        "paths.inventories" => Some(config.paths.inventories.display().to_string()),
        "prompt.include_characters" => Some(config.prompt.include_characters.to_string()),
        "prompt.closing_instruction" => Some(config.prompt.closing_instruction.clone().unwrap_or_default()),
        "output.bar_width" => Some(config.output.bar_width.map(|w| w.to_string()).unwrap_or_default()),
        _ => None,
    }
}

fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config) {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Apply one key/value change; empty values clear optional settings
fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "log_level" | "log-level" => {
            config.log_level = value.parse::<LogLevel>().map_err(|e| eyre::eyre!(e))?;
        }
        "default_inventory" => config.default_inventory = value.to_string(),
        "paths.inventories" => config.paths.inventories = value.into(),
        "prompt.include_characters" => {
            config.prompt.include_characters =
                value.parse().context("Invalid boolean value (use 'true' or 'false')")?;
        }
        "prompt.closing_instruction" => {
            config.prompt.closing_instruction = (!value.is_empty()).then(|| value.to_string());
        }
        "output.bar_width" => {
            config.output.bar_width = if value.is_empty() {
                None
            } else {
                Some(value.parse().context("Invalid width (use a whole number)")?)
            };
        }
        _ => {
            eyre::bail!("Unknown config key: {}", key);
        }
    }

    Ok(())
}

fn set(key: &str, value: &str, config: &Config) -> Result<()> {
    println!("{} Setting {} = {}", "→".blue(), key.cyan(), value.green());

    let mut new_config = config.clone();
    apply(&mut new_config, key, value)?;

    let config_path = Config::bfi_dir().join("bfi.yaml");
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml_str = serde_yaml::to_string(&new_config).context("Failed to serialize config")?;
    fs::write(&config_path, yaml_str).context("Failed to write config file")?;

    println!("  {} Saved to {}", "✓".green(), config_path.display());

    Ok(())
}
