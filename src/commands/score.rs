//! Score a submission and render the results

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::cli::{AnswerSource, OutputFormat};
use crate::config::Config;
use crate::inventory::Inventory;
use crate::inventory::loader::Catalog;
use crate::inventory::narrative::Category;
use crate::prompt::build_prompt;
use crate::scoring::assessment::Assessment;

const MIN_BAR: usize = 10;
const MAX_BAR: usize = 50;

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    assessment: &'a Assessment,
    responses: &'a [i32],
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
}

pub fn run(
    inventory: Option<&str>,
    source: &AnswerSource,
    with_prompt: bool,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let catalog = Catalog::load(config.inventories_dir())?;
    let inventory = super::resolve_inventory(&catalog, inventory, config)?;
    let responses = super::read_answers(source)?;

    report(inventory, &responses, with_prompt, format, config)
}

/// Assess the responses and print them in the requested format
pub fn report(
    inventory: &Inventory,
    responses: &[i32],
    with_prompt: bool,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let assessment = super::assess_logged(inventory, responses)?;
    log::info!(
        "Scored {} responses for '{}': {:?}",
        responses.len(),
        inventory.id,
        assessment.scores
    );

    let prompt = with_prompt.then(|| {
        build_prompt(
            inventory,
            responses,
            &assessment.scores,
            &assessment.narratives,
            &config.prompt.options(),
        )
    });

    match format {
        OutputFormat::Json => {
            let report = Report {
                assessment: &assessment,
                responses,
                prompt,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Yaml => {
            let report = Report {
                assessment: &assessment,
                responses,
                prompt,
            };
            println!("{}", serde_yaml::to_string(&report)?);
        }
        OutputFormat::Text => {
            print_text(inventory, &assessment, bar_width(config));
            if let Some(prompt) = prompt {
                println!();
                println!("{}", "LLM Prompt:".bold());
                println!("{}", "─".repeat(MAX_BAR).dimmed());
                print!("{}", prompt);
                println!("{}", "─".repeat(MAX_BAR).dimmed());
            }
        }
    }

    Ok(())
}

fn print_text(inventory: &Inventory, assessment: &Assessment, width: usize) {
    println!("{} {}", "Results:".bold(), inventory.name.green().bold());
    println!();

    for (trait_, narrative) in &assessment.narratives {
        let badge = format!("[{}]", narrative.category.label());
        let badge = match narrative.category {
            Category::High => badge.green(),
            Category::ModeratelyHigh => badge.cyan(),
            Category::ModeratelyLow => badge.yellow(),
            Category::Low => badge.magenta(),
        };
        println!("{}: {:.2} {}", trait_.to_string().bold(), narrative.score, badge);
        println!(
            "  {}",
            score_bar(narrative.score, inventory.scale.min(), inventory.scale.max, width)
        );
        println!("  {}", narrative.entry.text);
        println!("  {} {}", "Example:".bold(), narrative.entry.example);
        if let Some(character) = &narrative.entry.character {
            println!("  {} {}", "Counterpart:".bold(), character);
        }
        println!();
    }
}

fn bar_width(config: &Config) -> usize {
    if let Some(width) = config.output.bar_width {
        return width.max(1);
    }
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| (w as usize).saturating_sub(4))
        .unwrap_or(MAX_BAR)
        .clamp(MIN_BAR, MAX_BAR)
}

/// Horizontal bar showing where a score sits on the scale
fn score_bar(score: f64, min: i32, max: i32, width: usize) -> String {
    let span = (max - min) as f64;
    let fraction = if span > 0.0 { ((score - min as f64) / span).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (fraction * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_extremes() {
        assert_eq!(score_bar(1.0, 1, 7, 12), "░".repeat(12));
        assert_eq!(score_bar(7.0, 1, 7, 12), "█".repeat(12));
    }

    #[test]
    fn test_score_bar_midpoint() {
        let bar = score_bar(4.0, 1, 7, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
    }

    #[test]
    fn test_bar_width_from_config() {
        let mut config = Config::default();
        config.output.bar_width = Some(24);
        assert_eq!(bar_width(&config), 24);

        config.output.bar_width = Some(0);
        assert_eq!(bar_width(&config), 1);

        config.output.bar_width = None;
        let width = bar_width(&config);
        assert!((MIN_BAR..=MAX_BAR).contains(&width));
    }
}
