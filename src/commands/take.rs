//! Interactive questionnaire
//!
//! Questions go to stderr so the results on stdout stay pipeable.

use colored::*;
use eyre::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::inventory::Inventory;
use crate::inventory::loader::Catalog;

pub fn run(inventory: Option<&str>, with_prompt: bool, format: OutputFormat, config: &Config) -> Result<()> {
    let catalog = Catalog::load(config.inventories_dir())?;
    let inventory = super::resolve_inventory(&catalog, inventory, config)?;

    let stdin = io::stdin();
    let responses = collect_answers(inventory, stdin.lock(), io::stderr()).context("Failed to read answers")?;

    super::score::report(inventory, &responses, with_prompt, format, config)
}

/// Ask every item in turn, starting each answer at the scale midpoint.
///
/// A blank line keeps the current answer; end of input keeps all remaining ones.
pub fn collect_answers<R: BufRead, W: Write>(inventory: &Inventory, mut input: R, mut out: W) -> Result<Vec<i32>> {
    let scale = &inventory.scale;
    let total = inventory.items.len();
    let mut responses = vec![scale.midpoint(); total];

    writeln!(out, "{} ({} items)", inventory.name.bold(), total)?;
    writeln!(out, "{}", scale.legend().dimmed())?;
    writeln!(out, "{}", "Press Enter to keep the suggested answer.".dimmed())?;
    writeln!(out)?;

    for (index, item) in inventory.items.iter().enumerate() {
        loop {
            write!(
                out,
                "{} {} {} [{}]: ",
                format!("{}/{}", index + 1, total).dimmed(),
                inventory.stem,
                item.text.bold(),
                responses[index]
            )?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                log::info!("Input closed after {} of {} items; keeping defaults", index, total);
                return Ok(responses);
            }

            let answer = line.trim();
            if answer.is_empty() {
                break;
            }

            match answer.parse::<i32>() {
                Ok(value) if scale.contains(value) => {
                    responses[index] = value;
                    break;
                }
                Ok(value) => {
                    writeln!(
                        out,
                        "  {} {} is outside the {}-{} scale",
                        "✗".red(),
                        value,
                        scale.min(),
                        scale.max
                    )?;
                }
                Err(_) => {
                    writeln!(
                        out,
                        "  {} '{}' is not a number between {} and {}",
                        "✗".red(),
                        answer,
                        scale.min(),
                        scale.max
                    )?;
                }
            }
        }
    }

    writeln!(out)?;
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::builtin;
    use std::io::Cursor;

    fn run_with(input: &str) -> (Vec<i32>, String) {
        let inv = builtin::get("tipi").unwrap();
        let mut out = Vec::new();
        let responses = collect_answers(inv, Cursor::new(input.as_bytes()), &mut out).unwrap();
        (responses, String::from_utf8_lossy(&out).to_string())
    }

    #[test]
    fn test_collect_all_answers() {
        let (responses, _) = run_with("7\n1\n6\n2\n5\n3\n4\n4\n7\n1\n");
        assert_eq!(responses, vec![7, 1, 6, 2, 5, 3, 4, 4, 7, 1]);
    }

    #[test]
    fn test_blank_keeps_midpoint() {
        let (responses, _) = run_with("\n\n\n\n\n\n\n\n\n7\n");
        assert_eq!(responses, vec![4, 4, 4, 4, 4, 4, 4, 4, 4, 7]);
    }

    #[test]
    fn test_invalid_answers_are_asked_again() {
        let (responses, output) = run_with("9\nabc\n6\n");
        assert_eq!(responses[0], 6);
        assert!(output.contains("9 is outside the 1-7 scale"));
        assert!(output.contains("'abc' is not a number between 1 and 7"));
    }

    #[test]
    fn test_eof_keeps_remaining_defaults() {
        let (responses, output) = run_with("2\n3\n");
        assert_eq!(responses, vec![2, 3, 4, 4, 4, 4, 4, 4, 4, 4]);
        assert!(output.contains("Extraverted, enthusiastic"));
    }
}
