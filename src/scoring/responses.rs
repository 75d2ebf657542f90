//! Reading answer vectors from the command line and from files

use eyre::{Context, Result};
use lazy_regex::regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::ScoreError;

/// Parse "7,1 4;3" style answer lists
pub fn parse_answers(input: &str) -> Result<Vec<i32>, ScoreError> {
    regex!(r"[\s,;]+")
        .split(input.trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse::<i32>().map_err(|_| ScoreError::NotANumber(token.to_string())))
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    List(Vec<i32>),
    Wrapped { responses: Vec<i32> },
}

/// Load answers from a YAML or JSON file holding a list or a `responses:` list
pub fn load_answers(path: &Path) -> Result<Vec<i32>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read answers file: {}", path.display()))?;

    let parsed: AnswerFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse answers file: {} (expected a list of numbers)", path.display()))?;

    Ok(match parsed {
        AnswerFile::List(responses) | AnswerFile::Wrapped { responses } => responses,
    })
}
