use thiserror::Error;

use crate::inventory::narrative::Category;
use crate::inventory::traits::Trait;

/// Errors raised while scoring a submission
#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid input: expected {expected} responses, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid input: response {value} to item {item} is outside the {min}-{max} scale")]
    OutOfRange { item: usize, value: i32, min: i32, max: i32 },

    #[error("invalid input: '{0}' is not a whole number")]
    NotANumber(String),

    #[error("missing narrative for {trait_} ({category})")]
    MissingNarrative { trait_: Trait, category: Category },
}

impl ScoreError {
    /// True for errors caused by the submitted answers rather than the inventory data
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, ScoreError::MissingNarrative { .. })
    }
}
