//! Likert scales and category thresholds

use serde::{Deserialize, Serialize};

/// Lowest point on every Likert scale
pub const SCALE_MIN: i32 = 1;

/// Largest scale an inventory may declare
pub const SCALE_MAX_POINTS: i32 = 100;

/// Threshold anchors for a 7-point scale; other scales are derived from these
const ANCHOR_POINTS: f64 = 7.0;
const ANCHOR_LOW: f64 = 4.0;
const ANCHOR_HIGH: f64 = 5.5;

/// A 1..=max agreement scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertScale {
    /// Top value of the scale (7 for TIPI, 5 for BFI-44)
    pub max: i32,

    /// Legend text, one entry per point starting at 1
    #[serde(default)]
    pub labels: Vec<String>,
}

impl LikertScale {
    pub fn new(max: i32, labels: &[&str]) -> Self {
        Self {
            max,
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn min(&self) -> i32 {
        SCALE_MIN
    }

    pub fn contains(&self, value: i32) -> bool {
        (SCALE_MIN..=self.max).contains(&value)
    }

    /// Reverse-code a response so higher always means more of the trait
    pub fn reverse(&self, value: i32) -> i32 {
        (self.max + 1) - value
    }

    /// The neutral answer used to pre-fill an unanswered form
    pub fn midpoint(&self) -> i32 {
        (SCALE_MIN + self.max) / 2
    }

    pub fn label(&self, value: i32) -> Option<&str> {
        if !self.contains(value) {
            return None;
        }
        self.labels.get((value - SCALE_MIN) as usize).map(String::as_str)
    }

    /// One-line legend such as "1 = Disagree strongly, ..., 7 = Agree strongly"
    pub fn legend(&self) -> String {
        if self.labels.is_empty() {
            return format!("{} = lowest agreement, {} = highest agreement", SCALE_MIN, self.max);
        }
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{} = {}", i as i32 + SCALE_MIN, label))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Cut points between the four narrative categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Thresholds {
    /// Thresholds for a scale, scaled from the 7-point anchors and rounded to two decimals
    pub fn for_scale(scale: &LikertScale) -> Self {
        let ratio = scale.max as f64 / ANCHOR_POINTS;
        Self {
            low: round2(ANCHOR_LOW * ratio),
            high: round2(ANCHOR_HIGH * ratio),
        }
    }

    pub fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
