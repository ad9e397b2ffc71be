use serde::{Deserialize, Serialize};

use crate::config::{MAX_MASTERY_LEVEL, MAX_SRS_LEVEL};
use crate::srs::clamp_srs_level;

const MASTERY_LABELS: [&str; 6] = ["New", "Learning", "Familiar", "Known", "Well Known", "Mastered"];
const SRS_LABELS: [&str; 4] = ["New", "Learning", "Reviewing", "Mastered"];

/// Which level scale a word is tracked on.
///
/// General vocabulary uses mastery 0-5, flashcards use SRS stages 0-3.
/// The two are kept independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LevelScale {
  #[default]
  Mastery,
  Srs,
}

impl LevelScale {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Mastery => "mastery",
      Self::Srs => "srs",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "mastery" => Some(Self::Mastery),
      "srs" => Some(Self::Srs),
      _ => None,
    }
  }

  pub fn max_level(&self) -> i32 {
    match self {
      Self::Mastery => MAX_MASTERY_LEVEL,
      Self::Srs => MAX_SRS_LEVEL,
    }
  }

  pub fn labels(&self) -> &'static [&'static str] {
    match self {
      Self::Mastery => &MASTERY_LABELS,
      Self::Srs => &SRS_LABELS,
    }
  }

  /// Display label for a stored level, clamped into range
  pub fn label_for(&self, level: i32) -> &'static str {
    let labels = self.labels();
    labels[clamp_srs_level(level, labels.len() - 1)]
  }
}

/// Result of a single review as reported by the grading side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
  Correct,
  Incorrect,
}

impl ReviewOutcome {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Correct => "correct",
      Self::Incorrect => "incorrect",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "correct" => Some(Self::Correct),
      "incorrect" => Some(Self::Incorrect),
      _ => None,
    }
  }

  pub fn is_correct(&self) -> bool {
    matches!(self, Self::Correct)
  }
}
