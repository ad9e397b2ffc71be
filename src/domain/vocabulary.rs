use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::LevelScale;
use crate::srs::{describe_next_review, mastery_progress_percent};

/// A learner's progress on one word.
///
/// Level and schedule are owned by the progress-tracking side; this crate
/// only derives display values from them and applies review outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
  pub id: String,
  pub word: String,
  #[serde(default)]
  pub scale: LevelScale,
  #[serde(default)]
  pub mastery_level: i32,
  /// None means never scheduled, which is due now
  #[serde(default)]
  pub next_review_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub last_reviewed_at: Option<DateTime<Utc>>,

  // Stats
  #[serde(default)]
  pub review_count: u32,
  #[serde(default)]
  pub correct_count: u32,
  #[serde(default)]
  pub incorrect_count: u32,
}

impl VocabularyItem {
  pub fn new(id: String, word: String, scale: LevelScale) -> Self {
    Self {
      id,
      word,
      scale,
      mastery_level: 0,
      next_review_at: None,
      last_reviewed_at: None,
      review_count: 0,
      correct_count: 0,
      incorrect_count: 0,
    }
  }

  /// Level clamped into the scale's range
  pub fn display_level(&self) -> i32 {
    self.mastery_level.clamp(0, self.scale.max_level())
  }

  pub fn label(&self) -> &'static str {
    self.scale.label_for(self.mastery_level)
  }

  pub fn progress_percent(&self) -> u8 {
    // Scale maxima are positive constants, so this never errors.
    mastery_progress_percent(self.mastery_level, self.scale.max_level()).unwrap_or_default()
  }

  pub fn describe_next_review(&self, now: DateTime<Utc>) -> String {
    describe_next_review(self.next_review_at, now)
  }

  /// Due when never scheduled or scheduled at or before `now`
  pub fn needs_review(&self, now: DateTime<Utc>) -> bool {
    self.next_review_at.is_none_or(|at| at <= now)
  }

  /// Percentage of reviews answered correctly, 0 before the first review
  pub fn accuracy_percent(&self) -> u8 {
    if self.review_count == 0 {
      return 0;
    }
    let pct = u64::from(self.correct_count) * 100 / u64::from(self.review_count);
    pct.min(100) as u8
  }
}
