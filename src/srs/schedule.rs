use chrono::{DateTime, Duration, Utc};

use crate::config::ReviewConfig;
use crate::domain::{LevelScale, ReviewOutcome, VocabularyItem};
use crate::error::ScheduleError;

/// Result of applying one review outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewResult {
  pub mastery_level: i32,
  pub interval: Duration,
  pub next_review_at: DateTime<Utc>,
}

/// Level after an outcome: correct steps up to the scale max, incorrect steps
/// down to 0. Stored levels outside the scale are clamped first.
pub fn next_level(scale: LevelScale, level: i32, outcome: ReviewOutcome) -> i32 {
  let level = level.clamp(0, scale.max_level());
  match outcome {
    ReviewOutcome::Correct => (level + 1).min(scale.max_level()),
    ReviewOutcome::Incorrect => (level - 1).max(0),
  }
}

/// When a word reviewed at `reviewed_at` at `level` comes due again.
///
/// Fails if the result falls outside chrono's representable range.
pub fn next_review_after(
  scale: LevelScale,
  level: i32,
  reviewed_at: DateTime<Utc>,
  config: &ReviewConfig,
) -> Result<DateTime<Utc>, ScheduleError> {
  let interval = config.interval_for(scale, level);
  reviewed_at.checked_add_signed(interval).ok_or_else(|| {
    ScheduleError::InvalidArgument(format!(
      "next review {} + {} minutes is out of range",
      reviewed_at,
      interval.num_minutes()
    ))
  })
}

/// Apply a review outcome to an item, updating level, stats and schedule.
///
/// On error the item is left unchanged.
pub fn record_review(
  item: &mut VocabularyItem,
  outcome: ReviewOutcome,
  now: DateTime<Utc>,
  config: &ReviewConfig,
) -> Result<ReviewResult, ScheduleError> {
  let level = next_level(item.scale, item.mastery_level, outcome);
  let interval = config.interval_for(item.scale, level);
  let next_review_at = next_review_after(item.scale, level, now, config)?;

  item.mastery_level = level;
  item.review_count = item.review_count.saturating_add(1);
  if outcome.is_correct() {
    item.correct_count = item.correct_count.saturating_add(1);
  } else {
    item.incorrect_count = item.incorrect_count.saturating_add(1);
  }
  item.last_reviewed_at = Some(now);
  item.next_review_at = Some(next_review_at);

  tracing::debug!(
    word_id = %item.id,
    outcome = outcome.as_str(),
    new_level = level,
    interval_minutes = interval.num_minutes(),
    "Recorded review"
  );

  Ok(ReviewResult {
    mastery_level: level,
    interval,
    next_review_at,
  })
}
