use chrono::{DateTime, Duration, Utc};

use crate::config::{CALENDAR_DATE_FORMAT, RELATIVE_DISPLAY_DAYS};
use crate::error::ScheduleError;

/// Human-readable time until the next review.
///
/// - missing or past due: "now"
/// - under an hour: "N min" ("soon" when under a minute)
/// - under a day: "N hrs"
/// - under a week: "1 day" / "N days"
/// - otherwise the calendar date, e.g. "Oct 29"
pub fn describe_next_review(next_review_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
  let next = match next_review_at {
    Some(at) if at > now => at,
    _ => return "now".to_string(),
  };

  let diff = next - now;
  if diff < Duration::hours(1) {
    match diff.num_minutes() {
      0 => "soon".to_string(),
      minutes => format!("{} min", minutes),
    }
  } else if diff < Duration::days(1) {
    format!("{} hrs", diff.num_hours())
  } else if diff < Duration::days(RELATIVE_DISPLAY_DAYS) {
    match diff.num_days() {
      1 => "1 day".to_string(),
      days => format!("{} days", days),
    }
  } else {
    next.format(CALENDAR_DATE_FORMAT).to_string()
  }
}

/// Progress bar value for a level: floor(level * 100 / max_level), in [0, 100].
pub fn mastery_progress_percent(mastery_level: i32, max_level: i32) -> Result<u8, ScheduleError> {
  if max_level <= 0 {
    return Err(ScheduleError::InvalidArgument(format!(
      "max_level must be positive, got {}",
      max_level
    )));
  }

  let level = i64::from(mastery_level.clamp(0, max_level));
  Ok((level * 100 / i64::from(max_level)) as u8)
}

/// Clamp a stored level into `0..=max_index` before indexing label tables.
pub fn clamp_srs_level(level: i32, max_index: usize) -> usize {
  usize::try_from(level).map_or(0, |l| l.min(max_index))
}
