//! Review configuration and shared constants.
//!
//! Scale maxima, display thresholds and the default interval tables live
//! here. Interval tables can be overridden from a `config.toml`.

use chrono::Duration;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::LevelScale;
use crate::error::ScheduleError;

// ==================== Level Scales ====================

/// Highest general vocabulary mastery level (0=new, 5=mastered)
pub const MAX_MASTERY_LEVEL: i32 = 5;

/// Highest flashcard SRS level (0=new, 3=mastered)
pub const MAX_SRS_LEVEL: i32 = 3;

// ==================== Display Thresholds ====================

/// Below this many days the next review is shown relative to now
pub const RELATIVE_DISPLAY_DAYS: i64 = 7;

/// chrono format for reviews further out than `RELATIVE_DISPLAY_DAYS`, e.g. "Oct 29"
pub const CALENDAR_DATE_FORMAT: &str = "%b %d";

// ==================== Review Intervals ====================

/// Minutes until the next review, indexed by mastery level:
/// now, 1 day, 3 days, 1 week, 2 weeks, 30 days
pub const MASTERY_INTERVALS_MINUTES: [i64; 6] = [0, 1_440, 4_320, 10_080, 20_160, 43_200];

/// Minutes until the next review, indexed by SRS level: 1 hour, 1 day, 3 days, 1 week
pub const SRS_INTERVALS_MINUTES: [i64; 4] = [60, 1_440, 4_320, 10_080];

/// Longest interval a config may set (10 years)
pub const MAX_INTERVAL_MINUTES: i64 = 10 * 365 * 1_440;

/// Environment variable pointing at an alternate config file
pub const CONFIG_PATH_ENV: &str = "VOCAB_REVIEW_CONFIG";

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    review: Option<ReviewSection>,
}

#[derive(Debug, Deserialize)]
struct ReviewSection {
    mastery_intervals_minutes: Option<Vec<i64>>,
    srs_intervals_minutes: Option<Vec<i64>>,
}

/// Interval tables used to schedule the next review after an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    pub mastery_intervals_minutes: Vec<i64>,
    pub srs_intervals_minutes: Vec<i64>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            mastery_intervals_minutes: MASTERY_INTERVALS_MINUTES.to_vec(),
            srs_intervals_minutes: SRS_INTERVALS_MINUTES.to_vec(),
        }
    }
}

impl ReviewConfig {
    /// Interval table in minutes for the given scale
    pub fn intervals_minutes(&self, scale: LevelScale) -> &[i64] {
        match scale {
            LevelScale::Mastery => &self.mastery_intervals_minutes,
            LevelScale::Srs => &self.srs_intervals_minutes,
        }
    }

    /// Interval for a level on the given scale. Out-of-range levels use the
    /// nearest table entry; entries are held to `0..=MAX_INTERVAL_MINUTES`.
    pub fn interval_for(&self, scale: LevelScale, level: i32) -> Duration {
        let table = self.intervals_minutes(scale);
        let idx = crate::srs::clamp_srs_level(level, table.len().saturating_sub(1));
        let minutes = table.get(idx).copied().unwrap_or(0).clamp(0, MAX_INTERVAL_MINUTES);
        Duration::minutes(minutes)
    }

    /// Check that each table has one entry per level, each within
    /// `0..=MAX_INTERVAL_MINUTES`.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for scale in [LevelScale::Mastery, LevelScale::Srs] {
            let table = self.intervals_minutes(scale);
            let expected = scale.max_level() as usize + 1;
            if table.len() != expected {
                return Err(ScheduleError::InvalidConfig(format!(
                    "{} intervals need {} entries, got {}",
                    scale.as_str(),
                    expected,
                    table.len()
                )));
            }
            if let Some(bad) = table.iter().find(|m| !(0..=MAX_INTERVAL_MINUTES).contains(*m)) {
                return Err(ScheduleError::InvalidConfig(format!(
                    "{} intervals must be between 0 and {} minutes, got {}",
                    scale.as_str(),
                    MAX_INTERVAL_MINUTES,
                    bad
                )));
            }
        }
        Ok(())
    }
}

/// Resolve the config path: `VOCAB_REVIEW_CONFIG` (also read from .env) > default
pub fn config_path() -> PathBuf {
    let _ = dotenvy::dotenv();
    config_path_from(std::env::var(CONFIG_PATH_ENV).ok())
}

/// Resolve the config path from an already-read `VOCAB_REVIEW_CONFIG` value
pub fn config_path_from(env_value: Option<String>) -> PathBuf {
    match env_value.filter(|p| !p.trim().is_empty()) {
        Some(path) => {
            tracing::info!("Using review config from {} env: {}", CONFIG_PATH_ENV, path);
            PathBuf::from(path)
        }
        None => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

/// Load review config with priority: config file > defaults.
///
/// A missing file is not an error. A file that exists but cannot be read,
/// parsed or validated is.
pub fn load_review_config() -> Result<ReviewConfig, ScheduleError> {
    load_review_config_or_default(&config_path())
}

/// Load `path` if it exists, otherwise fall back to defaults
pub fn load_review_config_or_default(path: &Path) -> Result<ReviewConfig, ScheduleError> {
    if !path.exists() {
        tracing::info!("No review config at {}, using defaults", path.display());
        return Ok(ReviewConfig::default());
    }
    load_review_config_from(path)
}

/// Load review config from a specific file. Sections and keys left out keep
/// their defaults.
pub fn load_review_config_from(path: &Path) -> Result<ReviewConfig, ScheduleError> {
    let path_str = path.display().to_string();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ScheduleError::ConfigIo(path_str.clone(), e.to_string()))?;
    let parsed: AppConfig = toml::from_str(&contents)
        .map_err(|e| ScheduleError::ConfigParse(path_str.clone(), e.to_string()))?;

    let mut config = ReviewConfig::default();
    if let Some(review) = parsed.review {
        if let Some(minutes) = review.mastery_intervals_minutes {
            config.mastery_intervals_minutes = minutes;
        }
        if let Some(minutes) = review.srs_intervals_minutes {
            config.srs_intervals_minutes = minutes;
        }
    }

    if let Err(e) = config.validate() {
        tracing::warn!(path = %path_str, error = %e, "Rejected review config");
        return Err(e);
    }

    tracing::info!(path = %path_str, "Loaded review config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_tables_match_scales() {
        let config = ReviewConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.intervals_minutes(LevelScale::Mastery).len(), 6);
        assert_eq!(config.intervals_minutes(LevelScale::Srs).len(), 4);
    }

    #[test]
    fn test_interval_for_clamps_level() {
        let config = ReviewConfig::default();
        assert_eq!(config.interval_for(LevelScale::Mastery, 0), Duration::zero());
        assert_eq!(config.interval_for(LevelScale::Mastery, 4), Duration::days(14));
        assert_eq!(config.interval_for(LevelScale::Mastery, 99), Duration::days(30));
        assert_eq!(config.interval_for(LevelScale::Srs, 99), Duration::days(7));
        assert_eq!(config.interval_for(LevelScale::Srs, -2), Duration::hours(1));
    }

    #[test]
    fn test_srs_intervals_start_at_one_hour() {
        let config = ReviewConfig::default();
        assert_eq!(config.interval_for(LevelScale::Srs, 0), Duration::hours(1));
        assert_eq!(config.interval_for(LevelScale::Srs, 1), Duration::days(1));
        assert_eq!(config.interval_for(LevelScale::Srs, 2), Duration::days(3));
        assert_eq!(config.interval_for(LevelScale::Srs, 3), Duration::days(7));
    }

    #[test]
    fn test_interval_for_caps_unvalidated_entries() {
        let config = ReviewConfig {
            mastery_intervals_minutes: vec![0, 1, 3, 7, 14, i64::MAX],
            ..ReviewConfig::default()
        };
        assert_eq!(
            config.interval_for(LevelScale::Mastery, 5),
            Duration::minutes(MAX_INTERVAL_MINUTES)
        );
    }

    #[test]
    fn test_load_full_override() {
        let file = write_config(
            r#"
[review]
mastery_intervals_minutes = [0, 60, 1440, 2880, 10080, 20160]
srs_intervals_minutes = [10, 60, 1440, 4320]
"#,
        );
        let config = load_review_config_from(file.path()).unwrap();
        assert_eq!(config.mastery_intervals_minutes, vec![0, 60, 1440, 2880, 10080, 20160]);
        assert_eq!(config.srs_intervals_minutes, vec![10, 60, 1440, 4320]);
    }

    #[test]
    fn test_load_partial_keeps_defaults() {
        let file = write_config("[review]\nsrs_intervals_minutes = [30, 120, 480, 1440]\n");
        let config = load_review_config_from(file.path()).unwrap();
        assert_eq!(config.mastery_intervals_minutes, MASTERY_INTERVALS_MINUTES.to_vec());
        assert_eq!(config.srs_intervals_minutes, vec![30, 120, 480, 1440]);
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let file = write_config("");
        assert_eq!(load_review_config_from(file.path()).unwrap(), ReviewConfig::default());
    }

    #[test]
    fn test_load_wrong_length_rejected() {
        let file = write_config("[review]\nmastery_intervals_minutes = [0, 1, 3]\n");
        let err = load_review_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_negative_interval_rejected() {
        let file = write_config("[review]\nsrs_intervals_minutes = [0, -1, 3, 7]\n");
        let err = load_review_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_huge_interval_rejected() {
        let file = write_config(
            "[review]\nmastery_intervals_minutes = [0, 1, 3, 7, 14, 9223372036854775807]\n",
        );
        let err = load_review_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfig(_)));

        let just_over = format!(
            "[review]\nsrs_intervals_minutes = [60, 1440, 4320, {}]\n",
            MAX_INTERVAL_MINUTES + 1
        );
        let file = write_config(&just_over);
        assert!(matches!(
            load_review_config_from(file.path()),
            Err(ScheduleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_max_interval_accepted() {
        let at_cap = format!(
            "[review]\nsrs_intervals_minutes = [60, 1440, 4320, {}]\n",
            MAX_INTERVAL_MINUTES
        );
        let file = write_config(&at_cap);
        let config = load_review_config_from(file.path()).unwrap();
        assert_eq!(
            config.interval_for(LevelScale::Srs, 3),
            Duration::minutes(MAX_INTERVAL_MINUTES)
        );
    }

    #[test]
    fn test_load_malformed_toml() {
        let file = write_config("[review\nmastery_intervals_minutes = ");
        let err = load_review_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::ConfigParse(_, _)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_review_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ScheduleError::ConfigIo(_, _)));
    }

    // Path resolution and fallback

    #[test]
    fn test_config_path_from_env_value() {
        assert_eq!(
            config_path_from(Some("/etc/vocab/review.toml".to_string())),
            PathBuf::from("/etc/vocab/review.toml")
        );
    }

    #[test]
    fn test_config_path_without_env_is_default() {
        assert_eq!(config_path_from(None), PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(config_path_from(Some("  ".to_string())), PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_env_path_to_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review.toml");
        std::fs::write(&path, "[review]\nsrs_intervals_minutes = [5, 60, 1440, 4320]\n").unwrap();

        let resolved = config_path_from(Some(path.display().to_string()));
        let config = load_review_config_or_default(&resolved).unwrap();
        assert_eq!(config.srs_intervals_minutes, vec![5, 60, 1440, 4320]);
    }

    #[test]
    fn test_env_path_to_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = config_path_from(Some(dir.path().join("absent.toml").display().to_string()));
        assert_eq!(load_review_config_or_default(&resolved).unwrap(), ReviewConfig::default());
    }

    #[test]
    fn test_or_default_still_rejects_bad_file() {
        let file = write_config("[review]\nsrs_intervals_minutes = [1]\n");
        assert!(matches!(
            load_review_config_or_default(file.path()),
            Err(ScheduleError::InvalidConfig(_))
        ));
    }
}
