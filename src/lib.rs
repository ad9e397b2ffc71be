//! Spaced repetition review scheduling for vocabulary learning.
//!
//! Derives display values (next review text, progress percentage, level
//! labels) from a word's level and next review time, and applies review
//! outcomes using a mastery-based interval table.

pub mod config;
pub mod domain;
pub mod error;
pub mod srs;

pub use domain::{LevelScale, ReviewOutcome, VocabularyItem};
pub use error::ScheduleError;
