pub mod schedule;
pub mod tracker;

pub use schedule::{next_level, next_review_after, record_review, ReviewResult};
pub use tracker::{clamp_srs_level, describe_next_review, mastery_progress_percent};
