pub mod level;
pub mod vocabulary;

pub use level::{LevelScale, ReviewOutcome};
pub use vocabulary::VocabularyItem;
