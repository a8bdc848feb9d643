pub mod analysis;
pub mod config;
pub mod demo;
pub mod errors;
pub mod holders;
pub mod lexicon;
pub mod models;
pub mod routers;
pub mod services;
pub mod tokenizer;

pub use analysis::{analyze_entry, analyze_patterns};
pub use config::{load_config, AppConfig};
pub use errors::{JournalError, Result};
pub use holders::JournalEntryHolder;
pub use models::{
    AverageMood, CreatedEntry, Emotion, EmotionScores, EntryUpdate, JournalEntry, JournalStats,
    Mood, MoodBadge, MoodCounts, NewEntry, PatternAnalysis, SentimentMood, SentimentResult, Trend, Trends,
};
pub use services::JournalService;
pub use tokenizer::tokenize;

#[derive(Clone)]
pub struct AppState {
    pub journal: JournalService,
}
