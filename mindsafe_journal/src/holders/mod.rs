pub mod entries;

pub use entries::JournalEntryHolder;
