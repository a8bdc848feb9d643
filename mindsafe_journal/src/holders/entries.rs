use chrono::{DateTime, Days, NaiveDate, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::{JournalError, Result};
use crate::models::{EntryUpdate, JournalEntry, JournalStats};

/// Shared in-memory journal. Cloning yields another handle to the same data.
#[derive(Clone, Default)]
pub struct JournalEntryHolder {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl JournalEntryHolder {
    pub fn new() -> Self {
        JournalEntryHolder {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn add(&self, entry: JournalEntry) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.push(entry);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        Ok(())
    }

    /// All entries, newest first.
    pub async fn get(&self) -> Result<Vec<JournalEntry>> {
        let entries = self.entries.lock().await;
        let mut snapshot = entries.clone();
        snapshot.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(snapshot)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<JournalEntry>> {
        let entries = self.entries.lock().await;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    pub async fn update(&self, id: &str, update: EntryUpdate) -> Result<JournalEntry> {
        let mut entries = self.entries.lock().await;
        let entry = entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| JournalError::EntryNotFound(id.to_string()))?;

        if let Some(content) = update.content {
            entry.content = content;
        }
        if let Some(mood) = update.mood {
            entry.mood = mood;
        }
        if let Some(tags) = update.tags {
            entry.tags = tags;
        }
        entry.updated_at = Some(Utc::now().timestamp_millis());
        Ok(entry.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(JournalError::EntryNotFound(id.to_string()));
        }
        Ok(())
    }

    pub async fn len(&self) -> Result<usize> {
        let entries = self.entries.lock().await;
        Ok(entries.len())
    }

    /// Case-insensitive match on content or any tag, newest first.
    pub async fn search(&self, keyword: &str) -> Result<Vec<JournalEntry>> {
        let needle = keyword.to_lowercase();
        let entries = self.get().await?;
        Ok(entries
            .into_iter()
            .filter(|e| {
                e.content.to_lowercase().contains(&needle)
                    || e.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect())
    }

    pub async fn export_json(&self) -> Result<String> {
        let entries = self.get().await?;
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Replaces the whole journal with the entries in `json`.
    pub async fn import_json(&self, json: &str) -> Result<usize> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(JournalError::InvalidImport(
                "expected a JSON array of entries".to_string(),
            ));
        }
        let imported: Vec<JournalEntry> = serde_json::from_value(value)
            .map_err(|e| JournalError::InvalidImport(e.to_string()))?;
        self.replace(imported).await
    }

    pub async fn replace(&self, new_entries: Vec<JournalEntry>) -> Result<usize> {
        let mut entries = self.entries.lock().await;
        *entries = new_entries;
        Ok(entries.len())
    }

    pub async fn stats(&self) -> Result<JournalStats> {
        self.stats_at(Utc::now().date_naive()).await
    }

    /// Totals and the current streak as seen on `today` (UTC calendar days).
    pub async fn stats_at(&self, today: NaiveDate) -> Result<JournalStats> {
        let entries = self.entries.lock().await;
        if entries.is_empty() {
            return Ok(JournalStats {
                total_entries: 0,
                streak_days: 0,
                oldest_entry: None,
                newest_entry: None,
            });
        }

        let oldest_entry = entries.iter().map(|e| e.timestamp).min();
        let newest_entry = entries.iter().map(|e| e.timestamp).max();
        let days: HashSet<NaiveDate> = entries
            .iter()
            .filter_map(|e| DateTime::from_timestamp_millis(e.timestamp))
            .map(|dt| dt.date_naive())
            .collect();

        Ok(JournalStats {
            total_entries: entries.len(),
            streak_days: streak_ending(&days, today),
            oldest_entry,
            newest_entry,
        })
    }
}

// Consecutive days with entries, counted back from today, or from yesterday
// when nothing was written today.
fn streak_ending(days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut cursor = today;
    if !days.contains(&cursor) {
        match cursor.checked_sub_days(Days::new(1)) {
            Some(yesterday) => cursor = yesterday,
            None => return 0,
        }
    }

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        match cursor.checked_sub_days(Days::new(1)) {
            Some(previous) => cursor = previous,
            None => break,
        }
    }
    streak
}
