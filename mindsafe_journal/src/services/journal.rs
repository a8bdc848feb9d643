use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

use crate::analysis::{analyze_entry, analyze_patterns};
use crate::config::AppConfig;
use crate::demo::demo_entries;
use crate::errors::{JournalError, Result};
use crate::holders::JournalEntryHolder;
use crate::models::{
    CreatedEntry, EntryUpdate, JournalEntry, JournalStats, Mood, MoodBadge, NewEntry,
    PatternAnalysis, SentimentResult,
};

#[derive(Clone)]
pub struct JournalService {
    entry_holder: JournalEntryHolder,
    config: AppConfig,
}

impl JournalService {
    pub fn new(entry_holder: JournalEntryHolder, config: AppConfig) -> Self {
        JournalService {
            entry_holder,
            config,
        }
    }

    /// Analyzes and saves a new entry, tagging it with the emotions found.
    pub async fn create_entry(&self, new_entry: NewEntry) -> Result<CreatedEntry> {
        self.validate_content(&new_entry.content)?;

        let analysis = self.analyze_text(&new_entry.content).await?;
        let mood = new_entry.mood.unwrap_or_else(|| Mood::from(analysis.mood));

        let mut tags = new_entry.tags;
        for emotion in analysis.emotions.present() {
            if !tags.iter().any(|t| t == emotion.as_str()) {
                tags.push(emotion.as_str().to_string());
            }
        }

        let now = Utc::now().timestamp_millis();
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            content: new_entry.content,
            mood,
            timestamp: now,
            tags,
            updated_at: Some(now),
        };
        self.entry_holder.add(entry.clone()).await?;

        tracing::info!("Saved entry {} with mood {}", entry.id, entry.mood);
        let badge = MoodBadge::from(&entry.mood);
        Ok(CreatedEntry {
            entry,
            analysis,
            badge,
        })
    }

    /// Runs the entry analyzer on the blocking pool.
    pub async fn analyze_text(&self, text: &str) -> Result<SentimentResult> {
        if let Some(delay) = self.config.analysis_delay_ms.filter(|d| *d > 0) {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let text = text.to_string();
        let result = tokio::task::spawn_blocking(move || analyze_entry(&text)).await?;
        tracing::debug!("Entry analyzed as {:?}", result.mood);
        Ok(result)
    }

    pub async fn insights(&self) -> Result<PatternAnalysis> {
        let entries = self.entry_holder.get().await?;
        let analysis = analyze_patterns(&entries);
        tracing::info!(
            "Computed insights over {} entries (weekly trend {:?})",
            analysis.total_entries,
            analysis.trends.weekly
        );
        Ok(analysis)
    }

    pub async fn stats(&self) -> Result<JournalStats> {
        self.entry_holder.stats().await
    }

    pub async fn entries(&self, query: Option<&str>) -> Result<Vec<JournalEntry>> {
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(keyword) => self.entry_holder.search(keyword).await,
            None => self.entry_holder.get().await,
        }
    }

    pub async fn entry(&self, id: &str) -> Result<JournalEntry> {
        self.entry_holder
            .get_by_id(id)
            .await?
            .ok_or_else(|| JournalError::EntryNotFound(id.to_string()))
    }

    pub async fn update_entry(&self, id: &str, update: EntryUpdate) -> Result<JournalEntry> {
        if let Some(content) = &update.content {
            self.validate_content(content)?;
        }
        let entry = self.entry_holder.update(id, update).await?;
        tracing::info!("Updated entry {}", id);
        Ok(entry)
    }

    pub async fn delete_entry(&self, id: &str) -> Result<()> {
        self.entry_holder.delete(id).await?;
        tracing::info!("Deleted entry {}", id);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        self.entry_holder.clear().await?;
        tracing::info!("Cleared all entries");
        Ok(())
    }

    pub async fn export(&self) -> Result<String> {
        self.entry_holder.export_json().await
    }

    pub async fn import(&self, json: &str) -> Result<usize> {
        let count = self.entry_holder.import_json(json).await?;
        tracing::info!("Imported {} entries", count);
        Ok(count)
    }

    pub async fn load_demo_data(&self) -> Result<usize> {
        let entries = demo_entries(Utc::now().timestamp_millis());
        let count = self.entry_holder.replace(entries).await?;
        tracing::info!("Loaded {} demo entries", count);
        Ok(count)
    }

    fn validate_content(&self, content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(JournalError::InvalidEntry("content cannot be empty".to_string()));
        }
        let length = content.chars().count();
        if length <= self.config.min_analysis_length {
            return Err(JournalError::InvalidEntry(format!(
                "content is {} characters, needs more than {}",
                length, self.config.min_analysis_length
            )));
        }
        if length > self.config.max_entry_length {
            return Err(JournalError::InvalidEntry(format!(
                "content is {} characters, limit is {}",
                length, self.config.max_entry_length
            )));
        }
        Ok(())
    }
}
