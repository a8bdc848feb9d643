use chrono::NaiveDate;
use mindsafe_journal::*;

fn entry_at(id: &str, mood: &str, date: NaiveDate, content: &str, tags: &[&str]) -> JournalEntry {
    JournalEntry {
        id: id.to_string(),
        content: content.to_string(),
        mood: Mood::from(mood),
        timestamp: date
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        updated_at: None,
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
}

fn test_config() -> AppConfig {
    AppConfig {
        max_entry_length: 200,
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_journal_entry_holder() {
    let holder = JournalEntryHolder::new();

    holder.add(entry_at("a", "happy", day(18), "older", &[])).await.unwrap();
    holder.add(entry_at("b", "sad", day(20), "newer", &[])).await.unwrap();
    assert_eq!(holder.len().await.unwrap(), 2);

    // newest first
    let entries = holder.get().await.unwrap();
    assert_eq!(entries[0].id, "b");
    assert_eq!(entries[1].id, "a");

    let found = holder.get_by_id("a").await.unwrap();
    assert_eq!(found.map(|e| e.mood), Some(Mood::Happy));
    assert!(holder.get_by_id("missing").await.unwrap().is_none());

    holder.clear().await.unwrap();
    assert_eq!(holder.len().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_and_delete() {
    let holder = JournalEntryHolder::new();
    holder.add(entry_at("a", "neutral", day(18), "draft", &[])).await.unwrap();

    let updated = holder
        .update(
            "a",
            EntryUpdate {
                content: Some("final".to_string()),
                mood: Some(Mood::Calm),
                tags: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.content, "final");
    assert_eq!(updated.mood, Mood::Calm);
    assert!(updated.updated_at.is_some());

    assert!(matches!(
        holder.update("missing", EntryUpdate::default()).await,
        Err(JournalError::EntryNotFound(_))
    ));

    holder.delete("a").await.unwrap();
    assert!(matches!(
        holder.delete("a").await,
        Err(JournalError::EntryNotFound(_))
    ));
}

#[tokio::test]
async fn test_search_matches_content_and_tags() {
    let holder = JournalEntryHolder::new();
    holder
        .add(entry_at("a", "happy", day(18), "Hiked with FRIENDS", &[]))
        .await
        .unwrap();
    holder
        .add(entry_at("b", "sad", day(19), "Quiet evening", &["Grief"]))
        .await
        .unwrap();
    holder
        .add(entry_at("c", "calm", day(20), "Tea and a book", &[]))
        .await
        .unwrap();

    let by_content = holder.search("friends").await.unwrap();
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].id, "a");

    let by_tag = holder.search("grief").await.unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, "b");

    assert!(holder.search("nothing like this").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_export_then_import_restores_entries() {
    let holder = JournalEntryHolder::new();
    holder
        .add(entry_at("a", "ecstatic", day(18), "custom mood", &["x"]))
        .await
        .unwrap();
    let exported = holder.export_json().await.unwrap();
    assert!(exported.contains("\"mood\": \"ecstatic\""));

    let other = JournalEntryHolder::new();
    other.add(entry_at("z", "sad", day(1), "to be replaced", &[])).await.unwrap();
    assert_eq!(other.import_json(&exported).await.unwrap(), 1);

    let entries = other.get().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood, Mood::Other("ecstatic".to_string()));
}

#[tokio::test]
async fn test_import_rejects_bad_payloads() {
    let holder = JournalEntryHolder::new();
    assert!(matches!(
        holder.import_json(r#"{"id": "a"}"#).await,
        Err(JournalError::InvalidImport(_))
    ));
    assert!(matches!(
        holder.import_json(r#"[{"id": 1}]"#).await,
        Err(JournalError::InvalidImport(_))
    ));
    assert!(matches!(
        holder.import_json("not json").await,
        Err(JournalError::JsonError(_))
    ));
}

#[test]
fn test_streak_counts_back_from_today() {
    let holder = JournalEntryHolder::new();
    tokio_test::block_on(async {
        for (i, d) in [20, 19, 19, 18, 16].iter().enumerate() {
            holder
                .add(entry_at(&i.to_string(), "neutral", day(*d), "", &[]))
                .await
                .unwrap();
        }

        let stats = holder.stats_at(day(20)).await.unwrap();
        assert_eq!(stats.total_entries, 5);
        assert_eq!(stats.streak_days, 3);
        assert!(stats.oldest_entry < stats.newest_entry);

        // nothing written on the 21st yet, streak continues from yesterday
        assert_eq!(holder.stats_at(day(21)).await.unwrap().streak_days, 3);
        assert_eq!(holder.stats_at(day(22)).await.unwrap().streak_days, 0);
    });
}

#[tokio::test]
async fn test_empty_stats() {
    let stats = JournalEntryHolder::new().stats_at(day(20)).await.unwrap();
    assert_eq!(stats.total_entries, 0);
    assert_eq!(stats.streak_days, 0);
    assert_eq!(stats.oldest_entry, None);
    assert_eq!(stats.newest_entry, None);
}

#[tokio::test]
async fn test_create_entry_uses_analyzer_mood_and_emotion_tags() {
    let service = JournalService::new(JournalEntryHolder::new(), test_config());

    let created = service
        .create_entry(NewEntry {
            content: "I feel sad and anxious and scared".to_string(),
            mood: None,
            tags: vec!["work".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(created.analysis.mood, SentimentMood::Negative);
    assert_eq!(created.entry.mood, Mood::Negative);
    assert_eq!(created.entry.tags, vec!["work", "sadness", "anxiety"]);

    let stored = service.entry(&created.entry.id).await.unwrap();
    assert_eq!(stored, created.entry);
}

#[tokio::test]
async fn test_create_entry_keeps_chosen_mood_and_dedupes_tags() {
    let service = JournalService::new(JournalEntryHolder::new(), test_config());

    let created = service
        .create_entry(NewEntry {
            content: "A happy afternoon in the park".to_string(),
            mood: Some(Mood::Calm),
            tags: vec!["joy".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(created.entry.mood, Mood::Calm);
    assert_eq!(created.entry.tags, vec!["joy"]);
    assert_eq!(created.badge.mood, Mood::Calm);
    assert_eq!(created.badge.emoji, "😌");
}

#[tokio::test]
async fn test_create_entry_validates_content() {
    let service = JournalService::new(JournalEntryHolder::new(), test_config());

    let blank = service
        .create_entry(NewEntry {
            content: "   ".to_string(),
            ..NewEntry::default()
        })
        .await;
    assert!(matches!(blank, Err(JournalError::InvalidEntry(_))));

    let too_long = service
        .create_entry(NewEntry {
            content: "word ".repeat(100),
            ..NewEntry::default()
        })
        .await;
    assert!(matches!(too_long, Err(JournalError::InvalidEntry(_))));

    // twenty characters is not enough to analyze
    let too_short = service
        .create_entry(NewEntry {
            content: "Sad day, happy night".to_string(),
            ..NewEntry::default()
        })
        .await;
    assert!(matches!(too_short, Err(JournalError::InvalidEntry(_))));

    assert_eq!(service.stats().await.unwrap().total_entries, 0);

    let created = service
        .create_entry(NewEntry {
            content: "Sad day, happy night!".to_string(),
            ..NewEntry::default()
        })
        .await
        .unwrap();
    assert_eq!(created.entry.mood, Mood::Mixed);

    let short_edit = service
        .update_entry(
            &created.entry.id,
            EntryUpdate {
                content: Some("too short".to_string()),
                ..EntryUpdate::default()
            },
        )
        .await;
    assert!(matches!(short_edit, Err(JournalError::InvalidEntry(_))));
}

#[tokio::test]
async fn test_analysis_waits_for_configured_delay() {
    let service = JournalService::new(
        JournalEntryHolder::new(),
        AppConfig {
            analysis_delay_ms: Some(30),
            ..test_config()
        },
    );

    let started = std::time::Instant::now();
    let result = service.analyze_text("calm and serene").await.unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_millis(30));
    assert_eq!(result.mood, SentimentMood::Positive);
}

#[tokio::test]
async fn test_insights_over_demo_data() {
    let service = JournalService::new(JournalEntryHolder::new(), test_config());
    assert_eq!(service.load_demo_data().await.unwrap(), 15);

    let insights = service.insights().await.unwrap();
    assert_eq!(insights.total_entries, 15);
    assert_eq!(insights.dominant_mood, Mood::Happy);
    assert_eq!(insights.mood_counts.get(&Mood::Happy), 4);
    assert_eq!(insights.mood_counts.total(), 15);
    assert_eq!(insights.trends.weekly, Trend::Stable);
    assert_eq!(insights.average_mood, AverageMood::Neutral);
    assert!(!insights.needs_support);

    // the demo journal has entries today and on each of the previous days
    assert_eq!(service.stats().await.unwrap().streak_days, 8);
}

#[tokio::test]
async fn test_insights_on_empty_journal() {
    let service = JournalService::new(JournalEntryHolder::new(), test_config());
    let insights = service.insights().await.unwrap();
    assert_eq!(insights.total_entries, 0);
    assert_eq!(
        insights.recommendations,
        vec!["Start journaling to get personalized insights."]
    );
}

#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();

    // defaults are valid
    assert!(config.validate().is_ok());

    config.max_entry_length = 0;
    assert!(config.validate().is_err());

    config.max_entry_length = 200_000;
    assert!(config.validate().is_err());

    config.max_entry_length = 500;
    config.analysis_delay_ms = Some(10_000);
    assert!(config.validate().is_err());

    config.analysis_delay_ms = Some(250);
    assert!(config.validate().is_ok());

    config.min_analysis_length = 500;
    assert!(config.validate().is_err());

    config.min_analysis_length = 0;
    assert!(config.validate().is_ok());

    config.bind_address = " ".to_string();
    assert!(config.validate().is_err());
}
