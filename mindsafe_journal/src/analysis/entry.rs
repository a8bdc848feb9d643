use chrono::Utc;

use crate::lexicon::{is_negative, is_positive};
use crate::models::{Emotion, EmotionScores, SentimentMood, SentimentResult};
use crate::tokenizer::tokenize;

const EMPTY_INSIGHT: &str = "Start writing to see insights.";

// Short texts are scored as if they had at least this many tokens.
const MIN_INTENSITY_DENOMINATOR: usize = 5;

/// Classifies a single journal entry.
pub fn analyze_entry(text: &str) -> SentimentResult {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return SentimentResult {
            mood: SentimentMood::Neutral,
            intensity: 0.0,
            confidence: 0.0,
            emotions: EmotionScores::default(),
            insight: EMPTY_INSIGHT.to_string(),
            timestamp: Utc::now().timestamp_millis(),
        };
    }

    let mut pos_count = 0usize;
    let mut neg_count = 0usize;
    let mut emotions = EmotionScores::default();

    for token in &tokens {
        if is_positive(token) {
            pos_count += 1;
        }
        if is_negative(token) {
            neg_count += 1;
        }
        for emotion in Emotion::ALL {
            if emotion.matches(token) {
                emotions.increment(emotion);
            }
        }
    }

    let mood = classify_mood(pos_count, neg_count);

    let total_words = tokens.len();
    let intensity = ((pos_count + neg_count) as f64
        / total_words.max(MIN_INTENSITY_DENOMINATOR) as f64)
        .min(1.0);
    let confidence = ((total_words as f64 / 10.0) * (intensity + 0.5)).min(1.0);

    let dominant = emotions.dominant();
    tracing::debug!(
        tokens = total_words,
        pos_count,
        neg_count,
        ?mood,
        ?dominant,
        "analyzed entry"
    );

    SentimentResult {
        mood,
        intensity,
        confidence,
        emotions,
        insight: insight_for(mood, dominant, intensity).to_string(),
        timestamp: Utc::now().timestamp_millis(),
    }
}

fn classify_mood(pos_count: usize, neg_count: usize) -> SentimentMood {
    if pos_count > neg_count && pos_count > 0 {
        SentimentMood::Positive
    } else if neg_count > pos_count && neg_count > 0 {
        SentimentMood::Negative
    } else if pos_count > 0 && neg_count > 0 && pos_count == neg_count {
        SentimentMood::Mixed
    } else {
        SentimentMood::Neutral
    }
}

fn insight_for(mood: SentimentMood, dominant: Option<Emotion>, intensity: f64) -> &'static str {
    match mood {
        SentimentMood::Positive => match dominant {
            Some(Emotion::Peace) => "You seem to be in a good place. Cherish this calm.",
            _ => "It's great to see you feeling positive! Hold onto this energy.",
        },
        SentimentMood::Negative if intensity > 0.7 => {
            "It sounds like you're going through a really tough time. Be gentle with yourself."
        }
        SentimentMood::Negative => match dominant {
            Some(Emotion::Anxiety) => {
                "Anxiety can be overwhelming. Remember to breathe and take it one step at a time."
            }
            Some(Emotion::Anger) => {
                "It's okay to feel angry. Try to channel that energy into something constructive or let it out safely."
            }
            Some(Emotion::Sadness) => "Sorrow is a heavy burden. It's okay to not be okay right now.",
            Some(Emotion::Joy) | Some(Emotion::Peace) | None => {
                "Things seem difficult right now. Remember that this feeling is temporary."
            }
        },
        SentimentMood::Mixed => "You're experiencing a mix of emotions. It's complex, just like life.",
        SentimentMood::Neutral => "A neutral day is a steady day. Keep moving forward.",
    }
}
