use crate::models::{
    AverageMood, JournalEntry, Mood, MoodCounts, PatternAnalysis, Trend, Trends,
};

// Number of most recent entries that make up the "week".
const RECENT_WINDOW: usize = 7;
const TREND_THRESHOLD: f64 = 0.3;
const FLUCTUATION_THRESHOLD: f64 = 0.5;
const SUPPORT_MIN_ENTRIES: usize = 3;
const SUPPORT_THRESHOLD: f64 = -0.6;
const AVERAGE_MOOD_THRESHOLD: f64 = 0.3;

const EMPTY_RECOMMENDATION: &str = "Start journaling to get personalized insights.";
const SUPPORT_RECOMMENDATIONS: [&str; 2] = [
    "You've been feeling down lately. Consider reaching out to a friend or professional.",
    "Try a small self-care activity today, like a short walk or deep breathing.",
];
const IMPROVING_RECOMMENDATION: &str = "You're on an upward trend! Keep doing what you're doing.";
const DECLINING_RECOMMENDATION: &str = "It seems like a tough week. Be kind to yourself.";
const STEADY_RECOMMENDATION: &str =
    "Consistency is key. Keep journaling to understand your patterns better.";

/// Aggregates a journal history into trends, mood counts and recommendations.
pub fn analyze_patterns(entries: &[JournalEntry]) -> PatternAnalysis {
    if entries.is_empty() {
        return PatternAnalysis {
            trends: Trends {
                weekly: Trend::Stable,
                monthly: Trend::Stable,
            },
            average_mood: AverageMood::Neutral,
            recommendations: vec![EMPTY_RECOMMENDATION.to_string()],
            needs_support: false,
            total_entries: 0,
            mood_counts: MoodCounts::default(),
            dominant_mood: Mood::Neutral,
        };
    }

    let mood_counts = MoodCounts::tally(entries.iter().map(|e| &e.mood));
    let dominant_mood = mood_counts.dominant().cloned().unwrap_or(Mood::Neutral);

    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let scores: Vec<f64> = sorted.iter().map(|e| f64::from(e.mood.score())).collect();
    let recent_scores = &scores[scores.len().saturating_sub(RECENT_WINDOW)..];
    let avg_score = mean(&scores);
    let recent_avg = mean(recent_scores);

    let weekly = weekly_trend(recent_avg, avg_score);
    let needs_support = recent_scores.len() >= SUPPORT_MIN_ENTRIES && recent_avg < SUPPORT_THRESHOLD;

    let recommendations: Vec<String> = if needs_support {
        SUPPORT_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
    } else {
        let line = match weekly {
            Trend::Improving => IMPROVING_RECOMMENDATION,
            Trend::Declining => DECLINING_RECOMMENDATION,
            Trend::Stable | Trend::Fluctuating => STEADY_RECOMMENDATION,
        };
        vec![line.to_string()]
    };

    let average_mood = if avg_score > AVERAGE_MOOD_THRESHOLD {
        AverageMood::Positive
    } else if avg_score < -AVERAGE_MOOD_THRESHOLD {
        AverageMood::Negative
    } else {
        AverageMood::Neutral
    };

    tracing::debug!(
        total = entries.len(),
        avg_score,
        recent_avg,
        ?weekly,
        needs_support,
        "analyzed patterns"
    );

    PatternAnalysis {
        trends: Trends {
            weekly,
            // not derived from data yet
            monthly: Trend::Stable,
        },
        average_mood,
        recommendations,
        needs_support,
        total_entries: entries.len(),
        mood_counts,
        dominant_mood,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

// Any gap wider than FLUCTUATION_THRESHOLD is already caught by the first two
// branches, so Fluctuating is never produced today.
fn weekly_trend(recent_avg: f64, avg_score: f64) -> Trend {
    if recent_avg > avg_score + TREND_THRESHOLD {
        Trend::Improving
    } else if recent_avg < avg_score - TREND_THRESHOLD {
        Trend::Declining
    } else if (recent_avg - avg_score).abs() > FLUCTUATION_THRESHOLD {
        Trend::Fluctuating
    } else {
        Trend::Stable
    }
}
