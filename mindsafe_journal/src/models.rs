use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Mood label attached to a journal entry.
///
/// Covers both the coarse analyzer vocabulary (`positive`, `negative`,
/// `neutral`, `mixed`) and the finer moods picked in the UI. Unknown labels
/// coming from imported data are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Joy,
    Excited,
    Calm,
    Peace,
    Neutral,
    Sad,
    Depressed,
    Grief,
    Anxious,
    Nervous,
    Fear,
    Angry,
    Frustrated,
    Positive,
    Negative,
    Mixed,
    Other(String),
}

impl Mood {
    pub fn as_str(&self) -> &str {
        match self {
            Mood::Happy => "happy",
            Mood::Joy => "joy",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Peace => "peace",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Depressed => "depressed",
            Mood::Grief => "grief",
            Mood::Anxious => "anxious",
            Mood::Nervous => "nervous",
            Mood::Fear => "fear",
            Mood::Angry => "angry",
            Mood::Frustrated => "frustrated",
            Mood::Positive => "positive",
            Mood::Negative => "negative",
            Mood::Mixed => "mixed",
            Mood::Other(name) => name,
        }
    }

    /// Trend score: +1 for uplifting moods, -1 for distressed ones, 0 otherwise.
    pub fn score(&self) -> i32 {
        match self {
            Mood::Happy | Mood::Joy | Mood::Excited | Mood::Calm | Mood::Peace | Mood::Positive => 1,
            Mood::Sad
            | Mood::Depressed
            | Mood::Grief
            | Mood::Anxious
            | Mood::Fear
            | Mood::Angry
            | Mood::Negative => -1,
            Mood::Neutral | Mood::Nervous | Mood::Frustrated | Mood::Mixed | Mood::Other(_) => 0,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Joy => "😄",
            Mood::Excited => "🤩",
            Mood::Calm => "😌",
            Mood::Peace => "☮️",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Depressed => "😢",
            Mood::Anxious => "😰",
            Mood::Nervous => "😬",
            Mood::Angry => "😠",
            Mood::Frustrated => "😤",
            Mood::Positive => "🙂",
            Mood::Negative => "🙁",
            Mood::Mixed => "🤔",
            Mood::Grief | Mood::Fear | Mood::Other(_) => "😶",
        }
    }

    /// Hex color used for mood badges.
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Happy | Mood::Joy | Mood::Positive => "#F59E0B",
            Mood::Calm | Mood::Peace => "#10B981",
            Mood::Neutral => "#94A3B8",
            Mood::Sad | Mood::Depressed | Mood::Negative => "#64748B",
            Mood::Anxious | Mood::Nervous => "#8B5CF6",
            Mood::Angry => "#EF4444",
            Mood::Mixed => "#F472B6",
            Mood::Excited | Mood::Grief | Mood::Fear | Mood::Frustrated | Mood::Other(_) => "#CBD5E1",
        }
    }
}

impl From<String> for Mood {
    fn from(value: String) -> Self {
        match value.as_str() {
            "happy" => Mood::Happy,
            "joy" => Mood::Joy,
            "excited" => Mood::Excited,
            "calm" => Mood::Calm,
            "peace" => Mood::Peace,
            "neutral" => Mood::Neutral,
            "sad" => Mood::Sad,
            "depressed" => Mood::Depressed,
            "grief" => Mood::Grief,
            "anxious" => Mood::Anxious,
            "nervous" => Mood::Nervous,
            "fear" => Mood::Fear,
            "angry" => Mood::Angry,
            "frustrated" => Mood::Frustrated,
            "positive" => Mood::Positive,
            "negative" => Mood::Negative,
            "mixed" => Mood::Mixed,
            _ => Mood::Other(value),
        }
    }
}

impl From<&str> for Mood {
    fn from(value: &str) -> Self {
        Mood::from(value.to_string())
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub mood: Mood,
    pub timestamp: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Payload for creating an entry. `mood` falls back to the analyzer's verdict.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEntry {
    pub content: String,
    pub mood: Option<Mood>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryUpdate {
    pub content: Option<String>,
    pub mood: Option<Mood>,
    pub tags: Option<Vec<String>>,
}

/// Coarse mood produced by the entry analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentMood {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl From<SentimentMood> for Mood {
    fn from(mood: SentimentMood) -> Self {
        match mood {
            SentimentMood::Positive => Mood::Positive,
            SentimentMood::Negative => Mood::Negative,
            SentimentMood::Neutral => Mood::Neutral,
            SentimentMood::Mixed => Mood::Mixed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anxiety,
    Anger,
    Peace,
}

impl Emotion {
    /// Declared order; dominant-emotion ties resolve to the earliest entry.
    pub const ALL: [Emotion; 5] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anxiety,
        Emotion::Anger,
        Emotion::Peace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anxiety => "anxiety",
            Emotion::Anger => "anger",
            Emotion::Peace => "peace",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: u32,
    pub sadness: u32,
    pub anxiety: u32,
    pub anger: u32,
    pub peace: u32,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> u32 {
        match emotion {
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
            Emotion::Anxiety => self.anxiety,
            Emotion::Anger => self.anger,
            Emotion::Peace => self.peace,
        }
    }

    pub fn increment(&mut self, emotion: Emotion) {
        let slot = match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anxiety => &mut self.anxiety,
            Emotion::Anger => &mut self.anger,
            Emotion::Peace => &mut self.peace,
        };
        *slot += 1;
    }

    /// Emotion with the strictly highest count, or `None` when all are zero.
    pub fn dominant(&self) -> Option<Emotion> {
        let mut dominant = None;
        let mut max_count = 0;
        for emotion in Emotion::ALL {
            let count = self.get(emotion);
            if count > max_count {
                max_count = count;
                dominant = Some(emotion);
            }
        }
        dominant
    }

    pub fn present(&self) -> impl Iterator<Item = Emotion> + '_ {
        Emotion::ALL.into_iter().filter(|e| self.get(*e) > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub mood: SentimentMood,
    pub intensity: f64,  // 0.0 to 1.0
    pub confidence: f64, // 0.0 to 1.0
    pub emotions: EmotionScores,
    pub insight: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    Fluctuating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trends {
    pub weekly: Trend,
    pub monthly: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageMood {
    Positive,
    Negative,
    Neutral,
}

/// Mood tally that remembers the order in which moods were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodCounts(Vec<(Mood, usize)>);

impl MoodCounts {
    pub fn tally<'a>(moods: impl IntoIterator<Item = &'a Mood>) -> Self {
        let mut counts = MoodCounts::default();
        for mood in moods {
            counts.increment(mood);
        }
        counts
    }

    pub fn increment(&mut self, mood: &Mood) {
        match self.0.iter_mut().find(|(m, _)| m == mood) {
            Some((_, count)) => *count += 1,
            None => self.0.push((mood.clone(), 1)),
        }
    }

    pub fn get(&self, mood: &Mood) -> usize {
        self.0
            .iter()
            .find(|(m, _)| m == mood)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Mood, usize)> {
        self.0.iter().map(|(m, c)| (m, *c))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, c)| c).sum()
    }

    /// Most frequent mood; ties go to the mood seen first.
    pub fn dominant(&self) -> Option<&Mood> {
        let mut dominant = None;
        let mut max_count = 0;
        for (mood, count) in &self.0 {
            if *count > max_count {
                max_count = *count;
                dominant = Some(mood);
            }
        }
        dominant
    }
}

impl Serialize for MoodCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (mood, count) in &self.0 {
            map.serialize_entry(mood.as_str(), count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    pub trends: Trends,
    pub average_mood: AverageMood,
    pub recommendations: Vec<String>,
    pub needs_support: bool,
    pub total_entries: usize,
    pub mood_counts: MoodCounts,
    pub dominant_mood: Mood,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalStats {
    pub total_entries: usize,
    pub streak_days: u32,
    pub oldest_entry: Option<i64>,
    pub newest_entry: Option<i64>,
}

/// Display hints for a mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodBadge {
    pub mood: Mood,
    pub emoji: &'static str,
    pub color: &'static str,
}

impl From<&Mood> for MoodBadge {
    fn from(mood: &Mood) -> Self {
        MoodBadge {
            mood: mood.clone(),
            emoji: mood.emoji(),
            color: mood.color(),
        }
    }
}

/// A freshly saved entry together with the analysis that labelled it.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedEntry {
    pub entry: JournalEntry,
    pub analysis: SentimentResult,
    pub badge: MoodBadge,
}
