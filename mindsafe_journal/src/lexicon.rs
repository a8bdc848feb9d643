//! Static word lists used by the entry analyzer.
//!
//! The positive and negative sets are not required to be disjoint: a token is
//! tested against each one independently. Emotion keyword lists overlap both.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::models::Emotion;

const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "delight", "love", "wonderful", "fantastic", "great", "good", "excellent",
    "amazing", "peace", "calm", "serene", "tranquil", "relaxed", "content", "satisfied",
    "grateful", "thankful", "hope", "optimistic", "excited", "enthusiastic", "inspired",
    "motivated", "proud", "accomplished", "confident", "strong", "capable", "brave",
    "courageous", "safe", "secure", "supported", "loved", "appreciated", "valued", "precious",
    "beautiful", "lovely", "charming", "radiant", "bright", "sunny", "warm", "cozy",
    "comfortable", "refreshing", "renewed", "energized", "alive", "vibrant", "thriving",
    "growing", "learning", "improving", "better", "best", "success", "victory", "win",
    "achievement", "progress", "forward", "upward", "light", "clarity", "understanding",
    "wisdom", "insight", "creative", "productive", "flow", "easy", "smooth", "grace", "kind",
    "gentle", "compassionate", "forgiving", "accepting", "open", "free", "liberated", "fun",
    "laugh", "smile", "humor", "play", "enjoy", "pleasure", "bliss", "ecstasy", "euphoria",
    "harmony", "balance", "connection", "unity", "friend", "family", "together", "share",
    "give", "help", "serve", "contribute", "meaning", "purpose", "worth", "lucky",
    "fortunate", "blessed", "miracle", "magic", "wonder", "awe", "sublime", "divine", "spirit",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "unhappy", "depressed", "gloomy", "miserable", "sorrow", "grief", "cry", "tears",
    "pain", "hurt", "ache", "suffer", "agony", "torment", "torture", "bad", "terrible", "awful",
    "horrible", "dreadful", "worst", "failure", "lose", "defeat", "mistake", "error", "wrong",
    "guilt", "shame", "regret", "sorry", "apology", "fault", "blame", "angry", "mad",
    "furious", "rage", "hate", "dislike", "resent", "jealous", "envy", "bitter", "frustrated",
    "annoyed", "irritated", "bothered", "stress", "tense", "pressure", "overwhelmed",
    "burden", "heavy", "tired", "exhausted", "drained", "fatigue", "weary", "weak", "sick",
    "ill", "nausea", "dizzy", "headache", "anxious", "nervous", "scared", "afraid", "fear",
    "terror", "panic", "worry", "concern", "doubt", "uncertain", "confused", "lost", "alone",
    "lonely", "isolated", "rejected", "abandoned", "ignored", "neglected", "empty", "hollow",
    "numb", "dead", "dark", "cold", "frozen", "stuck", "trapped", "helpless", "hopeless",
    "despair", "useless", "worthless", "stupid", "idiot", "fool", "crazy", "insane",
    "madness", "chaos", "mess", "disaster", "crisis", "problem", "trouble", "conflict",
    "fight", "argue", "enemy", "threat",
];

const JOY_KEYWORDS: &[&str] = &[
    "happy", "joy", "excited", "delight", "wonderful", "amazing", "great", "love", "laugh",
    "smile",
];

const SADNESS_KEYWORDS: &[&str] = &[
    "sad", "cry", "grief", "sorrow", "depressed", "gloomy", "miserable", "lonely", "miss",
    "heartbroken",
];

const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious", "worry", "nervous", "scared", "afraid", "fear", "panic", "stress",
    "overwhelmed", "tense",
];

const ANGER_KEYWORDS: &[&str] = &[
    "angry", "mad", "furious", "rage", "hate", "resent", "annoyed", "irritated", "frustrated",
    "bitter",
];

const PEACE_KEYWORDS: &[&str] = &[
    "calm", "peace", "relaxed", "serene", "tranquil", "quiet", "still", "balance", "harmony",
    "content",
];

static POSITIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| POSITIVE_WORDS.iter().copied().collect());
static NEGATIVE: Lazy<HashSet<&'static str>> = Lazy::new(|| NEGATIVE_WORDS.iter().copied().collect());

pub fn is_positive(token: &str) -> bool {
    POSITIVE.contains(token)
}

pub fn is_negative(token: &str) -> bool {
    NEGATIVE.contains(token)
}

impl Emotion {
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Emotion::Joy => JOY_KEYWORDS,
            Emotion::Sadness => SADNESS_KEYWORDS,
            Emotion::Anxiety => ANXIETY_KEYWORDS,
            Emotion::Anger => ANGER_KEYWORDS,
            Emotion::Peace => PEACE_KEYWORDS,
        }
    }

    pub fn matches(self, token: &str) -> bool {
        self.keywords().contains(&token)
    }
}
