//! Sample journal spanning a month of varied moods.

use crate::models::{JournalEntry, Mood};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

// (days ago, mood, tags, content)
const DEMO_ENTRIES: &[(i64, &str, &[&str], &str)] = &[
    (0, "happy", &["joy", "anticipation", "excitement"],
     "Started my new job today! The team seems amazing and everyone was so welcoming. I'm excited but also a bit nervous about the learning curve ahead. Had a great lunch with my new colleagues and we talked about everything from tech to travel. Feeling optimistic about this new chapter!"),
    (1, "calm", &["peace", "contentment"],
     "Meditation session this morning was exactly what I needed. 20 minutes of just breathing and being present. It's amazing how much clearer my mind feels afterwards. No racing thoughts, just peace. I should really make this a daily habit."),
    (2, "neutral", &["stress"],
     "Productive day at work but feeling a bit overwhelmed with the new project timeline. So many moving pieces to coordinate. Need to remember to take breaks and not let perfectionism slow me down. One step at a time."),
    (3, "sad", &["sadness", "guilt", "regret"],
     "Had an argument with my best friend today. I said things I didn't mean. Feeling guilty and sad about it. I know I need to apologize, but my ego is getting in the way. Tomorrow I'll reach out and make things right."),
    (4, "anxious", &["fear", "worry", "stress"],
     "Presentation at work didn't go as planned. My slides froze, I stuttered through my talking points, and I could see people checking their phones. Heart still racing hours later. Why do I always mess up the important moments?"),
    (5, "happy", &["joy", "gratitude", "excitement"],
     "Weekend hike with friends was incredible! The view from the summit was breathtaking. We laughed so much my cheeks hurt. These are the moments that make life beautiful. Grateful for good friends and nature."),
    (6, "calm", &["peace", "contentment"],
     "Rainy Sunday. Made tea, read a book, and just existed. No pressure to be productive. Sometimes the best thing you can do is nothing at all. Feeling recharged."),
    (7, "neutral", &["stress"],
     "Mom's birthday dinner tonight. Family gatherings are always a mix of joy and stress. Love seeing everyone but the small talk exhausts me. At least the food was good!"),
    (10, "sad", &["sadness", "fear", "worry"],
     "Got some difficult news about my health test results. Nothing serious, but requires lifestyle changes. Feeling scared and a bit sorry for myself. I know I'll adapt, but right now it feels overwhelming."),
    (12, "anxious", &["fear", "worry", "stress"],
     "Can't stop thinking about that email I need to send. What if they say no? What if I'm not good enough? My mind won't shut off. Need to practice those breathing exercises again."),
    (14, "happy", &["joy", "pride", "excitement"],
     "Finished that personal project I've been working on for months! It's finally live and people are actually using it. This feeling of accomplishment is incredible. All those late nights were worth it!"),
    (17, "calm", &["peace", "gratitude"],
     "Therapy session today was really productive. We talked about my tendency to people-please and how it's draining my energy. Working on setting boundaries. It's hard but necessary. Feeling hopeful about the progress."),
    (20, "neutral", &[],
     "Just another Monday. Work was fine, nothing special. Gym after work. Dinner. TV. Is this all there is? Not sad, not happy, just... existing. Maybe I need to switch things up."),
    (25, "sad", &["sadness", "grief"],
     "Watched the sunset alone today and cried. Not sure why. Just felt this wave of emotion. Life feels heavy sometimes. Missing the way things used to be, missing people who aren't around anymore."),
    (30, "happy", &["joy", "gratitude", "love"],
     "Surprise visit from an old friend! We stayed up until 2am talking and laughing like no time had passed. These connections are what life is about. Feeling so full of love and gratitude right now."),
];

/// Builds the demo journal with timestamps counted back from `now_ms`.
pub fn demo_entries(now_ms: i64) -> Vec<JournalEntry> {
    DEMO_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, (days_ago, mood, tags, content))| JournalEntry {
            id: format!("demo-{}", i + 1),
            content: content.to_string(),
            mood: Mood::from(*mood),
            timestamp: now_ms - days_ago * DAY_MS,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            updated_at: None,
        })
        .collect()
}
