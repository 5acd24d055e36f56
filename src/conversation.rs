use serde::Serialize;
use std::fmt;

// Coarse subject of a message. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Stress,
    Anxiety,
    Sadness,
    Happiness,
    Sleep,
    General,
}

impl Topic {
    /// Every topic except the general fallback, in priority order.
    pub const SPECIFIC: [Topic; 5] = [
        Topic::Stress,
        Topic::Anxiety,
        Topic::Sadness,
        Topic::Happiness,
        Topic::Sleep,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Stress => &["stress", "overwhelm", "pressure"],
            Topic::Anxiety => &["anxious", "anxiety", "worry", "nervous"],
            Topic::Sadness => &["sad", "down", "depressed", "blue"],
            Topic::Happiness => &["happy", "good", "great", "excited", "joy"],
            Topic::Sleep => &["sleep", "tired", "insomnia", "rest"],
            Topic::General => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Stress => "stress",
            Topic::Anxiety => "anxiety",
            Topic::Sadness => "sadness",
            Topic::Happiness => "happiness",
            Topic::Sleep => "sleep",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
}

impl Mood {
    const ORDER: [Mood; 3] = [Mood::Positive, Mood::Negative, Mood::Neutral];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Mood::Positive => &["good", "great", "fine", "well"],
            // "not good" never wins on its own: "good" is checked first.
            Mood::Negative => &["bad", "terrible", "awful", "not good"],
            Mood::Neutral => &["okay", "alright", "so-so"],
        }
    }
}

fn mentions_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower_text.contains(k))
}

/// First topic whose keywords appear anywhere in the text, else general.
pub fn detect_topic(text: &str) -> Topic {
    let lower_text = text.to_lowercase();
    Topic::SPECIFIC
        .into_iter()
        .find(|topic| mentions_any(&lower_text, topic.keywords()))
        .unwrap_or(Topic::General)
}

/// First mood whose keywords appear anywhere in the text.
pub fn detect_mood(text: &str) -> Option<Mood> {
    let lower_text = text.to_lowercase();
    Mood::ORDER
        .into_iter()
        .find(|mood| mentions_any(&lower_text, mood.keywords()))
}

/// What the responder remembers about one conversation. Lives in memory
/// only and belongs to exactly one responder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub last_topic: Option<Topic>,
    pub mood: Option<Mood>,
    pub turn_count: u32,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts an inbound message and returns the new turn number.
    pub fn begin_turn(&mut self) -> u32 {
        self.turn_count = self.turn_count.saturating_add(1);
        self.turn_count
    }

    pub fn record(&mut self, topic: Topic, mood: Option<Mood>) {
        self.last_topic = Some(topic);
        self.mood = mood;
    }

    pub fn is_fresh(&self) -> bool {
        self.turn_count == 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_outranks_anxiety() {
        assert_eq!(detect_topic("The stress makes me anxious"), Topic::Stress);
    }

    #[test]
    fn sleep_alone_has_no_mood() {
        assert_eq!(detect_topic("sleep"), Topic::Sleep);
        assert_eq!(detect_mood("sleep"), None);
    }

    #[test]
    fn detection_ignores_case() {
        assert_eq!(detect_topic("I'm so ANXIOUS about my exam"), Topic::Anxiety);
        assert_eq!(detect_mood("Feeling GREAT"), Some(Mood::Positive));
    }

    #[test]
    fn substring_matches_count() {
        // "down" inside "countdown", "rest" inside "interesting".
        assert_eq!(detect_topic("the countdown started"), Topic::Sadness);
        assert_eq!(detect_topic("how interesting"), Topic::Sleep);
    }

    #[test]
    fn not_good_reads_as_positive() {
        assert_eq!(detect_mood("not good at all"), Some(Mood::Positive));
        assert_eq!(detect_mood("pretty awful"), Some(Mood::Negative));
        assert_eq!(detect_mood("it's alright"), Some(Mood::Neutral));
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(detect_topic(""), Topic::General);
        assert_eq!(detect_topic("tell me about the weather"), Topic::General);
        assert_eq!(detect_mood("tell me about the weather"), None);
    }

    #[test]
    fn reset_returns_to_fresh() {
        let mut context = SessionContext::new();
        assert!(context.is_fresh());
        assert_eq!(context.begin_turn(), 1);
        assert_eq!(context.begin_turn(), 2);
        context.record(Topic::Sleep, Some(Mood::Neutral));
        context.reset();
        assert_eq!(context, SessionContext::default());
    }
}
