use crate::catalog::ResponseCatalog;
use crate::conversation::{detect_mood, detect_topic, SessionContext, Topic};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use serde::{Deserialize, Serialize};

static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey|good morning|good afternoon|good evening)")
        .expect("greeting pattern is valid")
});

/// Source of the responder's random choices.
pub trait Dice {
    /// Uniform draw in `[0, 1)`.
    fn roll(&mut self) -> f64;
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> Dice for R {
    fn roll(&mut self) -> f64 {
        self.gen()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Probabilities and turn thresholds that shape a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub follow_up_chance: f64,
    /// Follow-ups only appear once the turn count is above this.
    pub follow_up_after_turn: u32,
    pub encourage_chance: f64,
    pub suggestion_chance: f64,
    /// Suggestions only appear once the turn count is above this.
    pub suggestion_after_turn: u32,
    pub max_follow_ups: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            follow_up_chance: 0.3,
            follow_up_after_turn: 2,
            encourage_chance: 0.4,
            suggestion_chance: 0.2,
            suggestion_after_turn: 3,
            max_follow_ups: 2,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("follow_up_chance", self.follow_up_chance),
            ("encourage_chance", self.encourage_chance),
            ("suggestion_chance", self.suggestion_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("tuning.{} must be within [0, 1], got {}", name, value);
            }
        }
        if self.max_follow_ups > 2 {
            anyhow::bail!(
                "tuning.max_follow_ups must be at most 2, got {}",
                self.max_follow_ups
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub content: String,
    pub follow_up: Vec<String>,
}

/// The conversational companion for one session.
///
/// Owns its context and its random source, so two responders never
/// influence each other.
#[derive(Debug)]
pub struct Responder<D = StdRng> {
    context: SessionContext,
    catalog: ResponseCatalog,
    tuning: Tuning,
    dice: D,
}

impl Responder<StdRng> {
    pub fn from_entropy(tuning: Tuning) -> Self {
        Self::new(tuning, StdRng::from_entropy())
    }

    pub fn seeded(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, StdRng::seed_from_u64(seed))
    }
}

impl<D: Dice> Responder<D> {
    pub fn new(tuning: Tuning, dice: D) -> Self {
        Self {
            context: SessionContext::new(),
            catalog: ResponseCatalog,
            tuning,
            dice,
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Answers one user message. Never fails: empty or unmatched text
    /// lands in the general branch.
    pub fn respond(&mut self, user_text: &str) -> Reply {
        let turn = self.context.begin_turn();

        if turn == 1 || is_greeting(user_text) {
            return Reply {
                content: self.choose(self.catalog.greetings()),
                follow_up: self.catalog.check_in_questions()[..2]
                    .iter()
                    .map(|q| q.to_string())
                    .collect(),
            };
        }

        let topic = detect_topic(user_text);
        let mood = detect_mood(user_text);
        self.context.record(topic, mood);
        log::debug!("turn {}: topic={} mood={:?}", turn, topic, mood);

        let mut content = match self.catalog.replies(topic) {
            Some(pool) => self.choose(pool),
            None => {
                let pool = if self.dice.roll() < self.tuning.encourage_chance {
                    self.catalog.encouraging()
                } else {
                    self.catalog.casual()
                };
                self.choose(pool)
            }
        };

        let mut follow_up = Vec::new();
        if self.dice.roll() < self.tuning.follow_up_chance
            && turn > self.tuning.follow_up_after_turn
        {
            follow_up = self
                .catalog
                .follow_ups(topic)
                .iter()
                .take(self.tuning.max_follow_ups)
                .map(|q| q.to_string())
                .collect();
        }

        if self.dice.roll() < self.tuning.suggestion_chance
            && turn > self.tuning.suggestion_after_turn
        {
            content.push_str(&self.choose(self.catalog.suggestions()));
        }

        Reply { content, follow_up }
    }

    /// Forgets the conversation; the next message is greeted again.
    pub fn reset(&mut self) {
        self.context.reset();
    }

    fn choose(&mut self, pool: &[&str]) -> String {
        pool[self.dice.pick(pool.len())].to_string()
    }
}

fn is_greeting(text: &str) -> bool {
    GREETING.is_match(&text.trim().to_lowercase())
}
