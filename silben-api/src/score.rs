//! Per-session score keeping
//!
//! A [`ScoreCard`] is an immutable value and [`ScoreCard::apply`] is a pure
//! reducer. [`ScoreBook`] keeps one card per session and quiz mode.

use std::collections::HashMap;
use std::fmt;

use crate::quiz::POINTS_PER_LEVEL;

/// Quiz modes with independent scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QuizMode {
    /// der/die/das
    Article,
    /// Category classification
    Category,
    /// Syllable counting
    Syllable,
}

/// Result of one answer as seen by the score keeper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Correct answer to a question of the given difficulty
    Correct {
        /// Difficulty level of the question
        difficulty: u32,
    },
    /// Wrong answer
    Wrong,
}

/// Score of one player in one quiz mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreCard {
    /// Accumulated points
    pub score: u32,
    /// Number of correct answers
    pub correct: u32,
    /// Number of wrong answers
    pub wrong: u32,
}

impl ScoreCard {
    /// Return the card after one more answer
    #[must_use]
    pub fn apply(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct { difficulty } => Self {
                score: self
                    .score
                    .saturating_add(difficulty.saturating_mul(POINTS_PER_LEVEL)),
                correct: self.correct.saturating_add(1),
                ..self
            },
            Outcome::Wrong => Self {
                wrong: self.wrong.saturating_add(1),
                ..self
            },
        }
    }

    /// Number of answers given
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }
}

/// Identifier of a player session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(String);

impl SessionId {
    /// Create from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Score cards keyed by session and quiz mode
#[derive(Debug, Clone, Default)]
pub struct ScoreBook {
    cards: HashMap<(SessionId, QuizMode), ScoreCard>,
}

impl ScoreBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Current card; sessions without answers have an empty card
    pub fn card(&self, session: &SessionId, mode: QuizMode) -> ScoreCard {
        self.cards
            .get(&(session.clone(), mode))
            .copied()
            .unwrap_or_default()
    }

    /// Record an answer and return the updated card
    pub fn record(&mut self, session: &SessionId, mode: QuizMode, outcome: Outcome) -> ScoreCard {
        let card = self.cards.entry((session.clone(), mode)).or_default();
        *card = card.apply(outcome);
        *card
    }

    /// Start a mode over for one session
    pub fn reset(&mut self, session: &SessionId, mode: QuizMode) {
        self.cards.remove(&(session.clone(), mode));
    }

    /// Sessions that have recorded at least one answer
    pub fn sessions(&self) -> Vec<&SessionId> {
        let mut sessions: Vec<&SessionId> = self.cards.keys().map(|(id, _)| id).collect();
        sessions.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        sessions.dedup();
        sessions
    }

    /// Sum of all modes for one session
    pub fn total(&self, session: &SessionId) -> u32 {
        self.cards
            .iter()
            .filter(|((id, _), _)| id == session)
            .map(|(_, card)| card.score)
            .fold(0, u32::saturating_add)
    }
}
