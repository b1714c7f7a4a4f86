//! Quiz records and answer checking
//!
//! The records mirror what the question endpoints return. Checking an answer
//! is a pure function of the record and the answer; scoring happens in
//! [`score`](crate::score).

use crate::dto::Breakdown;
use crate::score::{Outcome, QuizMode};
use crate::SyllableSplitter;

/// Points awarded per difficulty level for a correct answer
pub const POINTS_PER_LEVEL: u32 = 10;

/// A syllable-counting question
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyllableQuestion {
    /// Word to count
    pub word: String,
    /// Number of syllables, as given by the dictionary
    pub syllable_count: usize,
    /// Difficulty level, usually 1 to 3
    #[cfg_attr(feature = "serde", serde(default = "default_difficulty"))]
    pub difficulty: u32,
}

/// A category classification question
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryQuestion {
    /// Word to classify
    pub word: String,
    /// Correct category key, e.g. `Tier`
    pub category: String,
    /// Category keys offered as answers
    pub options: Vec<String>,
    /// Difficulty level
    #[cfg_attr(feature = "serde", serde(default = "default_difficulty"))]
    pub difficulty: u32,
}

/// A der/die/das question: a noun and its grammatical gender
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticleQuestion {
    /// Nominative singular form
    pub nominativ_singular: String,
    /// Grammatical gender
    pub genus: Genus,
}

#[cfg(feature = "serde")]
fn default_difficulty() -> u32 {
    1
}

/// Grammatical gender of a German noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Genus {
    /// Masculine, article "der"
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Masculine,
    /// Feminine, article "die"
    #[cfg_attr(feature = "serde", serde(rename = "f"))]
    Feminine,
    /// Neuter, article "das"
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    Neuter,
}

impl Genus {
    /// Definite article in nominative singular, capitalised
    pub fn article(&self) -> &'static str {
        match self {
            Genus::Masculine => "Der",
            Genus::Feminine => "Die",
            Genus::Neuter => "Das",
        }
    }

    /// Dictionary code (`m`, `f`, `n`)
    pub fn code(&self) -> &'static str {
        match self {
            Genus::Masculine => "m",
            Genus::Feminine => "f",
            Genus::Neuter => "n",
        }
    }
}

impl std::str::FromStr for Genus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Genus::Masculine),
            "f" => Ok(Genus::Feminine),
            "n" => Ok(Genus::Neuter),
            other => Err(format!("unknown genus: {other}")),
        }
    }
}

/// Display name and emoji of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryLabel {
    /// German display name
    pub name: &'static str,
    /// Emoji shown on the answer button
    pub emoji: &'static str,
}

const CATEGORY_LABELS: &[(&str, CategoryLabel)] = &[
    ("Tier", CategoryLabel { name: "Tiere", emoji: "🦫" }),
    ("Essen", CategoryLabel { name: "Essen", emoji: "🍎" }),
    ("Familie", CategoryLabel { name: "Familie", emoji: "👨‍👩‍👧‍👦" }),
    ("Schule", CategoryLabel { name: "Schule", emoji: "📚" }),
    ("Körper", CategoryLabel { name: "Körper", emoji: "👤" }),
    ("Haus", CategoryLabel { name: "Haus", emoji: "🏠" }),
    ("Natur", CategoryLabel { name: "Natur", emoji: "🌳" }),
    ("Kleidung", CategoryLabel { name: "Kleidung", emoji: "👕" }),
    ("Fahrzeug", CategoryLabel { name: "Fahrzeuge", emoji: "🚗" }),
    ("Zeit", CategoryLabel { name: "Zeit", emoji: "⏰" }),
    ("Farbe", CategoryLabel { name: "Farben", emoji: "🎨" }),
    ("Other", CategoryLabel { name: "Andere", emoji: "📦" }),
];

/// Look up the label of a category key
///
/// Unknown keys are shown under their own name with the parcel emoji.
pub fn category_label(key: &str) -> (String, &'static str) {
    CATEGORY_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| (label.name.to_string(), label.emoji))
        .unwrap_or_else(|| (key.to_string(), "📦"))
}

/// Result of checking a syllable answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableVerdict {
    /// Whether the answer matched
    pub correct: bool,
    /// Expected syllable count
    pub expected: usize,
    /// Points earned
    pub points: u32,
    /// Syllable breakdown of the word
    pub breakdown: Breakdown,
    /// Feedback line shown to the player
    pub feedback: String,
    difficulty: u32,
}

/// Result of checking a category or article answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Quiz the answer belongs to
    pub mode: QuizMode,
    /// Whether the answer matched
    pub correct: bool,
    /// Points earned
    pub points: u32,
    /// Feedback line shown to the player
    pub feedback: String,
    difficulty: u32,
}

impl SyllableVerdict {
    /// Outcome for score keeping
    pub fn outcome(&self) -> Outcome {
        outcome(self.correct, self.difficulty)
    }
}

impl Verdict {
    /// Outcome for score keeping
    pub fn outcome(&self) -> Outcome {
        outcome(self.correct, self.difficulty)
    }
}

fn outcome(correct: bool, difficulty: u32) -> Outcome {
    if correct {
        Outcome::Correct { difficulty }
    } else {
        Outcome::Wrong
    }
}

fn points(correct: bool, difficulty: u32) -> u32 {
    if correct {
        difficulty.saturating_mul(POINTS_PER_LEVEL)
    } else {
        0
    }
}

/// Check a syllable count answer and produce the breakdown for display
pub fn check_syllable_answer(
    splitter: &SyllableSplitter,
    question: &SyllableQuestion,
    answer: usize,
) -> SyllableVerdict {
    let expected = question.syllable_count;
    let correct = answer == expected;
    let breakdown = splitter.split_question(question);
    let plural = if expected == 1 { "" } else { "n" };

    let feedback = if correct {
        format!(
            "✅ Richtig! \"{}\" hat {} Silbe{}! {}",
            question.word, expected, plural, breakdown.display
        )
    } else {
        format!(
            "❌ Falsch! \"{}\" hat {} Silbe{}. {}",
            question.word, expected, plural, breakdown.display
        )
    };

    SyllableVerdict {
        correct,
        expected,
        points: points(correct, question.difficulty),
        breakdown,
        feedback,
        difficulty: question.difficulty,
    }
}

/// Check a category answer
pub fn check_category_answer(question: &CategoryQuestion, answer: &str) -> Verdict {
    let correct = answer == question.category;
    let (name, emoji) = category_label(&question.category);

    let feedback = if correct {
        format!("✅ Richtig! \"{}\" gehört zu {emoji} {name}!", question.word)
    } else {
        format!("❌ Falsch! \"{}\" gehört zu {emoji} {name}.", question.word)
    };

    Verdict {
        mode: QuizMode::Category,
        correct,
        points: points(correct, question.difficulty),
        feedback,
        difficulty: question.difficulty,
    }
}

/// Check a der/die/das answer; the article is compared case-insensitively
pub fn check_article_answer(question: &ArticleQuestion, answer: &str) -> Verdict {
    let article = question.genus.article();
    let correct = answer.trim().eq_ignore_ascii_case(article);

    let feedback = if correct {
        format!("✅ Richtig! {article} {}", question.nominativ_singular)
    } else {
        format!("❌ Falsch! {article} {}", question.nominativ_singular)
    };

    Verdict {
        mode: QuizMode::Article,
        correct,
        points: points(correct, 1),
        feedback,
        difficulty: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(word: &str, count: usize, difficulty: u32) -> SyllableQuestion {
        SyllableQuestion {
            word: word.to_string(),
            syllable_count: count,
            difficulty,
        }
    }

    #[test]
    fn test_correct_syllable_answer() {
        let splitter = SyllableSplitter::new().unwrap();
        let verdict = check_syllable_answer(&splitter, &question("Sonne", 2, 2), 2);

        assert!(verdict.correct);
        assert_eq!(verdict.points, 20);
        assert_eq!(verdict.breakdown.display, "Son • ne");
        assert_eq!(verdict.feedback, "✅ Richtig! \"Sonne\" hat 2 Silben! Son • ne");
        assert_eq!(verdict.outcome(), Outcome::Correct { difficulty: 2 });
    }

    #[test]
    fn test_wrong_syllable_answer_singular() {
        let splitter = SyllableSplitter::new().unwrap();
        let verdict = check_syllable_answer(&splitter, &question("Hund", 1, 1), 2);

        assert!(!verdict.correct);
        assert_eq!(verdict.points, 0);
        assert_eq!(verdict.feedback, "❌ Falsch! \"Hund\" hat 1 Silbe. Hund");
        assert_eq!(verdict.outcome(), Outcome::Wrong);
    }

    #[test]
    fn test_category_answer() {
        let question = CategoryQuestion {
            word: "Katze".to_string(),
            category: "Tier".to_string(),
            options: vec!["Tier".to_string(), "Essen".to_string()],
            difficulty: 3,
        };

        let right = check_category_answer(&question, "Tier");
        assert!(right.correct);
        assert_eq!(right.points, 30);
        assert_eq!(right.feedback, "✅ Richtig! \"Katze\" gehört zu 🦫 Tiere!");

        let wrong = check_category_answer(&question, "Essen");
        assert!(!wrong.correct);
        assert_eq!(wrong.mode, QuizMode::Category);
        assert_eq!(wrong.feedback, "❌ Falsch! \"Katze\" gehört zu 🦫 Tiere.");
    }

    #[test]
    fn test_unknown_category_label() {
        assert_eq!(category_label("Musik"), ("Musik".to_string(), "📦"));
        assert_eq!(category_label("Fahrzeug"), ("Fahrzeuge".to_string(), "🚗"));
    }

    #[test]
    fn test_article_answer() {
        let question = ArticleQuestion {
            nominativ_singular: "Tisch".to_string(),
            genus: Genus::Masculine,
        };

        assert!(check_article_answer(&question, "der").correct);
        assert!(check_article_answer(&question, "Der").correct);
        let wrong = check_article_answer(&question, "Das");
        assert!(!wrong.correct);
        assert_eq!(wrong.feedback, "❌ Falsch! Der Tisch");
    }

    #[test]
    fn test_genus_codes() {
        for genus in [Genus::Masculine, Genus::Feminine, Genus::Neuter] {
            assert_eq!(genus.code().parse::<Genus>().unwrap(), genus);
        }
        assert_eq!(Genus::Feminine.article(), "Die");
        assert_eq!(Genus::Neuter.article(), "Das");
        assert!("x".parse::<Genus>().is_err());
    }
}
