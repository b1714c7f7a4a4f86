//! Nucleus-based syllable segmentation
//!
//! The scan treats every vowel as the nucleus of a syllable. While more
//! syllables are still expected, the consonants between a vowel and the
//! next one are split in half: the first half closes the current syllable,
//! the second half opens the next. A diphthong is absorbed as one nucleus.
//! If the scan ends with a different number of syllables than requested,
//! its result is discarded in favour of [`simple_split`](crate::simple_split).

use std::fmt;
use std::sync::Arc;

use crate::alphabet::{get_alphabet, VowelRules};
use crate::error::Result;
use crate::fallback::{split_chars, FallbackPolicy};

/// Which pass produced a segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMethod {
    /// Vowel-nucleus scan matched the requested count
    Heuristic,
    /// Even-chunk fallback
    Fallback,
}

/// Result of segmenting one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    /// Syllables in order; their concatenation is the word
    pub syllables: Vec<String>,
    /// Pass that produced the syllables
    pub method: SplitMethod,
}

impl Segmentation {
    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// True for the segmentation of an empty word
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Join the syllables for display, e.g. `Son • ne`
    pub fn join(&self, separator: &str) -> String {
        self.syllables.join(separator)
    }
}

/// What the scan does after looking at one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Continue with the following character
    Advance,
    /// Absorb the following character as the second half of a diphthong
    Glide,
    /// Close the current syllable before `cut` and resume at the vowel at `resume`
    Split { cut: usize, resume: usize },
}

/// State of one heuristic pass over a word
struct Scan<'a> {
    rules: &'a dyn VowelRules,
    chars: &'a [char],
    target: usize,
    vowels_seen: usize,
}

impl<'a> Scan<'a> {
    fn new(rules: &'a dyn VowelRules, chars: &'a [char], target: usize) -> Self {
        Self {
            rules,
            chars,
            target,
            vowels_seen: 0,
        }
    }

    /// Decide the step for the character at `pos`
    fn step(&mut self, pos: usize) -> Step {
        if !self.rules.is_vowel(self.chars[pos]) {
            return Step::Advance;
        }
        self.vowels_seen += 1;

        let is_last = pos + 1 == self.chars.len();
        if self.vowels_seen < self.target && !is_last {
            // A vowel directly followed by a vowel is never split and never glides
            return match self.next_vowel(pos + 1) {
                Some(next) if next > pos + 1 => {
                    let consonants = next - pos - 1;
                    Step::Split {
                        cut: pos + 1 + consonants / 2,
                        resume: next,
                    }
                }
                _ => Step::Advance,
            };
        }

        if self.is_diphthong_at(pos) {
            Step::Glide
        } else {
            Step::Advance
        }
    }

    fn next_vowel(&self, from: usize) -> Option<usize> {
        self.chars[from..]
            .iter()
            .position(|&ch| self.rules.is_vowel(ch))
            .map(|offset| from + offset)
    }

    fn is_diphthong_at(&self, pos: usize) -> bool {
        match self.chars.get(pos + 1) {
            Some(&next) => self.rules.is_diphthong(self.chars[pos], next),
            None => false,
        }
    }

    /// Run the pass and collect the syllables
    fn run(mut self) -> Vec<String> {
        // The scan never yields more syllables than characters
        let mut syllables = Vec::with_capacity(self.target.min(self.chars.len()));
        let mut start = 0;
        let mut pos = 0;

        while pos < self.chars.len() {
            pos = match self.step(pos) {
                Step::Advance => pos + 1,
                Step::Glide => pos + 2,
                Step::Split { cut, resume } => {
                    syllables.push(self.chars[start..cut].iter().collect());
                    start = cut;
                    resume
                }
            };
        }

        if start < self.chars.len() {
            syllables.push(self.chars[start..].iter().collect());
        }

        syllables
    }
}

/// Syllable segmenter
///
/// Stateless apart from its configuration; one instance can serve any
/// number of threads.
#[derive(Clone)]
pub struct Segmenter {
    rules: Arc<dyn VowelRules>,
    policy: FallbackPolicy,
}

impl fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenter")
            .field("rules", &"<dyn VowelRules>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl Segmenter {
    /// Create a segmenter over the given rules with the balanced fallback
    pub fn new(rules: Arc<dyn VowelRules>) -> Self {
        Self {
            rules,
            policy: FallbackPolicy::default(),
        }
    }

    /// Create a segmenter for an embedded alphabet
    pub fn for_alphabet(code: &str) -> Result<Self> {
        let alphabet = get_alphabet(code)?;
        Ok(Self::new(alphabet))
    }

    /// Segmenter over the embedded German alphabet
    pub fn german() -> Self {
        Self::for_alphabet("de").expect("embedded German alphabet should always load")
    }

    /// Replace the fallback policy
    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fallback policy in use
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Vowel rules in use
    pub fn rules(&self) -> &dyn VowelRules {
        self.rules.as_ref()
    }

    /// Split `word` into `target` syllables
    ///
    /// A `target` of zero is treated as one; an empty word yields an empty
    /// sequence.
    pub fn segment(&self, word: &str, target: usize) -> Vec<String> {
        self.segment_detailed(word, target).syllables
    }

    /// Split `word` and report which pass produced the result
    pub fn segment_detailed(&self, word: &str, target: usize) -> Segmentation {
        let target = target.max(1);
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Segmentation {
                syllables: Vec::new(),
                method: SplitMethod::Heuristic,
            };
        }

        let syllables = Scan::new(self.rules.as_ref(), &chars, target).run();
        if syllables.len() == target {
            return Segmentation {
                syllables,
                method: SplitMethod::Heuristic,
            };
        }

        Segmentation {
            syllables: split_chars(&chars, target, self.policy),
            method: SplitMethod::Fallback,
        }
    }

    /// Run only the heuristic pass, without count validation
    pub fn heuristic(&self, word: &str, target: usize) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        Scan::new(self.rules.as_ref(), &chars, target.max(1)).run()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::german()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(word: &str, target: usize) -> Vec<Step> {
        let segmenter = Segmenter::german();
        let chars: Vec<char> = word.chars().collect();
        let mut scan = Scan::new(segmenter.rules(), &chars, target);
        (0..chars.len()).map(|pos| scan.step(pos)).collect()
    }

    #[test]
    fn test_split_step_halves_consonant_run() {
        // "Sonne": o at 1, next vowel e at 4, consonants "nn"
        let steps = steps("Sonne", 2);
        assert_eq!(steps[0], Step::Advance);
        assert_eq!(steps[1], Step::Split { cut: 3, resume: 4 });
    }

    #[test]
    fn test_single_consonant_goes_to_next_syllable() {
        // "Blume": u at 2, next vowel e at 4, one consonant
        let steps = steps("Blume", 2);
        assert_eq!(steps[2], Step::Split { cut: 3, resume: 4 });
    }

    #[test]
    fn test_glide_only_when_no_more_syllables_needed() {
        assert_eq!(steps("Baum", 1)[1], Step::Glide);
        // With syllables still owed, a vowel pair is neither split nor glided
        assert_eq!(steps("Baum", 2)[1], Step::Advance);
    }

    #[test]
    fn test_heuristic_results() {
        let segmenter = Segmenter::german();
        assert_eq!(segmenter.heuristic("Sonne", 2), vec!["Son", "ne"]);
        assert_eq!(segmenter.heuristic("Katze", 2), vec!["Kat", "ze"]);
        assert_eq!(segmenter.heuristic("Banane", 3), vec!["Ba", "na", "ne"]);
        assert_eq!(
            segmenter.heuristic("Schmetterling", 3),
            vec!["Schmet", "ter", "ling"]
        );
        assert_eq!(segmenter.heuristic("Brot", 3), vec!["Brot"]);
    }

    #[test]
    fn test_detailed_reports_method() {
        let segmenter = Segmenter::german();

        let sonne = segmenter.segment_detailed("Sonne", 2);
        assert_eq!(sonne.method, SplitMethod::Heuristic);
        assert_eq!(sonne.join(" • "), "Son • ne");

        let eimer = segmenter.segment_detailed("Eimer", 2);
        assert_eq!(eimer.method, SplitMethod::Fallback);
        assert_eq!(eimer.syllables, vec!["Eim", "er"]);
    }

    #[test]
    fn test_empty_word() {
        let segmenter = Segmenter::german();
        let result = segmenter.segment_detailed("", 2);
        assert!(result.is_empty());
        assert_eq!(result.method, SplitMethod::Heuristic);
    }

    #[test]
    fn test_huge_target_does_not_preallocate() {
        let segmenter = Segmenter::german();
        assert_eq!(segmenter.heuristic("Sonne", usize::MAX), vec!["Son", "ne"]);
        assert_eq!(segmenter.heuristic("Sonne", 1 << 40).len(), 2);
    }

    #[test]
    fn test_policy_builder() {
        let segmenter = Segmenter::german().with_policy(FallbackPolicy::CeilChunks);
        assert_eq!(segmenter.policy(), FallbackPolicy::CeilChunks);
        assert_eq!(segmenter.segment("Brot", 3), vec!["Br", "ot"]);
        assert!(format!("{segmenter:?}").contains("CeilChunks"));
    }
}
