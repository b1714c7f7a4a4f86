//! Runtime lookup tables for vowels and diphthongs
//!
//! Lookups are allocation-free with an ASCII fast path.

use std::collections::HashSet;

/// Lowercase a character to a single character
///
/// Multi-character lowercase expansions keep only their first character,
/// which is enough for the letters an alphabet can list.
#[inline]
pub(crate) fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Vowel membership table covering both cases
#[derive(Debug, Clone)]
pub(crate) struct VowelTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// Umlauts and other non-ASCII vowels
    non_ascii: HashSet<char>,
}

impl VowelTable {
    /// Create from lowercase vowels; uppercase forms are added
    pub fn new(vowels: &[char]) -> Self {
        let mut table = Self {
            ascii_table: [false; 128],
            non_ascii: HashSet::new(),
        };

        for &ch in vowels {
            table.insert(ch);
            for upper in ch.to_uppercase() {
                table.insert(upper);
            }
        }

        table
    }

    fn insert(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii_table[ch as usize] = true;
        } else {
            self.non_ascii.insert(ch);
        }
    }

    /// Check if character is a vowel - hot path
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }

    /// Number of distinct vowel characters, counting both cases
    pub fn len(&self) -> usize {
        self.ascii_table.iter().filter(|&&set| set).count() + self.non_ascii.len()
    }
}

/// Case-folded diphthong pairs
#[derive(Debug, Clone, Default)]
pub(crate) struct DiphthongTable {
    pairs: HashSet<(char, char)>,
}

impl DiphthongTable {
    /// Create from `(first, second)` pairs
    pub fn new(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(first, second)| (fold(first), fold(second)))
                .collect(),
        }
    }

    /// Check a pair after case folding
    #[inline]
    pub fn contains(&self, first: char, second: char) -> bool {
        self.pairs.contains(&(fold(first), fold(second)))
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}
