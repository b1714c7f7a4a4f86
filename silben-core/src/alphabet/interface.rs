//! Public contract for alphabet rules used by the segmenter

/// Vowel and diphthong membership tests
///
/// Implementations must be pure: the same character always classifies the
/// same way, so a segmenter can be shared between threads.
pub trait VowelRules: Send + Sync {
    /// Check whether the character is a vowel
    fn is_vowel(&self, ch: char) -> bool;

    /// Check whether the two characters form a diphthong
    ///
    /// The pair is matched case-insensitively and both characters must be
    /// vowels on their own.
    fn is_diphthong(&self, first: char, second: char) -> bool;
}
