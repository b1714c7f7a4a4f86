//! Even-chunk fallback splitting
//!
//! Used when the nucleus heuristic cannot produce the requested number of
//! syllables. Chunks are counted in characters, never bytes.

use serde::{Deserialize, Serialize};

/// How the fallback distributes characters over pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Exactly `count` non-empty pieces whenever the word has at least
    /// `count` characters; concatenation always reproduces the word
    #[default]
    Balanced,
    /// Consecutive `ceil(len / count)` chunks truncated to `count`
    ///
    /// May return fewer than `count` pieces (`"Brot"` in 3 gives
    /// `["Br", "ot"]`).
    CeilChunks,
}

impl FallbackPolicy {
    /// Policy name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackPolicy::Balanced => "balanced",
            FallbackPolicy::CeilChunks => "ceil-chunks",
        }
    }
}

impl std::str::FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(FallbackPolicy::Balanced),
            "ceil-chunks" | "ceil_chunks" => Ok(FallbackPolicy::CeilChunks),
            other => Err(format!("unknown fallback policy: {other}")),
        }
    }
}

/// Split a word into `count` consecutive pieces
///
/// A `count` of zero is treated as one. An empty word yields no pieces.
pub fn simple_split(word: &str, count: usize, policy: FallbackPolicy) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    split_chars(&chars, count, policy)
}

pub(crate) fn split_chars(chars: &[char], count: usize, policy: FallbackPolicy) -> Vec<String> {
    if chars.is_empty() {
        return Vec::new();
    }
    let count = count.max(1);
    if count == 1 {
        return vec![chars.iter().collect()];
    }

    match policy {
        FallbackPolicy::Balanced => balanced(chars, count),
        FallbackPolicy::CeilChunks => chars
            .chunks(chars.len().div_ceil(count))
            .take(count)
            .map(|chunk| chunk.iter().collect())
            .collect(),
    }
}

fn balanced(chars: &[char], count: usize) -> Vec<String> {
    // Not enough characters for `count` pieces: one character each
    if chars.len() <= count {
        return chars.iter().map(|ch| ch.to_string()).collect();
    }

    let chunk_size = chars.len().div_ceil(count);
    let mut pieces = Vec::with_capacity(count);
    let mut start = 0;

    for owed in (1..=count).rev() {
        let remaining = chars.len() - start;
        // Leave at least one character for every piece still owed
        let take = if owed == 1 {
            remaining
        } else {
            chunk_size.min(remaining - (owed - 1))
        };
        pieces.push(chars[start..start + take].iter().collect());
        start += take;
    }

    pieces
}
