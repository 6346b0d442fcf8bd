//! Keyword extraction from free-form text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Function words that never count as keywords.
const STOP_WORDS: [&str; 35] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "are", "was", "were", "be", "been", "have",
    "has", "had", "do", "does", "did", "will", "would", "could", "should",
    "may", "might", "can", "must", "shall",
];

/// Frequency map of normalized keywords.
///
/// Keys are unique, counts are positive, and iteration yields keywords in
/// the order they first appeared in the source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordFrequencyMap {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl KeywordFrequencyMap {
    fn insert(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.order.push(word.to_string());
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Occurrence count for a keyword, 0 if absent.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Keywords in first-occurrence order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(keyword, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(move |word| (word.as_str(), self.counts[word]))
    }
}

/// Turns free-form text into a [`KeywordFrequencyMap`].
///
/// Normalization lowercases the text, replaces every character that is not
/// alphanumeric or whitespace with a space, and splits on whitespace runs.
/// Tokens shorter than the minimum length and stop words are dropped.
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    min_token_length: usize,
    non_word_regex: Regex,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::with_min_token_length(3)
    }

    pub fn with_min_token_length(min_token_length: usize) -> Self {
        let non_word_regex = Regex::new(r"[^a-z0-9\s]").expect("Invalid token regex");

        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            min_token_length,
            non_word_regex,
        }
    }

    /// Extract keyword frequencies from `text`.
    ///
    /// Pure function of its input; an empty input yields an empty map.
    pub fn extract(&self, text: &str) -> KeywordFrequencyMap {
        let lowered = text.to_lowercase();
        let cleaned = self.non_word_regex.replace_all(&lowered, " ");

        let mut keywords = KeywordFrequencyMap::default();
        for token in cleaned.split_whitespace() {
            if token.len() < self.min_token_length {
                continue;
            }
            if self.stop_words.contains(token) {
                continue;
            }
            keywords.insert(token);
        }

        keywords
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }
}
