//! Shared types: extraction configuration and scored keywords.

use serde::{Deserialize, Serialize};

/// Word scoring strategy selection.
///
/// The classic RAKE word score (degree over frequency) is kept as an
/// explicitly selected variant rather than the default path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Weighted betweenness centrality over the inverted co-occurrence graph.
    #[default]
    Betweenness,
    /// Classic RAKE word score: `deg(w) / freq(w)`.
    DegreeFrequency,
}

/// Configuration for a [`crate::BetweennessExtractor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetweennessConfig {
    /// Words must have strictly more than this many characters to become
    /// graph nodes.
    pub min_word_length: usize,
    /// Which word scoring strategy drives the returned scores.
    pub strategy: ScoringStrategy,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            min_word_length: 0,
            strategy: ScoringStrategy::Betweenness,
        }
    }
}

impl BetweennessConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum word length (exclusive).
    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Set the scoring strategy.
    pub fn with_strategy(mut self, strategy: ScoringStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// A scored keyword (single word or candidate phrase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The keyword text, lower-cased.
    pub word: String,
    /// Relevance score; higher is better.
    pub score: f64,
}

impl Keyword {
    /// Create a new keyword.
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}
