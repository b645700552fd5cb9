//! Ranking utilities: the classic RAKE word score and phrase-level scoring.
//!
//! The degree-over-frequency score is an alternate, explicitly selected
//! strategy (see [`crate::types::ScoringStrategy`]); the default ranking
//! path is betweenness centrality.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::Keyword;

/// Classic RAKE word scores: `deg(w) / freq(w)`.
///
/// `freq(w)` counts occurrences of `w` across all phrase word lists;
/// `deg(w)` is `freq(w)` plus, for each occurrence, the number of other
/// words in that phrase.
pub fn degree_frequency_scores(word_lists: &[Vec<String>]) -> FxHashMap<String, f64> {
    let mut frequency: FxHashMap<&str, f64> = FxHashMap::default();
    let mut degree: FxHashMap<&str, f64> = FxHashMap::default();

    for words in word_lists {
        let co_degree = words.len().saturating_sub(1) as f64;
        for word in words {
            *frequency.entry(word).or_insert(0.0) += 1.0;
            *degree.entry(word).or_insert(0.0) += co_degree;
        }
    }

    frequency
        .into_iter()
        .map(|(word, freq)| {
            let deg = degree[word] + freq;
            (word.to_string(), deg / freq)
        })
        .collect()
}

/// Score each distinct candidate phrase as the sum of its word scores.
///
/// `phrases` and `word_lists` are parallel; the first occurrence of a
/// phrase determines its position, and the result is sorted descending
/// by score (stable on ties).
pub fn phrase_scores(
    phrases: &[String],
    word_lists: &[Vec<String>],
    word_scores: &FxHashMap<String, f64>,
) -> Vec<Keyword> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut keywords = Vec::new();

    for (phrase, words) in phrases.iter().zip(word_lists) {
        if !seen.insert(phrase) {
            continue;
        }
        let score: f64 = words
            .iter()
            .map(|w| word_scores.get(w).copied().unwrap_or(0.0))
            .sum();
        keywords.push(Keyword::new(phrase.clone(), score));
    }

    rank_descending(keywords)
}

/// Stable-sort keywords descending by score.
///
/// Ties keep their existing (encounter) order.
pub fn rank_descending(mut keywords: Vec<Keyword>) -> Vec<Keyword> {
    keywords.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(phrases: &[&[&str]]) -> Vec<Vec<String>> {
        phrases
            .iter()
            .map(|p| p.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_isolated_word_scores_one() {
        let scores = degree_frequency_scores(&lists(&[&["compatibility"]]));
        assert_eq!(scores["compatibility"], 1.0);
    }

    #[test]
    fn test_degree_frequency_multi_word_phrase() {
        // "linear constraints": each word has freq 1, co-degree 1,
        // so deg = 2 and score = 2.0.
        let scores = degree_frequency_scores(&lists(&[&["linear", "constraints"]]));
        assert_eq!(scores["linear"], 2.0);
        assert_eq!(scores["constraints"], 2.0);
    }

    #[test]
    fn test_frequent_lone_word_scores_lower_than_phrase_word() {
        // "systems" appears alone twice (score 1.0); "linear" rides a
        // two-word phrase (score 2.0). Degree over frequency rewards
        // phrase membership, not repetition.
        let scores = degree_frequency_scores(&lists(&[
            &["systems"],
            &["systems"],
            &["linear", "constraints"],
        ]));
        assert_eq!(scores["systems"], 1.0);
        assert!(scores["linear"] > scores["systems"]);
    }

    #[test]
    fn test_empty_input() {
        let scores = degree_frequency_scores(&[]);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_phrase_scores_sum_and_sort() {
        let phrases = vec!["linear constraints".to_string(), "systems".to_string()];
        let word_lists = lists(&[&["linear", "constraints"], &["systems"]]);
        let word_scores = degree_frequency_scores(&word_lists);

        let ranked = phrase_scores(&phrases, &word_lists, &word_scores);

        assert_eq!(ranked[0].word, "linear constraints");
        assert_eq!(ranked[0].score, 4.0);
        assert_eq!(ranked[1].word, "systems");
        assert_eq!(ranked[1].score, 1.0);
    }

    #[test]
    fn test_phrase_scores_dedup_keeps_first() {
        let phrases = vec!["systems".to_string(), "systems".to_string()];
        let word_lists = lists(&[&["systems"], &["systems"]]);
        let word_scores = degree_frequency_scores(&word_lists);

        let ranked = phrase_scores(&phrases, &word_lists, &word_scores);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_rank_descending_is_stable_on_ties() {
        let ranked = rank_descending(vec![
            Keyword::new("first", 1.0),
            Keyword::new("second", 1.0),
            Keyword::new("top", 2.0),
        ]);

        assert_eq!(ranked[0].word, "top");
        assert_eq!(ranked[1].word, "first");
        assert_eq!(ranked[2].word, "second");
    }
}
