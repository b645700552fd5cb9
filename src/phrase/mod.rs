//! Candidate phrase extraction.
//!
//! Stop words split each sentence into candidate phrases; a phrase's
//! constituent words are what the co-occurrence graph is built over.
//! Phrases are transient: they exist only long enough to derive word
//! lists (and, for phrase-level ranking, a surface form).

use crate::nlp::stopwords::StopwordFilter;

/// Extract candidate phrases from sentence segments.
///
/// Within a sentence, maximal runs of non-stopword tokens form one
/// phrase each. Phrases are lower-cased and trimmed; empty runs are
/// dropped.
pub fn candidate_phrases(sentences: &[&str], stopwords: &StopwordFilter) -> Vec<String> {
    let mut phrases = Vec::new();

    for sentence in sentences {
        let mut current: Vec<&str> = Vec::new();
        for token in sentence.split_whitespace() {
            if stopwords.is_stopword(token) {
                flush(&mut current, &mut phrases);
            } else {
                current.push(token);
            }
        }
        flush(&mut current, &mut phrases);
    }

    phrases
}

fn flush(current: &mut Vec<&str>, phrases: &mut Vec<String>) {
    if !current.is_empty() {
        phrases.push(current.join(" ").to_lowercase());
        current.clear();
    }
}

/// Split a candidate phrase into its graph-node words.
///
/// Words are separated by any character outside `[A-Za-z0-9_+-/]`.
/// A word is kept when it has strictly more than `min_word_length`
/// characters and is not purely numeric. Numbers stay visible in the
/// phrase surface form but never become graph nodes.
pub fn phrase_words(phrase: &str, min_word_length: usize) -> Vec<String> {
    phrase
        .split(|c: char| !is_word_char(c))
        .filter_map(|raw| {
            let word = raw.trim().to_lowercase();
            (word.chars().count() > min_word_length && !word.is_empty() && !is_number(&word))
                .then_some(word)
        })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-' | '/')
}

/// Purely numeric tokens: an integer, or a float when a `.` is present.
fn is_number(s: &str) -> bool {
    if s.contains('.') {
        s.parse::<f64>().is_ok()
    } else {
        s.parse::<i64>().is_ok()
    }
}
