//! End-to-end extraction tests over the public API.

use std::io::Write;

use betweenrank::{
    BetweennessConfig, BetweennessExtractor, Error, ScoringStrategy, StopwordFilter,
};

const ABSTRACT: &str = "Compatibility of systems of linear constraints over the set of \
natural numbers. Criteria of compatibility of a system of linear Diophantine equations, \
strict inequations, and nonstrict inequations are considered. Upper bounds for components \
of a minimal set of solutions and algorithms of construction of minimal generating sets \
of solutions for all types of systems are given.";

fn english_extractor() -> BetweennessExtractor {
    BetweennessExtractor::new(StopwordFilter::new("en"))
}

#[test]
fn run_is_idempotent() {
    let extractor = english_extractor();

    let first = extractor.run(ABSTRACT);
    let second = extractor.run(ABSTRACT);

    assert_eq!(first.len(), second.len());
    for (word, score) in &first {
        assert_eq!(second[word].to_bits(), score.to_bits(), "score drift for {word}");
    }
}

#[test]
fn run_scores_cover_content_words() {
    let extractor = english_extractor();
    let scores = extractor.run(ABSTRACT);

    for word in ["linear", "diophantine", "equations", "systems"] {
        assert!(scores.contains_key(word), "missing {word}");
    }
    // Stop words never become nodes.
    for word in ["of", "the", "and", "for"] {
        assert!(!scores.contains_key(word), "stopword {word} leaked in");
    }
    assert!(scores.values().all(|&s| s >= 0.0));
}

#[test]
fn single_phrase_complete_graph_is_uniform() {
    // With no stop words the whole text is one candidate phrase, producing
    // a fully connected graph with equal weights. Every node is
    // interchangeable by symmetry, so all scores must be identical.
    let extractor = BetweennessExtractor::new(StopwordFilter::empty());
    let scores = extractor.run("linear diophantine equations criteria system");

    assert_eq!(scores.len(), 5);
    let first = *scores.values().next().unwrap();
    assert!(scores.values().all(|&s| s == first));
}

#[test]
fn run_common_is_sorted_and_filtered() {
    let extractor = english_extractor();
    let local = "criteria for linear diophantine equations in local systems";
    let new = "new diophantine equations and linear criteria with systems";

    let ranked = extractor.run_common(ABSTRACT, local, new);

    assert!(!ranked.is_empty());
    for keyword in &ranked {
        assert!(local.contains(&keyword.word), "{} not in local", keyword.word);
        assert!(new.contains(&keyword.word), "{} not in new", keyword.word);
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "not sorted descending");
    }
}

#[test]
fn run_common_empty_without_shared_nodes() {
    let extractor = english_extractor();
    let ranked = extractor.run_common(ABSTRACT, "unrelated vocabulary entirely", "nothing matches");
    assert!(ranked.is_empty());
}

#[test]
fn degenerate_inputs_absorbed() {
    let extractor = english_extractor();

    assert!(extractor.run("").is_empty());
    assert!(extractor.run("the of and").is_empty());
    assert!(extractor.run_common("", "", "").is_empty());
    // Single surviving word: a one-node graph, score zero.
    let scores = extractor.run("compatibility");
    assert_eq!(scores.len(), 1);
    assert_eq!(scores["compatibility"], 0.0);
}

#[test]
fn stopword_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# SMART-style stop list").unwrap();
    writeln!(file, "of the and").unwrap();
    writeln!(file, "for a are").unwrap();
    file.flush().unwrap();

    let extractor = BetweennessExtractor::from_stopword_file(file.path()).unwrap();
    let scores = extractor.run("criteria of the linear systems");

    assert!(scores.contains_key("criteria"));
    assert!(!scores.contains_key("of"));
}

#[test]
fn stopword_file_errors_are_loud() {
    let err = BetweennessExtractor::from_stopword_file("/does/not/exist.txt").unwrap_err();
    assert!(matches!(err, Error::StopwordIo { .. }));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# nothing but comments").unwrap();
    file.flush().unwrap();

    let err = BetweennessExtractor::from_stopword_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::EmptyStopwordList { .. }));
}

#[test]
fn degree_frequency_strategy_end_to_end() {
    let config = BetweennessConfig::default().with_strategy(ScoringStrategy::DegreeFrequency);
    let extractor = BetweennessExtractor::with_config(StopwordFilter::new("en"), config);

    let scores = extractor.run(ABSTRACT);
    // Words living in long phrases (high degree) outrank lone words.
    assert!(scores["diophantine"] > scores["compatibility"]);

    let phrases = extractor.rank_phrases(ABSTRACT);
    assert!(!phrases.is_empty());
    assert!(phrases[0].word.contains(' '), "top RAKE phrase should be multi-word");
    for pair in phrases.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
