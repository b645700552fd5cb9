//! Keyword extraction entry points.
//!
//! [`BetweennessExtractor`] wires the full pipeline together:
//! sentences -> candidate phrases -> co-occurrence graph -> inverted
//! graph -> betweenness scores, plus the comparative three-corpus mode.
//! Every call builds fresh graphs; nothing is shared or cached between
//! invocations, so identical inputs always produce identical outputs.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::centrality::betweenness::betweenness_centrality;
use crate::error::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::graph::invert::invert_weights;
use crate::nlp::segmenter::split_sentences;
use crate::nlp::stopwords::StopwordFilter;
use crate::phrase::{candidate_phrases, phrase_words};
use crate::rank;
use crate::types::{BetweennessConfig, Keyword, ScoringStrategy};

/// Keyword extractor ranking words by graph centrality.
#[derive(Debug, Clone)]
pub struct BetweennessExtractor {
    stopwords: StopwordFilter,
    config: BetweennessConfig,
}

impl BetweennessExtractor {
    /// Create an extractor with the default configuration.
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self::with_config(stopwords, BetweennessConfig::default())
    }

    /// Create an extractor with an explicit configuration.
    pub fn with_config(stopwords: StopwordFilter, config: BetweennessConfig) -> Self {
        Self { stopwords, config }
    }

    /// Create an extractor whose stopword list is loaded from a file.
    ///
    /// This is the only fallible constructor; see
    /// [`StopwordFilter::from_file`] for the failure modes.
    pub fn from_stopword_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(StopwordFilter::from_file(path)?))
    }

    /// The extractor's configuration.
    pub fn config(&self) -> &BetweennessConfig {
        &self.config
    }

    /// Score every filtered word of `text`.
    ///
    /// The key set is exactly the set of words appearing in at least one
    /// candidate phrase. Degenerate input (empty text, nothing surviving
    /// the filters) yields an empty map.
    #[instrument(skip_all)]
    pub fn run(&self, text: &str) -> FxHashMap<String, f64> {
        let word_lists = self.word_lists(text);
        let (graph, scores) = self.score_word_lists(&word_lists);

        graph.words.iter().cloned().zip(scores).collect()
    }

    /// Rank words of `common` that also occur in both `local` and `new`.
    ///
    /// Only the common corpus is scored; the other two corpora act purely
    /// as node-membership filters. The result is sorted descending by
    /// score, stable on ties in first-encounter order. Words of the
    /// filter corpora absent from the common graph are silently dropped.
    #[instrument(skip_all)]
    pub fn run_common(&self, common: &str, local: &str, new: &str) -> Vec<Keyword> {
        let word_lists = self.word_lists(common);
        let (graph, scores) = self.score_word_lists(&word_lists);

        let local_graph = GraphBuilder::from_phrases(&self.word_lists(local));
        let new_graph = GraphBuilder::from_phrases(&self.word_lists(new));
        debug!(
            common_nodes = graph.num_nodes,
            local_nodes = local_graph.node_count(),
            new_nodes = new_graph.node_count(),
            "cross-corpus filter"
        );

        let keywords = graph
            .words
            .iter()
            .zip(scores)
            .filter(|(word, _)| local_graph.contains_word(word) && new_graph.contains_word(word))
            .map(|(word, score)| Keyword::new(word.clone(), score))
            .collect();

        rank::rank_descending(keywords)
    }

    /// Rank candidate phrases by the sum of their word scores.
    ///
    /// Uses the configured scoring strategy for the word scores; with
    /// [`ScoringStrategy::DegreeFrequency`] this is the classic RAKE
    /// phrase ranking.
    #[instrument(skip_all)]
    pub fn rank_phrases(&self, text: &str) -> Vec<Keyword> {
        let sentences = split_sentences(text);
        let phrases = candidate_phrases(&sentences, &self.stopwords);
        let word_lists: Vec<Vec<String>> = phrases
            .iter()
            .map(|p| phrase_words(p, self.config.min_word_length))
            .collect();

        let (graph, scores) = self.score_word_lists(&word_lists);
        let word_scores: FxHashMap<String, f64> =
            graph.words.iter().cloned().zip(scores).collect();

        rank::phrase_scores(&phrases, &word_lists, &word_scores)
    }

    /// Candidate-phrase word lists for a text.
    fn word_lists(&self, text: &str) -> Vec<Vec<String>> {
        let sentences = split_sentences(text);
        candidate_phrases(&sentences, &self.stopwords)
            .iter()
            .map(|p| phrase_words(p, self.config.min_word_length))
            .collect()
    }

    /// Build the co-occurrence graph and score its nodes.
    ///
    /// Returns the graph (for node identity and encounter order) and a
    /// score per node, per the configured strategy.
    fn score_word_lists(&self, word_lists: &[Vec<String>]) -> (CsrGraph, Vec<f64>) {
        let builder = GraphBuilder::from_phrases(word_lists);
        let graph = CsrGraph::from_builder(&builder);
        debug!(
            phrases = word_lists.len(),
            nodes = graph.num_nodes,
            edges = graph.edge_count(),
            "built co-occurrence graph"
        );

        let scores = match self.config.strategy {
            ScoringStrategy::Betweenness => {
                let inverted = invert_weights(&graph);
                betweenness_centrality(&inverted).scores
            }
            ScoringStrategy::DegreeFrequency => {
                let by_word = rank::degree_frequency_scores(word_lists);
                graph
                    .words
                    .iter()
                    .map(|w| by_word.get(w).copied().unwrap_or(0.0))
                    .collect()
            }
        };

        (graph, scores)
    }
}
