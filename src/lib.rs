//! Keyword extraction via weighted betweenness centrality.
//!
//! `betweenrank` extracts salient words from free text by combining a
//! RAKE-style stopword-driven phrase extractor with a word co-occurrence
//! graph. Words that co-occur inside the same candidate phrase are linked
//! with accumulated weights; the weights are inverted into shortest-path
//! distances; and each word is ranked by weighted betweenness centrality
//! (Brandes' algorithm with Dijkstra sources). High-scoring words are the
//! "bridges" of the text's phrase vocabulary.
//!
//! A comparative mode scores one "common" corpus and keeps only words
//! that also occur in two further corpora, surfacing words that are both
//! globally central and locally relevant.
//!
//! # Example
//!
//! ```
//! use betweenrank::{BetweennessExtractor, StopwordFilter};
//!
//! let stopwords = StopwordFilter::from_list(&["of", "the", "and"]);
//! let extractor = BetweennessExtractor::new(stopwords);
//!
//! let scores = extractor.run("compatibility of systems of linear constraints");
//! assert!(scores.contains_key("linear"));
//! assert!(scores.values().all(|&s| s >= 0.0));
//! ```

pub mod centrality;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod nlp;
pub mod phrase;
pub mod rank;
pub mod types;

pub use centrality::betweenness::betweenness_centrality;
pub use centrality::BetweennessResult;
pub use error::{Error, Result};
pub use extractor::BetweennessExtractor;
pub use graph::builder::GraphBuilder;
pub use graph::csr::CsrGraph;
pub use graph::invert::invert_weights;
pub use nlp::segmenter::split_sentences;
pub use nlp::stopwords::StopwordFilter;
pub use types::{BetweennessConfig, Keyword, ScoringStrategy};
