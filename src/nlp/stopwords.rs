//! Stopword filtering
//!
//! Built-in language lists come from the `stop-words` crate; callers can
//! also supply their own list or load one from a file. Stop words act as
//! candidate-phrase delimiters, so an accidentally empty file-loaded set
//! is a fatal configuration error rather than a silent no-op.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::error::{Error, Result};

/// A case-insensitive stopword matcher.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase).
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter from a built-in language list.
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            _ => LANGUAGE::English,
        };

        Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// Create an empty filter (no word is a stopword).
    ///
    /// Explicitly choosing no filtering is valid; contrast with
    /// [`StopwordFilter::from_file`], which rejects an empty result.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a stopword list from a file.
    ///
    /// Lines starting with `#` are comments; a line may carry several
    /// whitespace-separated words. Words are lower-cased.
    ///
    /// # Errors
    ///
    /// [`Error::StopwordIo`] if the file cannot be read, and
    /// [`Error::EmptyStopwordList`] if it yields no words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::StopwordIo {
            path: path.to_path_buf(),
            source,
        })?;

        let stopwords: FxHashSet<String> = contents
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();

        if stopwords.is_empty() {
            return Err(Error::EmptyStopwordList {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { stopwords })
    }

    /// Check whether a token is a stopword (case-insensitive).
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&token.to_lowercase())
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter contains no stopwords.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
