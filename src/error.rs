//! Crate error type.
//!
//! Only stop-word list loading can fail; every other input degeneracy
//! (empty text, edgeless graph, single-node graph) is absorbed by the
//! pipeline and produces an empty or zero-filled result instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing an extractor.
#[derive(Debug, Error)]
pub enum Error {
    /// The stop-word file could not be read.
    #[error("failed to read stop-word list {}", path.display())]
    StopwordIo {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stop-word file was read but contained no usable words.
    ///
    /// Proceeding with an accidentally empty stop-word set would silently
    /// turn every sentence into one giant candidate phrase, so this is
    /// fatal at construction time.
    #[error("stop-word list {} contains no usable words", path.display())]
    EmptyStopwordList {
        /// Path that was loaded.
        path: PathBuf,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
