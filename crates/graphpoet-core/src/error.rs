//! Error types for graphpoet-core

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for GraphPoet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building an affinity graph or loading
/// configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The corpus line source could not be opened or read.
    #[error("Corpus unavailable{}: {source}", display_path(.path))]
    CorpusUnavailable {
        /// Path of the corpus, when it came from a file
        path: Option<PathBuf>,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// An empty label reached the graph's mutation API.
    #[error("Vertex labels must be non-empty")]
    EmptyLabel,

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a corpus error for a stream with no associated path.
    pub fn corpus_io(source: std::io::Error) -> Self {
        Error::CorpusUnavailable { path: None, source }
    }

    /// Creates a corpus error for a file on disk.
    pub fn corpus_io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::CorpusUnavailable {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if this error came from the corpus source.
    pub fn is_corpus_error(&self) -> bool {
        matches!(self, Error::CorpusUnavailable { .. })
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}
