//! CorpusBuilder for constructing word-affinity graphs.
//!
//! The builder scans corpus text line by line, word by word:
//!
//! 1. Split each line on whitespace runs
//! 2. Fold each word to lower case and ensure it is a vertex
//! 3. Increment the edge from the previous word on the same line
//!
//! Adjacency never crosses a line boundary. A corpus with no words yields an
//! empty graph, which is a valid result.
//!
//! Line sources that fail mid-read abort the build: the builder is consumed
//! and no partially built graph is returned.

use crate::{VertexLabel, WeightedDirectedGraph};
use graphpoet_core::util::words::{fold_case, split_words};
use graphpoet_core::{Error, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Statistics from a graph build operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Corpus lines scanned (including blank lines).
    pub lines_read: usize,
    /// Words seen across all lines.
    pub tokens_seen: usize,
    /// Distinct vertices created.
    pub vertices_created: usize,
    /// Distinct edges created.
    pub edges_created: usize,
    /// Adjacent word pairs counted (sum of all edge weights).
    pub adjacencies_counted: usize,
}

// ============================================================================
// CorpusBuilder
// ============================================================================

/// Builder for constructing a word-affinity graph from corpus lines.
///
/// # Example
///
/// ```rust
/// use graphpoet_graph::CorpusBuilder;
///
/// let (graph, stats) = CorpusBuilder::new()
///     .with_lines(["a b a b"])
///     .unwrap()
///     .build();
///
/// assert_eq!(graph.weight("a", "b"), 2);
/// assert_eq!(graph.weight("b", "a"), 1);
/// assert_eq!(stats.tokens_seen, 4);
/// ```
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    graph: WeightedDirectedGraph<String>,
    stats: BuildStats,
}

impl CorpusBuilder {
    /// Creates a builder with an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests every line from an in-memory line source.
    pub fn with_lines<I, S>(mut self, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.ingest_line(line.as_ref())?;
        }
        Ok(self)
    }

    /// Ingests every line from a buffered reader.
    ///
    /// Any read failure is reported as [`Error::CorpusUnavailable`].
    pub fn with_reader<R: BufRead>(self, reader: R) -> Result<Self> {
        self.read_lines(reader, None)
    }

    /// Ingests every line of the file at `path`.
    ///
    /// Failure to open or read the file is reported as
    /// [`Error::CorpusUnavailable`] carrying the path.
    pub fn with_path(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::corpus_io_with_path(e, path))?;
        log::info!("Reading corpus from {}", path.display());
        self.read_lines(BufReader::new(file), Some(path))
    }

    /// Finishes the build, returning the graph and its statistics.
    pub fn build(self) -> (WeightedDirectedGraph<String>, BuildStats) {
        self.graph.check_rep();
        log::debug!(
            "Built affinity graph: {} lines, {} tokens, {} vertices, {} edges",
            self.stats.lines_read,
            self.stats.tokens_seen,
            self.stats.vertices_created,
            self.stats.edges_created
        );
        (self.graph, self.stats)
    }

    fn read_lines<R: BufRead>(mut self, reader: R, path: Option<&Path>) -> Result<Self> {
        for line in reader.lines() {
            let line = line.map_err(|e| match path {
                Some(p) => Error::corpus_io_with_path(e, p),
                None => Error::corpus_io(e),
            })?;
            self.ingest_line(&line)?;
        }
        Ok(self)
    }

    /// Adds one corpus line to the graph.
    fn ingest_line(&mut self, line: &str) -> Result<()> {
        self.stats.lines_read += 1;

        let mut previous: Option<String> = None;
        for word in split_words(line) {
            let word = fold_case(word);
            debug_assert!(!word.is_empty_label());
            self.stats.tokens_seen += 1;

            if self.graph.add_vertex(word.clone())? {
                self.stats.vertices_created += 1;
            }

            if let Some(prev) = previous.take() {
                if self.graph.increment_edge(prev, word.clone())? == 1 {
                    self.stats.edges_created += 1;
                }
                self.stats.adjacencies_counted += 1;
            }

            previous = Some(word);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
