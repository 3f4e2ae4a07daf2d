//! Graph-based poetry generation.
//!
//! A [`GraphPoet`] owns the affinity graph built from its corpus. For each
//! pair of adjacent input words it inserts the best bridge word, if any.
//! After construction the graph is read-only, so one poet can be shared
//! across threads without locking.

use graphpoet_core::util::words::{fold_case, split_words};
use graphpoet_core::{PoetConfig, Result};
use graphpoet_graph::{BuildStats, CorpusBuilder, WeightedDirectedGraph, find_bridge};
use std::fmt;
use std::io::BufRead;
use std::path::Path;

/// A graph-based poetry generator.
///
/// # Example
///
/// ```rust
/// use graphpoet::GraphPoet;
///
/// let poet = GraphPoet::from_lines(["This is a test of the", "Mugar Omni Theater sound system."])
///     .unwrap();
///
/// assert_eq!(poet.poem("Test the system."), "Test of the system.");
/// ```
#[derive(Clone, Debug)]
pub struct GraphPoet {
    graph: WeightedDirectedGraph<String>,
    stats: BuildStats,
}

impl GraphPoet {
    /// Create a poet from the corpus file at `path`.
    ///
    /// Fails with `CorpusUnavailable` if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        CorpusBuilder::new()
            .with_path(path)
            .map(Self::from_builder)
    }

    /// Create a poet from a buffered corpus reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        CorpusBuilder::new()
            .with_reader(reader)
            .map(Self::from_builder)
    }

    /// Create a poet from in-memory corpus lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CorpusBuilder::new()
            .with_lines(lines)
            .map(Self::from_builder)
    }

    /// Create a poet from the corpus named in `config`.
    pub fn from_config(config: &PoetConfig) -> Result<Self> {
        Self::from_path(config.corpus_path()?)
    }

    fn from_builder(builder: CorpusBuilder) -> Self {
        let (graph, stats) = builder.build();
        Self { graph, stats }
    }

    /// The affinity graph, read-only.
    pub fn graph(&self) -> &WeightedDirectedGraph<String> {
        &self.graph
    }

    /// Statistics from building the graph.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Find the bridge word between two input words.
    ///
    /// Both words are case-folded before the lookup; the result is the
    /// stored (lower-case) vertex label.
    pub fn bridge(&self, w1: &str, w2: &str) -> Option<String> {
        find_bridge(&self.graph, fold_case(w1).as_str(), fold_case(w2).as_str())
            .map(|bridge| bridge.word)
    }

    /// Generate a poem.
    ///
    /// The input is split on whitespace and each word keeps its original
    /// casing. Between every adjacent pair the best bridge word is inserted
    /// in lower case. Words are joined with single spaces, so an empty or
    /// all-whitespace input yields an empty poem.
    pub fn poem(&self, input: &str) -> String {
        let words: Vec<&str> = split_words(input).collect();
        let Some(last) = words.last() else {
            return String::new();
        };

        let mut poem = String::with_capacity(input.len() * 2);
        for window in words.windows(2) {
            if let [w1, w2] = window {
                poem.push_str(w1);
                poem.push(' ');
                if let Some(bridge) = self.bridge(w1, w2) {
                    log::trace!("Bridging {w1:?} -> {w2:?} with {bridge:?}");
                    poem.push_str(&bridge);
                    poem.push(' ');
                }
            }
        }
        poem.push_str(last);
        poem
    }
}

impl fmt::Display for GraphPoet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphPoet [{}]", self.graph)
    }
}

// ============================================================================
// Tests
// ============================================================================
