//! Word-affinity graph infrastructure for GraphPoet.
//!
//! - [`types`]: [`WeightedDirectedGraph`], a petgraph-backed labeled graph
//!   with integer edge weights
//! - [`builder`]: [`CorpusBuilder`], which counts word adjacencies in corpus
//!   lines
//! - [`algorithms`]: bridge-word search with a deterministic tie-break

#![warn(missing_docs)]

pub mod algorithms;
pub mod builder;
pub mod types;

pub use algorithms::{BridgeWord, bridge_candidates, find_bridge};
pub use builder::{BuildStats, CorpusBuilder};
pub use types::{VertexLabel, Weight, WeightedDirectedGraph};
