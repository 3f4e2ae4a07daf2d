//! GraphPoet — umbrella crate.
//!
//! Re-exports the GraphPoet components and provides [`GraphPoet`], the
//! poem generator that owns a corpus affinity graph.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod poet;

pub use graphpoet_core as core;
pub use graphpoet_graph as graph;

pub use graphpoet_core::{Error, PoetConfig, Result};
pub use poet::GraphPoet;
