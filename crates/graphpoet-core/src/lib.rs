//! GraphPoet Core — shared errors, configuration, and word utilities.
//!
//! This crate provides the foundational types used across all GraphPoet
//! crates. It has no internal GraphPoet dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: TOML-backed poet configuration
//! - [`util`]: Word splitting and case folding

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::{CorpusConfig, PoetConfig};
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::words::{fold_case, split_words};
