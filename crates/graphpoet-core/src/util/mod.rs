//! Utility modules for word handling.
//!
//! # Modules
//!
//! - [`words`]: Whitespace tokenization and case folding

pub mod words;
