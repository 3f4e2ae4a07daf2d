//! Poet configuration.
//!
//! Configuration is stored as TOML:
//!
//! ```toml
//! [corpus]
//! path = "corpus.txt"
//! ```
//!
//! A relative corpus path is resolved against the directory of the config
//! file it was loaded from.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the corpus text comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to a UTF-8 text file, one corpus line per line.
    pub path: Option<PathBuf>,
}

/// Top-level GraphPoet configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoetConfig {
    /// Corpus source settings.
    pub corpus: CorpusConfig,
}

impl PoetConfig {
    /// Creates a configuration pointing at the given corpus file.
    pub fn with_corpus_path(path: impl Into<PathBuf>) -> Self {
        Self {
            corpus: CorpusConfig {
                path: Some(path.into()),
            },
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// A relative `corpus.path` is rebased onto the config file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(corpus) = config.corpus.path.as_mut() {
            if corpus.is_relative() {
                if let Some(base) = path.parent() {
                    *corpus = base.join(&*corpus);
                }
            }
        }

        log::debug!("Loaded poet config from {}", path.display());
        Ok(config)
    }

    /// Serializes the configuration to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Returns the configured corpus path.
    pub fn corpus_path(&self) -> Result<&Path> {
        self.corpus
            .path
            .as_deref()
            .ok_or_else(|| Error::config("corpus.path is not set"))
    }
}
