//! Integration tests for building a poet from a config file.

use crate::common::fixture;
use graphpoet::{Error, GraphPoet, PoetConfig};
use tempfile::tempdir;

#[test]
fn test_poet_from_config_file() {
    let dir = tempdir().unwrap();
    std::fs::copy(fixture("basic-corpus.txt"), dir.path().join("corpus.txt")).unwrap();

    let config_path = dir.path().join("graphpoet.toml");
    std::fs::write(&config_path, "[corpus]\npath = \"corpus.txt\"\n").unwrap();

    let config = PoetConfig::load(&config_path).unwrap();
    let poet = GraphPoet::from_config(&config).unwrap();

    assert_eq!(poet.poem("Test the system."), "Test of the system.");
}

#[test]
fn test_poet_from_config_missing_corpus() {
    let config = PoetConfig::with_corpus_path("/nonexistent/graphpoet/corpus.txt");
    let result = GraphPoet::from_config(&config);
    assert!(matches!(result, Err(Error::CorpusUnavailable { .. })));
}

#[test]
fn test_poet_from_config_without_path() {
    let config = PoetConfig::from_toml_str("[corpus]\n").unwrap();
    let result = GraphPoet::from_config(&config);
    assert!(matches!(result, Err(Error::Config { .. })));
}
