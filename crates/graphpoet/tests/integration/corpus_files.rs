//! Integration tests for reading corpora from disk and streams.

use crate::common::fixture;
use graphpoet::{Error, GraphPoet};
use std::io::{BufReader, Cursor};
use tempfile::tempdir;

#[test]
fn test_missing_corpus_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.txt");

    let err = GraphPoet::from_path(&missing).unwrap_err();
    assert!(err.is_corpus_error());
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_directory_as_corpus_fails() {
    let dir = tempdir().unwrap();
    let result = GraphPoet::from_path(dir.path());
    assert!(matches!(result, Err(Error::CorpusUnavailable { .. })));
}

#[test]
fn test_empty_corpus_file() {
    let poet = GraphPoet::from_path(fixture("empty.txt")).unwrap();
    assert!(poet.graph().is_empty());
    assert_eq!(poet.stats().lines_read, 0);
    assert_eq!(poet.poem("Hello world"), "Hello world");
}

#[test]
fn test_reader_and_path_agree() {
    let path = fixture("basic-corpus.txt");
    let from_path = GraphPoet::from_path(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let from_reader = GraphPoet::from_reader(BufReader::new(Cursor::new(content))).unwrap();

    assert_eq!(from_path.stats(), from_reader.stats());
    assert_eq!(from_path.graph().vertices(), from_reader.graph().vertices());
    assert_eq!(from_path.to_string(), from_reader.to_string());
}

#[test]
fn test_corpus_lines_do_not_join() {
    let dir = tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    std::fs::write(&corpus, "alpha beta\ngamma delta\n").unwrap();

    let poet = GraphPoet::from_path(&corpus).unwrap();
    assert_eq!(poet.graph().weight("beta", "gamma"), 0);
    assert_eq!(poet.poem("alpha gamma"), "alpha gamma");
}

#[test]
fn test_weights_accumulate_across_lines() {
    let dir = tempdir().unwrap();
    let corpus = dir.path().join("corpus.txt");
    std::fs::write(&corpus, "a b a b\nA B\n").unwrap();

    let poet = GraphPoet::from_path(&corpus).unwrap();
    assert_eq!(poet.graph().weight("a", "b"), 3);
    assert_eq!(poet.graph().weight("b", "a"), 1);
    assert_eq!(poet.graph().outgoing("a").len(), 1);
    assert_eq!(poet.graph().incoming("a").len(), 1);
}
