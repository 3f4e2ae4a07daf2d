//! Common fixtures and helpers for GraphPoet integration tests.

use graphpoet::GraphPoet;
use std::path::PathBuf;

/// Path to a corpus file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Builds a poet from a named fixture corpus.
pub fn poet_from_fixture(name: &str) -> GraphPoet {
    GraphPoet::from_path(fixture(name)).expect("fixture corpus should load")
}
