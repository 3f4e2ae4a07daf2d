//! Bridge-word search over word-affinity graphs.
//!
//! A bridge between `w1` and `w2` is a vertex `c` with edges `w1 → c` and
//! `c → w2`. Its score is `weight(w1 → c) + weight(c → w2)`.
//!
//! # Tie-break
//!
//! Candidates are visited in ascending label order (the iteration order of
//! [`WeightedDirectedGraph::outgoing`]) and the best candidate is replaced
//! only by a strictly greater score. Among equally scored candidates the
//! lexicographically smallest label therefore wins, on every run.

use crate::{VertexLabel, Weight, WeightedDirectedGraph};
use serde::Serialize;
use std::borrow::Borrow;
use std::hash::Hash;

// ============================================================================
// Result types
// ============================================================================

/// A bridge candidate and its combined two-edge weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BridgeWord<L = String> {
    /// The bridging vertex label.
    pub word: L,
    /// `weight(w1 → word) + weight(word → w2)`.
    pub weight: Weight,
}

// ============================================================================
// Algorithms
// ============================================================================

/// Find the best bridge word between `w1` and `w2`.
///
/// Returns `None` if either word is not a vertex or no two-edge path
/// `w1 → c → w2` exists. Ties are broken as described in the module docs.
///
/// # Example
///
/// ```rust
/// use graphpoet_graph::{CorpusBuilder, algorithms::find_bridge};
///
/// let (graph, _) = CorpusBuilder::new()
///     .with_lines(["This is a test of the system"])
///     .unwrap()
///     .build();
///
/// let bridge = find_bridge(&graph, "test", "the").unwrap();
/// assert_eq!(bridge.word, "of");
/// assert_eq!(bridge.weight, 2);
/// assert!(find_bridge(&graph, "the", "test").is_none());
/// ```
pub fn find_bridge<L, Q>(graph: &WeightedDirectedGraph<L>, w1: &Q, w2: &Q) -> Option<BridgeWord<L>>
where
    L: VertexLabel + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    if !graph.contains_vertex(w1) || !graph.contains_vertex(w2) {
        return None;
    }

    let into_w2 = graph.incoming(w2);
    let mut best: Option<BridgeWord<L>> = None;

    for (candidate, first_leg) in graph.outgoing(w1) {
        let Some(&second_leg) = into_w2.get::<L>(&candidate) else {
            continue;
        };
        let combined = first_leg.saturating_add(second_leg);
        if best.as_ref().is_none_or(|b| combined > b.weight) {
            best = Some(BridgeWord {
                word: candidate,
                weight: combined,
            });
        }
    }

    if let Some(ref bridge) = best {
        log::trace!("Bridge selected: {} (weight {})", bridge.word, bridge.weight);
    }
    best
}

/// List every bridge word between `w1` and `w2`.
///
/// Sorted by combined weight (descending), ties in ascending label order,
/// so the first element is always the result of [`find_bridge`]. Empty when
/// `find_bridge` would return `None`.
pub fn bridge_candidates<L, Q>(
    graph: &WeightedDirectedGraph<L>,
    w1: &Q,
    w2: &Q,
) -> Vec<BridgeWord<L>>
where
    L: VertexLabel + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let into_w2 = graph.incoming(w2);

    let mut candidates: Vec<BridgeWord<L>> = graph
        .outgoing(w1)
        .into_iter()
        .filter_map(|(candidate, first_leg)| {
            let second_leg = *into_w2.get::<L>(&candidate)?;
            Some(BridgeWord {
                word: candidate,
                weight: first_leg.saturating_add(second_leg),
            })
        })
        .collect();

    candidates.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.word.cmp(&b.word)));
    candidates
}

// ============================================================================
// Tests
// ============================================================================
