//! Core graph types for word-affinity graphs.
//!
//! [`WeightedDirectedGraph`] is a labeled, weighted, directed graph with at
//! most one edge per ordered vertex pair. Setting an edge replaces its weight
//! rather than adding a parallel edge.

use graphpoet_core::{Error, Result};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

/// Edge weight: the number of observed adjacencies.
pub type Weight = u64;

// ============================================================================
// VertexLabel trait
// ============================================================================

/// A type usable as a vertex label.
///
/// Labels are ordered so that every map the graph hands out iterates in a
/// stable, label-sorted order.
pub trait VertexLabel: Clone + Eq + Hash + Ord + fmt::Display {
    /// Returns `true` if this label is empty and must be rejected.
    fn is_empty_label(&self) -> bool;
}

impl VertexLabel for String {
    fn is_empty_label(&self) -> bool {
        self.is_empty()
    }
}

impl VertexLabel for &str {
    fn is_empty_label(&self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// WeightedDirectedGraph struct
// ============================================================================

/// Weighted directed graph keyed by vertex label.
///
/// Wraps a petgraph `DiGraph` with a label → `NodeIndex` lookup table.
/// Vertices are never removed, so indices stay valid for the graph's life.
///
/// Invariants, enforced by the mutation API:
/// - no vertex label is empty
/// - every stored edge weight is at least 1
///
/// # Example
///
/// ```rust
/// use graphpoet_graph::WeightedDirectedGraph;
///
/// let mut graph: WeightedDirectedGraph<String> = WeightedDirectedGraph::new();
/// graph.increment_edge("a".into(), "b".into()).unwrap();
/// graph.increment_edge("a".into(), "b".into()).unwrap();
///
/// assert_eq!(graph.weight("a", "b"), 2);
/// assert_eq!(graph.weight("b", "a"), 0);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedDirectedGraph<L: VertexLabel> {
    graph: DiGraph<L, Weight>,
    indices: HashMap<L, NodeIndex>,
}

impl<L: VertexLabel> WeightedDirectedGraph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a vertex exists.
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.contains_key(label)
    }

    /// Returns all vertex labels in sorted order.
    pub fn vertices(&self) -> BTreeSet<L> {
        self.indices.keys().cloned().collect()
    }

    /// Returns an iterator over all edges as `(source, target, weight)`.
    ///
    /// Iteration order is unspecified.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&L, &L, Weight)> {
        self.graph.edge_references().map(|e| {
            (
                &self.graph[e.source()],
                &self.graph[e.target()],
                *e.weight(),
            )
        })
    }

    // ========================================================================
    // Mutation API
    // ========================================================================

    /// Add a vertex.
    ///
    /// Returns `Ok(true)` if the vertex was newly added and `Ok(false)` if it
    /// was already present. Empty labels are rejected with
    /// [`Error::EmptyLabel`].
    pub fn add_vertex(&mut self, label: L) -> Result<bool> {
        if label.is_empty_label() {
            return Err(Error::EmptyLabel);
        }
        if self.indices.contains_key(&label) {
            return Ok(false);
        }
        self.insert_vertex(label);
        Ok(true)
    }

    /// Set the weight of the edge `source → target`.
    ///
    /// Missing vertices are created. A weight of 0 removes the edge if one
    /// exists and never stores a zero-weight edge. Returns the weight the
    /// edge had before the call (0 if there was none).
    pub fn set_edge(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        let from = self.ensure_vertex(source)?;
        let to = self.ensure_vertex(target)?;

        match self.graph.find_edge(from, to) {
            Some(edge) => {
                let previous = self.graph[edge];
                if weight == 0 {
                    self.graph.remove_edge(edge);
                } else {
                    self.graph[edge] = weight;
                }
                Ok(previous)
            }
            None => {
                if weight > 0 {
                    self.graph.add_edge(from, to, weight);
                }
                Ok(0)
            }
        }
    }

    /// Increment the weight of `source → target` by one, inserting the edge
    /// with weight 1 if absent.
    ///
    /// Missing vertices are created. Returns the new weight, which saturates
    /// at `Weight::MAX`.
    pub fn increment_edge(&mut self, source: L, target: L) -> Result<Weight> {
        let from = self.ensure_vertex(source)?;
        let to = self.ensure_vertex(target)?;

        match self.graph.find_edge(from, to) {
            Some(edge) => {
                let weight = &mut self.graph[edge];
                *weight = weight.saturating_add(1);
                Ok(*weight)
            }
            None => {
                self.graph.add_edge(from, to, 1);
                Ok(1)
            }
        }
    }

    fn ensure_vertex(&mut self, label: L) -> Result<NodeIndex> {
        if label.is_empty_label() {
            return Err(Error::EmptyLabel);
        }
        match self.indices.get(&label) {
            Some(&idx) => Ok(idx),
            None => Ok(self.insert_vertex(label)),
        }
    }

    fn insert_vertex(&mut self, label: L) -> NodeIndex {
        let idx = self.graph.add_node(label.clone());
        self.indices.insert(label, idx);
        idx
    }

    // ========================================================================
    // Query API
    // ========================================================================

    /// Returns the weight of `source → target`, or 0 if there is no such edge.
    pub fn weight<Q>(&self, source: &Q, target: &Q) -> Weight
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(&from), Some(&to)) = (self.indices.get(source), self.indices.get(target)) else {
            return 0;
        };
        self.graph
            .find_edge(from, to)
            .map(|edge| self.graph[edge])
            .unwrap_or(0)
    }

    /// Outgoing edges of `vertex` as `target → weight`, sorted by target.
    ///
    /// Empty if the vertex is unknown or has no outgoing edges.
    pub fn outgoing<Q>(&self, vertex: &Q) -> BTreeMap<L, Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors(vertex, Direction::Outgoing)
    }

    /// Incoming edges of `vertex` as `source → weight`, sorted by source.
    ///
    /// Empty if the vertex is unknown or has no incoming edges.
    pub fn incoming<Q>(&self, vertex: &Q) -> BTreeMap<L, Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors(vertex, Direction::Incoming)
    }

    fn neighbors<Q>(&self, vertex: &Q, direction: Direction) -> BTreeMap<L, Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&idx) = self.indices.get(vertex) else {
            return BTreeMap::new();
        };

        self.graph
            .edges_directed(idx, direction)
            .map(|edge_ref| {
                let neighbor = match direction {
                    Direction::Outgoing => edge_ref.target(),
                    Direction::Incoming => edge_ref.source(),
                };
                (self.graph[neighbor].clone(), *edge_ref.weight())
            })
            .collect()
    }

    /// Assert the representation invariant in debug builds.
    ///
    /// Compiles to nothing in release builds.
    pub fn check_rep(&self) {
        debug_assert_eq!(self.graph.node_count(), self.indices.len());
        for idx in self.graph.node_indices() {
            let label = &self.graph[idx];
            debug_assert!(!label.is_empty_label(), "graph contains an empty vertex");
            debug_assert_eq!(self.indices.get(label), Some(&idx));
        }
        for edge in self.graph.edge_references() {
            debug_assert!(
                *edge.weight() > 0,
                "graph contains a non-positive edge weight"
            );
        }
    }
}

impl<L: VertexLabel> Default for WeightedDirectedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: VertexLabel> fmt::Display for WeightedDirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WeightedDirectedGraph({} vertices, {} edges)",
            self.vertex_count(),
            self.edge_count()
        )?;

        let mut edges: Vec<_> = self.iter_edges().collect();
        edges.sort();
        for (source, target, weight) in edges {
            write!(f, "\n  {source} -> {target} ({weight})")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
