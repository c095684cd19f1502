use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::graph::{Edge, UndirectedGraph, VertexId};
use crate::{Error, Result};

/// How much of the graph a spanning tree covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeCoverage {
    /// The tree has `vertex_count - 1` edges (or the graph is empty)
    Complete,
    /// The graph is disconnected; this many edges are missing from a full tree
    Partial { missing_edges: usize },
}

/// Result of a minimum spanning tree/forest computation
#[derive(Debug, Clone)]
pub struct SpanningTree<W>
where
    W: Float + Debug,
{
    /// Edges in the order they were accepted
    pub edges: Vec<Edge<W>>,

    /// Number of vertices in the graph the tree was computed on
    pub vertex_count: usize,
}

impl<W> SpanningTree<W>
where
    W: Float + Debug,
{
    pub fn new(edges: Vec<Edge<W>>, vertex_count: usize) -> Self {
        SpanningTree {
            edges,
            vertex_count,
        }
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> W {
        self.edges
            .iter()
            .fold(W::zero(), |total, edge| total + edge.weight())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge count a spanning tree of the whole graph would have
    pub fn expected_edges(&self) -> usize {
        self.vertex_count.saturating_sub(1)
    }

    pub fn coverage(&self) -> TreeCoverage {
        let expected = self.expected_edges();
        if self.edges.len() >= expected {
            TreeCoverage::Complete
        } else {
            TreeCoverage::Partial {
                missing_edges: expected - self.edges.len(),
            }
        }
    }

    /// Returns true if the tree spans every vertex of the graph
    pub fn is_spanning(&self) -> bool {
        self.coverage() == TreeCoverage::Complete
    }

    /// Fails with [`Error::SpanningTreeIncomplete`] unless the tree spans the graph
    pub fn into_complete(self) -> Result<Self> {
        match self.coverage() {
            TreeCoverage::Complete => Ok(self),
            TreeCoverage::Partial { .. } => Err(Error::SpanningTreeIncomplete {
                expected: self.expected_edges(),
                found: self.edges.len(),
            }),
        }
    }

    /// Vertices touched by at least one tree edge
    pub fn covered_vertices(&self) -> HashSet<VertexId> {
        self.edges
            .iter()
            .flat_map(|edge| {
                let (a, b) = edge.vertices();
                [a, b]
            })
            .collect()
    }
}

/// Trait for minimum spanning tree algorithms
pub trait SpanningTreeAlgorithm<T, W, G>
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
    G: UndirectedGraph<T, W>,
{
    /// Compute a minimum spanning tree (or forest) of the graph
    fn compute_spanning_tree(&self, graph: &G) -> Result<SpanningTree<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// One row of the shortest path table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEntry<W> {
    /// Best known distance from the source; infinite if unreachable
    pub min_distance: W,

    /// True once the distance is final
    pub visited: bool,

    /// Predecessor on the shortest path; `None` for the source and unreachable vertices
    pub precedent: Option<VertexId>,
}

impl<W: Float> PathEntry<W> {
    /// An entry for a vertex not reached yet
    pub fn unreached() -> Self {
        PathEntry {
            min_distance: W::infinity(),
            visited: false,
            precedent: None,
        }
    }
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distance table, indexed by vertex id
    pub entries: Vec<PathEntry<W>>,

    /// Source vertex id
    pub source: VertexId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Returns the table row for a vertex
    pub fn entry(&self, vertex: VertexId) -> Option<&PathEntry<W>> {
        self.entries.get(vertex.index())
    }

    /// Shortest distance from the source, or `None` if unreachable or unknown
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.entry(vertex)
            .map(|entry| entry.min_distance)
            .filter(|distance| distance.is_finite())
    }

    /// Predecessor of `vertex` on its shortest path
    pub fn precedent(&self, vertex: VertexId) -> Option<VertexId> {
        self.entry(vertex).and_then(|entry| entry.precedent)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.min_distance.is_finite())
            .count()
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            let pred = self.precedent(current)?;
            path.push(pred);
            current = pred;

            // A well-formed table never revisits a vertex
            if path.len() > self.entries.len() {
                log::warn!("cycle detected while rebuilding path to {}", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<T, W, G>
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
    G: UndirectedGraph<T, W>,
{
    /// Compute shortest paths from the vertex labeled `source` to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &T) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
