//! Graph Toolkit - undirected weighted graphs and classic algorithms on them
//!
//! The crate provides an adjacency-list graph over hashable vertex labels, a
//! union-find (disjoint sets) structure, and three solvers built on top:
//! Kruskal's and Prim's minimum spanning tree algorithms and Dijkstra's
//! single-source shortest paths.
//!
//! ```
//! use graph_toolkit::{AdjacencyList, Kruskal, MutableGraph, SpanningTreeAlgorithm};
//!
//! let mut graph: AdjacencyList<&str, f64> = AdjacencyList::new();
//! let a = graph.add_label("a");
//! let b = graph.add_label("b");
//! let c = graph.add_label("c");
//! graph.add_edge(a, b, 1.0);
//! graph.add_edge(b, c, 2.0);
//! graph.add_edge(a, c, 5.0);
//!
//! let tree = Kruskal::new().compute_spanning_tree(&graph).unwrap();
//! assert_eq!(tree.total_weight(), 3.0);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod hash;
pub mod io;

pub use algorithm::{
    dijkstra::Dijkstra, kruskal::Kruskal, prim::Prim, PathEntry, ShortestPathAlgorithm,
    ShortestPathResult, SpanningTree, SpanningTreeAlgorithm, TreeCoverage,
};
pub use data_structures::{DisjointSets, MinPriorityQueue};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, Edge, MutableGraph, UndirectedGraph, Vertex, VertexId};
pub use hash::{make_hash, make_symmetric_hash};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    UnknownVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Spanning tree incomplete: expected {expected} edges, found {found}")]
    SpanningTreeIncomplete { expected: usize, found: usize },

    #[error("Weight is not a finite number: {0}")]
    NonFiniteWeight(f64),

    #[error("Duplicate vertex ID: {0}")]
    DuplicateVertex(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
