#![allow(dead_code)]

use graph_toolkit::{AdjacencyList, MutableGraph, VertexId};

/// Edges of the classic 9-vertex sample graph
pub const SAMPLE_EDGES: [(&str, &str, f64); 14] = [
    ("0", "1", 4.0),
    ("0", "7", 8.0),
    ("1", "2", 8.0),
    ("1", "7", 11.0),
    ("2", "8", 2.0),
    ("7", "8", 7.0),
    ("6", "8", 6.0),
    ("6", "7", 1.0),
    ("2", "3", 7.0),
    ("2", "5", 4.0),
    ("6", "5", 2.0),
    ("3", "5", 14.0),
    ("3", "4", 9.0),
    ("4", "5", 10.0),
];

pub fn sample_graph() -> AdjacencyList<&'static str, f64> {
    let mut graph = AdjacencyList::new();
    for label in ["0", "1", "2", "3", "4", "5", "6", "7", "8"] {
        graph.add_label(label);
    }
    for (a, b, weight) in SAMPLE_EDGES {
        assert!(graph.connect(&a, &b, weight), "failed to add {}-{}", a, b);
    }
    graph
}

/// Two triangles with no edge between them: {a, b, c} and {x, y, z}
pub fn two_islands() -> AdjacencyList<&'static str, f64> {
    let mut graph = AdjacencyList::new();
    let ids: Vec<VertexId> = ["a", "b", "c", "x", "y", "z"]
        .into_iter()
        .map(|label| graph.add_label(label))
        .collect();
    graph.add_edge(ids[0], ids[1], 1.0);
    graph.add_edge(ids[1], ids[2], 2.0);
    graph.add_edge(ids[0], ids[2], 3.0);
    graph.add_edge(ids[3], ids[4], 1.5);
    graph.add_edge(ids[4], ids[5], 2.5);
    graph.add_edge(ids[3], ids[5], 3.5);
    graph
}
