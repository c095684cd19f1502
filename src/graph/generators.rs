use crate::graph::{AdjacencyList, MutableGraph, UndirectedGraph, VertexId};
use rand::prelude::*;

/// Generates a connected graph with `n` vertices labeled `0..n`.
///
/// A random spanning tree is laid down first (vertex `i` attaches to a random
/// earlier vertex), then up to `extra_edges` additional random edges are added.
/// All edge weights are distinct, so the minimum spanning tree is unique.
pub fn random_connected_graph<R: Rng>(
    n: usize,
    extra_edges: usize,
    rng: &mut R,
) -> AdjacencyList<usize, f64> {
    let mut graph = AdjacencyList::with_capacity(n);
    let ids: Vec<VertexId> = (0..n).map(|label| graph.add_label(label)).collect();
    if n < 2 {
        return graph;
    }

    // Complete graph caps how many extra edges can exist
    let max_edges = n * (n - 1) / 2;
    let target = (n - 1 + extra_edges).min(max_edges);

    // Distinct weights: a shuffled pool of 1..=target
    let mut weights: Vec<f64> = (1..=target).map(|w| w as f64).collect();
    weights.shuffle(rng);

    for i in 1..n {
        let parent = rng.gen_range(0..i);
        if let Some(weight) = weights.pop() {
            graph.add_edge(ids[i], ids[parent], weight);
        }
    }

    while graph.edge_count() < target {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || graph.has_edge(ids[u], ids[v]) {
            continue;
        }
        if let Some(weight) = weights.pop() {
            graph.add_edge(ids[u], ids[v], weight);
        }
    }

    graph
}

/// Generates a 2D grid graph with `width * height` vertices and 4-connectivity.
/// Vertex `(x, y)` is labeled `y * width + x`; every edge carries `weight`.
pub fn grid_graph(width: usize, height: usize, weight: f64) -> AdjacencyList<usize, f64> {
    let mut graph = AdjacencyList::with_capacity(width * height);
    let ids: Vec<VertexId> = (0..width * height)
        .map(|label| graph.add_label(label))
        .collect();

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = ids[get_index(x, y)];
            if x + 1 < width {
                graph.add_edge(current, ids[get_index(x + 1, y)], weight);
            }
            if y + 1 < height {
                graph.add_edge(current, ids[get_index(x, y + 1)], weight);
            }
        }
    }

    graph
}
