mod common;

use graph_toolkit::graph::generators::{grid_graph, random_connected_graph};
use graph_toolkit::{
    AdjacencyList, Error, Kruskal, MutableGraph, Prim, SpanningTree, SpanningTreeAlgorithm,
    TreeCoverage, UndirectedGraph, VertexId,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Minimum spanning tree weight by trying every edge subset of size n - 1
fn brute_force_mst_weight(graph: &AdjacencyList<&'static str, f64>) -> f64 {
    let edges = graph.edge_list();
    let n = graph.vertex_count();
    let mut best = f64::INFINITY;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }
        let mut sets: graph_toolkit::DisjointSets<VertexId> =
            graph.vertices().map(|(id, _)| id).collect();
        let mut weight = 0.0;
        let mut acyclic = true;
        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (a, b) = edge.vertices();
            if sets.same_subset(&a, &b) {
                acyclic = false;
                break;
            }
            sets.merge(&a, &b);
            weight += edge.weight();
        }
        if acyclic && weight < best {
            best = weight;
        }
    }

    best
}

fn assert_is_tree(tree: &SpanningTree<f64>, vertex_count: usize) {
    assert_eq!(tree.len(), vertex_count - 1);
    assert_eq!(tree.covered_vertices().len(), vertex_count);
    assert!(tree.is_spanning());
}

#[test]
fn test_kruskal_on_sample_graph() {
    let graph = common::sample_graph();
    let tree = Kruskal::new().compute_spanning_tree(&graph).unwrap();

    assert_is_tree(&tree, 9);
    assert_eq!(tree.total_weight(), 37.0);

    // Accepted in ascending weight order
    let weights: Vec<f64> = tree.edges.iter().map(|e| e.weight()).collect();
    let mut sorted = weights.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(weights, sorted);
}

#[test]
fn test_kruskal_matches_brute_force() {
    let mut graph: AdjacencyList<&str, f64> = AdjacencyList::new();
    let v: Vec<VertexId> = ["a", "b", "c", "d", "e"]
        .into_iter()
        .map(|label| graph.add_label(label))
        .collect();
    graph.add_edge(v[0], v[1], 3.0);
    graph.add_edge(v[0], v[2], 1.0);
    graph.add_edge(v[1], v[2], 7.0);
    graph.add_edge(v[1], v[3], 5.0);
    graph.add_edge(v[2], v[3], 2.0);
    graph.add_edge(v[3], v[4], 7.0);
    graph.add_edge(v[2], v[4], 8.0);
    graph.add_edge(v[0], v[4], 9.0);

    let tree = Kruskal::new().compute_spanning_tree(&graph).unwrap();
    assert_is_tree(&tree, 5);
    assert_eq!(tree.total_weight(), brute_force_mst_weight(&graph));
    assert_eq!(tree.total_weight(), 13.0);
}

#[test]
fn test_kruskal_early_exit_keeps_bridging_edge() {
    // Sorted edges pair up {a, b} and {c, d} first, so all four vertices are
    // tracked before the bridge b-c is scanned
    let mut graph: AdjacencyList<&str, f64> = AdjacencyList::new();
    let v: Vec<VertexId> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|label| graph.add_label(label))
        .collect();
    graph.add_edge(v[0], v[1], 1.0);
    graph.add_edge(v[2], v[3], 2.0);
    graph.add_edge(v[1], v[2], 3.0);

    let tree = Kruskal::new().compute_spanning_tree(&graph).unwrap();
    assert_is_tree(&tree, 4);
    assert_eq!(tree.total_weight(), 6.0);
}

#[test]
fn test_kruskal_without_early_exit_gives_same_tree() {
    let graph = common::sample_graph();
    let eager = Kruskal::new().compute_spanning_tree(&graph).unwrap();
    let full = Kruskal::new()
        .with_early_exit(false)
        .compute_spanning_tree(&graph)
        .unwrap();
    assert_eq!(eager.edges, full.edges);
}

#[test]
fn test_kruskal_disconnected_graph_yields_forest() {
    let graph = common::two_islands();
    let forest = Kruskal::new().compute_spanning_tree(&graph).unwrap();

    assert_eq!(forest.len(), 4);
    assert_eq!(forest.total_weight(), 1.0 + 2.0 + 1.5 + 2.5);
    assert_eq!(forest.coverage(), TreeCoverage::Partial { missing_edges: 1 });
}

#[test]
fn test_prim_on_sample_graph() {
    let graph = common::sample_graph();
    let tree = Prim::new().compute_spanning_tree(&graph).unwrap();

    assert_is_tree(&tree, 9);
    assert_eq!(tree.total_weight(), 37.0);
}

#[test]
fn test_prim_from_every_start_vertex() {
    let graph = common::sample_graph();
    for (id, _) in graph.vertices() {
        let tree = Prim::new().with_start(id).compute_spanning_tree(&graph).unwrap();
        assert_is_tree(&tree, 9);
        assert_eq!(tree.total_weight(), 37.0, "start vertex {}", id);
    }
}

#[test]
fn test_prim_and_kruskal_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in [2, 5, 17, 60] {
        let graph = random_connected_graph(n, n * 2, &mut rng);
        let kruskal = Kruskal::new().compute_spanning_tree(&graph).unwrap();
        let prim = Prim::new().compute_spanning_tree(&graph).unwrap();

        assert_eq!(kruskal.len(), n - 1);
        assert_eq!(prim.len(), n - 1);
        assert_eq!(kruskal.total_weight(), prim.total_weight());

        // Distinct weights: the minimum spanning tree is unique
        let kruskal_edges: std::collections::HashSet<_> = kruskal.edges.iter().copied().collect();
        let prim_edges: std::collections::HashSet<_> = prim.edges.iter().copied().collect();
        assert_eq!(kruskal_edges, prim_edges);
    }
}

#[test]
fn test_grid_spanning_tree() {
    let graph = grid_graph(6, 4, 2.0);
    let kruskal = Kruskal::new().compute_spanning_tree(&graph).unwrap();
    let prim = Prim::new().compute_spanning_tree(&graph).unwrap();
    assert_eq!(kruskal.len(), 23);
    assert_eq!(prim.len(), 23);
    assert_eq!(kruskal.total_weight(), 46.0);
    assert_eq!(prim.total_weight(), 46.0);
}

#[test]
fn test_prim_reports_disconnected_graph() {
    let graph = common::two_islands();
    let tree = Prim::new().compute_spanning_tree(&graph).unwrap();

    // Only the start vertex's triangle is reached
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.total_weight(), 3.0);
    assert!(!tree.is_spanning());
    assert_eq!(tree.coverage(), TreeCoverage::Partial { missing_edges: 3 });

    match tree.into_complete() {
        Err(Error::SpanningTreeIncomplete { expected, found }) => {
            assert_eq!(expected, 5);
            assert_eq!(found, 2);
        }
        other => panic!("expected SpanningTreeIncomplete, got {:?}", other),
    }
}

#[test]
fn test_prim_isolated_start_vertex() {
    let mut graph = common::two_islands();
    let lonely = graph.add_label("lonely");
    let tree = Prim::new().with_start(lonely).compute_spanning_tree(&graph).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.coverage(), TreeCoverage::Partial { missing_edges: 6 });
}

#[test]
fn test_prim_unknown_start_vertex() {
    let graph = common::sample_graph();
    let result = Prim::new()
        .with_start(VertexId::new(100))
        .compute_spanning_tree(&graph);
    assert!(matches!(result, Err(Error::UnknownVertex(100))));
}

#[test]
fn test_empty_and_single_vertex_graphs() {
    let empty: AdjacencyList<&str, f64> = AdjacencyList::new();
    let prim = Prim::new().compute_spanning_tree(&empty).unwrap();
    let kruskal = Kruskal::new().compute_spanning_tree(&empty).unwrap();
    assert!(prim.is_empty() && prim.is_spanning());
    assert!(kruskal.is_empty() && kruskal.is_spanning());

    let mut single: AdjacencyList<&str, f64> = AdjacencyList::new();
    single.add_label("only");
    let prim = Prim::new().compute_spanning_tree(&single).unwrap();
    assert!(prim.is_empty());
    assert!(prim.into_complete().is_ok());
}
