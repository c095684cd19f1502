use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::algorithm::{SpanningTree, SpanningTreeAlgorithm};
use crate::data_structures::DisjointSets;
use crate::graph::UndirectedGraph;
use crate::Result;

/// Kruskal's minimum spanning tree algorithm.
///
/// Edges are scanned in ascending weight order (ties keep the graph's
/// enumeration order) and accepted whenever they join two different subsets
/// of a [`DisjointSets`] over the vertices. On a disconnected graph the result
/// is a minimum spanning forest.
#[derive(Debug, Clone)]
pub struct Kruskal {
    /// Stop scanning as soon as every vertex sits in one subset
    early_exit: bool,
}

impl Kruskal {
    /// Creates a new Kruskal instance with early exit enabled
    pub fn new() -> Self {
        Kruskal { early_exit: true }
    }

    /// Enable or disable stopping once the tree spans the graph
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

impl Default for Kruskal {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W, G> SpanningTreeAlgorithm<T, W, G> for Kruskal
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
    G: UndirectedGraph<T, W>,
{
    fn name(&self) -> &'static str {
        "Kruskal"
    }

    fn compute_spanning_tree(&self, graph: &G) -> Result<SpanningTree<W>> {
        let vertex_count = graph.vertex_count();

        let mut edges = graph.edge_list();
        // Stable: equal weights keep enumeration order
        edges.sort_by(|a, b| a.cmp_weight(b));

        let mut vertex_sets = DisjointSets::with_capacity(vertex_count);
        let mut tree = Vec::with_capacity(vertex_count.saturating_sub(1));
        let mut scanned = 0;

        for edge in edges {
            scanned += 1;
            let (end1, end2) = edge.vertices();
            vertex_sets.add(end1);
            vertex_sets.add(end2);

            if vertex_sets.same_subset(&end1, &end2) {
                log::trace!("rejecting {} -- {}: would close a cycle", end1, end2);
            } else {
                tree.push(edge);
                vertex_sets.merge(&end1, &end2);
            }

            // Every vertex tracked and all in one subset: the tree is complete
            if self.early_exit
                && vertex_sets.len() == vertex_count
                && vertex_sets.subset_count() == 1
            {
                break;
            }
        }

        log::debug!(
            "Kruskal accepted {} of {} scanned edges over {} vertices",
            tree.len(),
            scanned,
            vertex_count
        );

        Ok(SpanningTree::new(tree, vertex_count))
    }
}
