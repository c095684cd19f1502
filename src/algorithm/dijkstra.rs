use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::algorithm::{PathEntry, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{UndirectedGraph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Clone, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Compute shortest paths from a vertex id instead of a label
    pub fn compute_from<T, W, G>(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>
    where
        T: Hash + Eq + Debug,
        W: Float + Debug,
        G: UndirectedGraph<T, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source.index()));
        }

        let n = graph.vertex_count();
        let mut entries = vec![PathEntry::unreached(); n];
        entries[source.index()].min_distance = W::zero();

        let mut queue = MinPriorityQueue::new();
        queue.push(source, W::zero());

        // Each pop settles the closest frontier vertex
        while let Some((u, dist_u)) = queue.pop() {
            if entries[u.index()].visited {
                continue;
            }
            entries[u.index()].visited = true;

            // Relax all incident edges
            for (v, weight) in graph.neighbours(u) {
                let entry = &mut entries[v.index()];
                if entry.visited {
                    continue;
                }

                let new_dist = dist_u + weight;
                if new_dist < entry.min_distance {
                    entry.min_distance = new_dist;
                    entry.precedent = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        let result = ShortestPathResult { entries, source };
        log::debug!(
            "Dijkstra from {} reached {} of {} vertices",
            source,
            result.reachable_count(),
            n
        );

        Ok(result)
    }
}

impl<T, W, G> ShortestPathAlgorithm<T, W, G> for Dijkstra
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
    G: UndirectedGraph<T, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &T) -> Result<ShortestPathResult<W>> {
        let source = graph.find_vertex(source).ok_or(Error::SourceNotFound)?;
        self.compute_from::<T, W, G>(graph, source)
    }
}
