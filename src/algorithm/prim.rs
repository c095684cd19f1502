use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::algorithm::{SpanningTree, SpanningTreeAlgorithm, TreeCoverage};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Edge, UndirectedGraph, VertexId};
use crate::{Error, Result};

/// Prim's minimum spanning tree algorithm with lazy deletion.
///
/// Grows a single tree from a start vertex. Frontier edges whose endpoints
/// both got absorbed meanwhile are discarded when popped. If the graph is
/// disconnected the queue runs dry before `vertex_count - 1` edges are found
/// and the returned tree reports [`TreeCoverage::Partial`].
#[derive(Debug, Clone, Default)]
pub struct Prim {
    /// Start vertex; `None` picks an arbitrary one
    start: Option<VertexId>,
}

impl Prim {
    /// Creates a new Prim instance starting from an arbitrary vertex
    pub fn new() -> Self {
        Prim { start: None }
    }

    /// Set the vertex the tree grows from
    pub fn with_start(mut self, start: VertexId) -> Self {
        self.start = Some(start);
        self
    }

    fn push_frontier<T, W, G>(
        graph: &G,
        vertex: VertexId,
        visited: &[bool],
        queue: &mut MinPriorityQueue<Edge<W>, W>,
    ) where
        T: Hash + Eq + Debug,
        W: Float + Debug,
        G: UndirectedGraph<T, W>,
    {
        for (other, weight) in graph.neighbours(vertex) {
            if !visited.get(other.index()).copied().unwrap_or(true) {
                queue.push(Edge::new(vertex, other, weight), weight);
            }
        }
    }
}

impl<T, W, G> SpanningTreeAlgorithm<T, W, G> for Prim
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
    G: UndirectedGraph<T, W>,
{
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn compute_spanning_tree(&self, graph: &G) -> Result<SpanningTree<W>> {
        let vertex_count = graph.vertex_count();

        let start = match self.start {
            Some(start) if graph.has_vertex(start) => start,
            Some(start) => return Err(Error::UnknownVertex(start.index())),
            None => match graph.any_vertex() {
                Some(start) => start,
                None => return Ok(SpanningTree::new(Vec::new(), 0)),
            },
        };

        let target = vertex_count - 1;
        let mut visited = vec![false; vertex_count];
        let mut tree = Vec::with_capacity(target);
        let mut queue = MinPriorityQueue::new();

        visited[start.index()] = true;
        Self::push_frontier::<T, W, G>(graph, start, &visited, &mut queue);

        while tree.len() < target {
            let Some((edge, _)) = queue.pop() else {
                break;
            };

            let (end1, end2) = edge.vertices();
            let next = match (visited[end1.index()], visited[end2.index()]) {
                (true, true) => {
                    log::trace!("discarding stale frontier edge {} -- {}", end1, end2);
                    continue;
                }
                (true, false) => end2,
                (false, _) => end1,
            };

            visited[next.index()] = true;
            tree.push(edge);
            Self::push_frontier::<T, W, G>(graph, next, &visited, &mut queue);
        }

        let result = SpanningTree::new(tree, vertex_count);
        if let TreeCoverage::Partial { missing_edges } = result.coverage() {
            log::warn!(
                "Prim from {} reached {} of {} vertices; {} tree edges unreachable",
                start,
                result.len() + 1,
                vertex_count,
                missing_edges
            );
        } else {
            log::debug!("Prim built a spanning tree with {} edges", result.len());
        }

        Ok(result)
    }
}
