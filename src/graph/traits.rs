use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::graph::{Edge, Vertex, VertexId};

/// Trait representing a weighted undirected simple graph over labeled vertices
pub trait UndirectedGraph<T, W>: Debug
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the vertex stored under `id`
    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>>;

    /// Looks up the id of the vertex carrying `label`
    fn find_vertex(&self, label: &T) -> Option<VertexId>;

    /// Returns an arbitrary vertex, or `None` iff the graph is empty
    fn any_vertex(&self) -> Option<VertexId>;

    /// Returns an iterator over all vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = (VertexId, &Vertex<T>)> + '_>;

    /// Returns an iterator over `(neighbour, weight)` pairs of a vertex
    fn neighbours(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns every edge exactly once, in a deterministic order
    fn edge_list(&self) -> Vec<Edge<W>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertex(vertex).is_some()
    }

    /// Returns the label of a vertex
    fn label(&self, vertex: VertexId) -> Option<&T> {
        self.vertex(vertex).map(Vertex::label)
    }

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, end1: VertexId, end2: VertexId) -> Option<W> {
        self.neighbours(end1)
            .find(|&(other, _)| other == end2)
            .map(|(_, weight)| weight)
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, end1: VertexId, end2: VertexId) -> bool {
        self.edge_weight(end1, end2).is_some()
    }

    /// Number of edges incident to a vertex
    fn degree(&self, vertex: VertexId) -> usize {
        self.neighbours(vertex).count()
    }

    /// Returns the edges incident to `vertex`, each with `vertex` as `end1`.
    /// Empty if the vertex is unknown.
    fn adjacent_edges(&self, vertex: VertexId) -> HashSet<Edge<W>> {
        self.neighbours(vertex)
            .map(|(other, weight)| Edge::new(vertex, other, weight))
            .collect()
    }

    /// Rebuilds the global edge set from every vertex's adjacency.
    ///
    /// Each undirected edge is seen once from each endpoint; the symmetric
    /// equality of [`Edge`] folds both sightings into one entry.
    fn edges(&self) -> HashSet<Edge<W>> {
        let mut edge_set = HashSet::with_capacity(self.edge_count());
        for (id, _) in self.vertices() {
            for (other, weight) in self.neighbours(id) {
                edge_set.insert(Edge::new(id, other, weight));
            }
        }
        edge_set
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<T, W>: UndirectedGraph<T, W>
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
{
    /// Adds a vertex and returns its id. If a vertex with the same label is
    /// already present, nothing changes and the existing id is returned.
    fn add_vertex(&mut self, vertex: Vertex<T>) -> VertexId;

    /// Connects two registered vertices.
    ///
    /// Returns false if either endpoint is unknown, if both endpoints are the
    /// same vertex, or if the weight is negative or not finite. Connecting an
    /// already connected pair keeps the first weight.
    fn add_edge(&mut self, end1: VertexId, end2: VertexId, weight: W) -> bool;

    /// Connects two registered vertices with a weight of 1
    fn add_unit_edge(&mut self, end1: VertexId, end2: VertexId) -> bool {
        self.add_edge(end1, end2, W::one())
    }

    /// Inserts an existing edge value
    fn insert_edge(&mut self, edge: Edge<W>) -> bool {
        let (end1, end2) = edge.vertices();
        self.add_edge(end1, end2, edge.weight())
    }

    /// Label-based form of [`MutableGraph::add_edge`]
    fn connect(&mut self, label1: &T, label2: &T, weight: W) -> bool {
        match (self.find_vertex(label1), self.find_vertex(label2)) {
            (Some(end1), Some(end2)) => self.add_edge(end1, end2, weight),
            _ => false,
        }
    }
}
