use crate::graph::edge::RelativeEdge;
use crate::graph::traits::{MutableGraph, UndirectedGraph};
use crate::graph::{Edge, Vertex, VertexId};
use num_traits::Float;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected weighted graph stored as adjacency lists.
///
/// Vertices live in an arena and are addressed by [`VertexId`]; each vertex
/// keeps the set of its relative edges (neighbour + weight), keyed by the
/// neighbour so that parallel edges cannot exist.
#[derive(Debug, Clone)]
pub struct AdjacencyList<T, W>
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
{
    /// Vertex arena, indexed by `VertexId`
    vertices: Vec<Vertex<T>>,

    /// Incident edges for each vertex, parallel to `vertices`
    adjacency: Vec<BTreeSet<RelativeEdge<W>>>,

    /// Label lookup: label -> vertex id
    index: HashMap<T, VertexId>,

    /// Number of undirected edges
    edge_count: usize,
}

impl<T, W> AdjacencyList<T, W>
where
    T: Hash + Eq + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyList {
            vertices: Vec::new(),
            adjacency: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyList {
            vertices: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Shorthand for adding a vertex from its label
    pub fn add_label(&mut self, label: T) -> VertexId {
        self.add_vertex(Vertex::new(label))
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn is_valid_weight(weight: W) -> bool {
        weight.is_finite() && weight >= W::zero()
    }
}

impl<T, W> Default for AdjacencyList<T, W>
where
    T: Hash + Eq + Clone + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> UndirectedGraph<T, W> for AdjacencyList<T, W>
where
    T: Hash + Eq + Clone + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    fn find_vertex(&self, label: &T) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    fn any_vertex(&self) -> Option<VertexId> {
        if self.vertices.is_empty() {
            None
        } else {
            Some(VertexId::new(0))
        }
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = (VertexId, &Vertex<T>)> + '_> {
        Box::new(
            self.vertices
                .iter()
                .enumerate()
                .map(|(index, vertex)| (VertexId::new(index), vertex)),
        )
    }

    fn neighbours(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex.index()) {
            Box::new(edges.iter().map(|re| (re.other, re.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_list(&self) -> Vec<Edge<W>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (index, relatives) in self.adjacency.iter().enumerate() {
            let id = VertexId::new(index);
            // Emit each edge from its lower endpoint only
            edges.extend(
                relatives
                    .iter()
                    .filter(|re| re.other > id)
                    .map(|re| re.to_edge(id)),
            );
        }
        edges
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    fn edge_weight(&self, end1: VertexId, end2: VertexId) -> Option<W> {
        self.adjacency
            .get(end1.index())?
            .get(&RelativeEdge::new(end2, W::zero()))
            .map(|re| re.weight)
    }

    fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex.index()).map_or(0, BTreeSet::len)
    }
}

impl<T, W> MutableGraph<T, W> for AdjacencyList<T, W>
where
    T: Hash + Eq + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: Vertex<T>) -> VertexId {
        if let Some(&existing) = self.index.get(vertex.label()) {
            return existing;
        }

        let id = VertexId::new(self.vertices.len());
        self.index.insert(vertex.label().clone(), id);
        self.vertices.push(vertex);
        self.adjacency.push(BTreeSet::new());
        id
    }

    fn add_edge(&mut self, end1: VertexId, end2: VertexId, weight: W) -> bool {
        if !self.has_vertex(end1) || !self.has_vertex(end2) || end1 == end2 {
            return false;
        }
        if !Self::is_valid_weight(weight) {
            return false;
        }

        // First write wins: an existing record keeps its weight
        let inserted = self.adjacency[end1.index()].insert(RelativeEdge::new(end2, weight));
        self.adjacency[end2.index()].insert(RelativeEdge::new(end1, weight));

        if inserted {
            self.edge_count += 1;
        } else {
            log::trace!("edge {} -- {} already present, weight kept", end1, end2);
        }
        true
    }
}
