use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::Float;

use crate::graph::{AdjacencyList, Edge, MutableGraph, UndirectedGraph, Vertex, VertexId};
use crate::{Error, Result};

/// A vertex as stored in a [`GraphDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: usize,
    pub label: String,
    #[serde(default = "default_vertex_weight")]
    pub weight: f64,
}

/// An edge as stored in a [`GraphDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Serializable snapshot of a graph's vertices and a chosen edge collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub name: String,
    pub vertices: Vec<VertexRecord>,
    pub edges: Vec<EdgeRecord>,
}

fn default_vertex_weight() -> f64 {
    1.0
}

// JSON has no encoding for NaN or infinities
fn finite(weight: f64) -> Result<f64> {
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(Error::NonFiniteWeight(weight))
    }
}

impl GraphDocument {
    /// Captures every vertex of `graph` together with `edges`
    /// (the full edge list, a spanning tree, ...).
    ///
    /// Fails with [`Error::NonFiniteWeight`] if a vertex or edge weight is NaN
    /// or infinite.
    pub fn from_edges<'a, T, W, G, I>(graph: &G, edges: I, name: &str) -> Result<Self>
    where
        T: Hash + Eq + Debug + Display,
        W: Float + Debug + 'a,
        G: UndirectedGraph<T, W>,
        I: IntoIterator<Item = &'a Edge<W>>,
    {
        let vertices = graph
            .vertices()
            .map(|(id, vertex)| -> Result<VertexRecord> {
                finite(vertex.weight())?;
                Ok(VertexRecord {
                    id: id.index(),
                    label: vertex.label().to_string(),
                    weight: vertex.weight(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut records = Vec::new();
        for edge in edges {
            let (end1, end2) = edge.vertices();
            for end in [end1, end2] {
                if !graph.has_vertex(end) {
                    return Err(Error::UnknownVertex(end.index()));
                }
            }
            records.push(EdgeRecord {
                source: end1.index(),
                target: end2.index(),
                weight: finite(edge.weight().to_f64().unwrap_or(f64::NAN))?,
            });
        }

        Ok(GraphDocument {
            name: name.to_string(),
            vertices,
            edges: records,
        })
    }

    /// Captures the whole graph
    pub fn from_graph<T, W, G>(graph: &G, name: &str) -> Result<Self>
    where
        T: Hash + Eq + Debug + Display,
        W: Float + Debug,
        G: UndirectedGraph<T, W>,
    {
        let edges = graph.edge_list();
        Self::from_edges::<T, W, G, _>(graph, &edges, name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuilds a graph with string labels.
    ///
    /// Edges name vertices by their record `id`. Records are inserted in
    /// document order, so ids in the rebuilt graph may differ from the
    /// recorded ones. Edges the graph rejects (duplicates keep their first
    /// weight, negative weights are refused) are skipped. Two records sharing
    /// an `id` fail with [`Error::DuplicateVertex`].
    pub fn into_graph(self) -> Result<AdjacencyList<String, f64>> {
        let mut graph = AdjacencyList::with_capacity(self.vertices.len());
        let mut id_map = std::collections::HashMap::with_capacity(self.vertices.len());

        for record in self.vertices {
            if id_map.contains_key(&record.id) {
                return Err(Error::DuplicateVertex(record.id));
            }
            let id = graph.add_vertex(Vertex::with_weight(record.label, record.weight));
            id_map.insert(record.id, id);
        }

        let lookup = |raw: usize| -> Result<VertexId> {
            id_map.get(&raw).copied().ok_or(Error::UnknownVertex(raw))
        };

        for record in self.edges {
            let source = lookup(record.source)?;
            let target = lookup(record.target)?;
            if !graph.add_edge(source, target, record.weight) {
                log::warn!(
                    "skipping edge {} -- {} with weight {}",
                    record.source,
                    record.target,
                    record.weight
                );
            }
        }

        Ok(graph)
    }
}
