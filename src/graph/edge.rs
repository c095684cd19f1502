use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::graph::VertexId;
use crate::hash::make_symmetric_hash;

/// A weighted undirected edge.
///
/// `Edge::new(a, b, w) == Edge::new(b, a, w)` and both hash identically. Equality
/// looks at the endpoints only: the graph is simple, so a pair of vertices
/// identifies at most one edge.
#[derive(Debug, Clone, Copy)]
pub struct Edge<W> {
    end1: VertexId,
    end2: VertexId,
    weight: W,
}

impl<W> Edge<W>
where
    W: Float + Debug,
{
    pub fn new(end1: VertexId, end2: VertexId, weight: W) -> Self {
        Edge { end1, end2, weight }
    }

    /// Creates an edge with weight 1
    pub fn unit(end1: VertexId, end2: VertexId) -> Self {
        Edge::new(end1, end2, W::one())
    }

    pub fn weight(&self) -> W {
        self.weight
    }

    /// Both endpoints, in construction order
    pub fn vertices(&self) -> (VertexId, VertexId) {
        (self.end1, self.end2)
    }

    pub fn end1(&self) -> VertexId {
        self.end1
    }

    pub fn end2(&self) -> VertexId {
        self.end2
    }

    /// Returns true if `vertex` is one of the endpoints
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.end1 == vertex || self.end2 == vertex
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if the edge doesn't touch it
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.end1 == vertex {
            Some(self.end2)
        } else if self.end2 == vertex {
            Some(self.end1)
        } else {
            None
        }
    }

    /// Compares two edges by weight only
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        OrderedFloat(self.weight).cmp(&OrderedFloat(other.weight))
    }
}

impl<W> PartialEq for Edge<W> {
    fn eq(&self, other: &Self) -> bool {
        (self.end1 == other.end1 && self.end2 == other.end2)
            || (self.end1 == other.end2 && self.end2 == other.end1)
    }
}

impl<W> Eq for Edge<W> {}

impl<W> Hash for Edge<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(make_symmetric_hash(&self.end1, &self.end2));
    }
}

/// Adjacency-list entry: the neighbour and the weight of the connecting edge.
///
/// Equality and ordering consider `other` only, so a set of relative edges
/// holds at most one entry per neighbour.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RelativeEdge<W> {
    pub(crate) other: VertexId,
    pub(crate) weight: W,
}

impl<W> RelativeEdge<W> {
    pub(crate) fn new(other: VertexId, weight: W) -> Self {
        RelativeEdge { other, weight }
    }

    /// Materializes the full edge as seen from `first`
    pub(crate) fn to_edge(self, first: VertexId) -> Edge<W> {
        Edge {
            end1: first,
            end2: self.other,
            weight: self.weight,
        }
    }
}

impl<W> PartialEq for RelativeEdge<W> {
    fn eq(&self, other: &Self) -> bool {
        self.other == other.other
    }
}

impl<W> Eq for RelativeEdge<W> {}

impl<W> PartialOrd for RelativeEdge<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for RelativeEdge<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.other.cmp(&other.other)
    }
}
