use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Stable index of a vertex inside an adjacency structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Position of the vertex in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

/// A labeled graph vertex.
///
/// Identity is the label: two vertices with equal labels are equal and hash
/// the same, whatever their weights.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    label: T,
    /// Not read by any algorithm
    weight: f64,
}

impl<T> Vertex<T> {
    /// Creates a vertex with the default weight of 1.0
    pub fn new(label: T) -> Self {
        Vertex { label, weight: 1.0 }
    }

    pub fn with_weight(label: T, weight: f64) -> Self {
        Vertex { label, weight }
    }

    pub fn label(&self) -> &T {
        &self.label
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn into_label(self) -> T {
        self.label
    }
}

impl<T: PartialEq> PartialEq for Vertex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<T: Eq> Eq for Vertex<T> {}

impl<T: Hash> Hash for Vertex<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<T> From<T> for Vertex<T> {
    fn from(label: T) -> Self {
        Vertex::new(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::make_hash;

    #[test]
    fn test_vertex_identity_is_label() {
        let a = Vertex::new("A");
        let heavy_a = Vertex::with_weight("A", 5.0);
        assert_eq!(a, heavy_a);
        assert_eq!(make_hash(&a), make_hash(&heavy_a));
        assert_eq!(make_hash(&a), make_hash(&"A"));
        assert_ne!(a, Vertex::new("B"));
    }

    #[test]
    fn test_vertex_weight_defaults_to_one() {
        let mut v = Vertex::new(3u32);
        assert_eq!(v.weight(), 1.0);
        v.set_weight(0.25);
        assert_eq!(v.weight(), 0.25);
        assert_eq!(v.into_label(), 3);
    }
}
