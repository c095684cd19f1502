pub mod adjacency;
pub mod edge;
pub mod generators;
pub mod traits;
pub mod vertex;

pub use adjacency::AdjacencyList;
pub use edge::Edge;
pub use traits::{MutableGraph, UndirectedGraph};
pub use vertex::{Vertex, VertexId};
