pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod traits;

pub use traits::{
    PathEntry, ShortestPathAlgorithm, ShortestPathResult, SpanningTree, SpanningTreeAlgorithm,
    TreeCoverage,
};
