pub mod disjoint_sets;
pub mod priority_queue;

pub use disjoint_sets::DisjointSets;
pub use priority_queue::MinPriorityQueue;
