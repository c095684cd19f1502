//! Text exports of graphs and edge collections.
//!
//! Exporters only read vertex labels, weights and edges; they never run an
//! algorithm themselves.

pub mod dot;
pub mod json;

pub use dot::{to_dot, write_dot};
pub use json::{EdgeRecord, GraphDocument, VertexRecord};
