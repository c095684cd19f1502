//! # Dot
//!
//! Writes an edge collection in the undirected GraphViz format:
//!
//! ```text
//! graph mst {
//! 	"0" -- "1"  [label="4"];
//! }
//! ```
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::Write;

use num_traits::Float;

use crate::graph::{Edge, UndirectedGraph, VertexId};
use crate::{Error, Result};

/// Writes `edges` as a GraphViz graph called `name`.
///
/// Vertices are rendered by label; an edge referring to a vertex the graph
/// doesn't know fails with [`Error::UnknownVertex`].
pub fn write_dot<'a, T, W, G, I, O>(out: &mut O, graph: &G, edges: I, name: &str) -> Result<()>
where
    T: Hash + Eq + Debug + Display,
    W: Float + Debug + Display + 'a,
    G: UndirectedGraph<T, W>,
    I: IntoIterator<Item = &'a Edge<W>>,
    O: Write,
{
    writeln!(out, "graph {} {{", name)?;
    for edge in edges {
        let (end1, end2) = edge.vertices();
        writeln!(
            out,
            "\t\"{}\" -- \"{}\"  [label=\"{}\"];",
            escape(&label_of::<T, W, G>(graph, end1)?.to_string()),
            escape(&label_of::<T, W, G>(graph, end2)?.to_string()),
            edge.weight()
        )?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Renders `edges` as a GraphViz string
pub fn to_dot<'a, T, W, G, I>(graph: &G, edges: I, name: &str) -> Result<String>
where
    T: Hash + Eq + Debug + Display,
    W: Float + Debug + Display + 'a,
    G: UndirectedGraph<T, W>,
    I: IntoIterator<Item = &'a Edge<W>>,
{
    let mut buffer = Vec::new();
    write_dot::<T, W, G, I, Vec<u8>>(&mut buffer, graph, edges, name)?;
    String::from_utf8(buffer)
        .map_err(|err| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

/// Escapes `\` and `"` for use inside a quoted DOT identifier
fn escape(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn label_of<T, W, G>(graph: &G, vertex: VertexId) -> Result<&T>
where
    T: Hash + Eq + Debug,
    W: Float + Debug,
    G: UndirectedGraph<T, W>,
{
    graph
        .label(vertex)
        .ok_or(Error::UnknownVertex(vertex.index()))
}
