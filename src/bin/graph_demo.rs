use graph_toolkit::io::{to_dot, GraphDocument};
use graph_toolkit::{
    AdjacencyList, Dijkstra, Kruskal, MutableGraph, Prim, ShortestPathAlgorithm, SpanningTree,
    SpanningTreeAlgorithm, UndirectedGraph,
};
use std::env;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Dot,
    Json,
}

#[derive(Debug, Clone)]
struct DemoConfig {
    format: OutputFormat,
    source: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            format: OutputFormat::Text,
            source: "0".to_string(),
        }
    }
}

impl DemoConfig {
    fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = DemoConfig::default();
        if let Some(format) = args.get(1) {
            config.format = match format.as_str() {
                "text" => OutputFormat::Text,
                "dot" => OutputFormat::Dot,
                "json" => OutputFormat::Json,
                other => return Err(format!("unknown format '{}' (expected text, dot or json)", other)),
            };
        }
        if let Some(source) = args.get(2) {
            config.source = source.clone();
        }
        Ok(config)
    }
}

/// The classic 9-vertex sample graph
fn sample_graph() -> AdjacencyList<String, f64> {
    let mut graph = AdjacencyList::with_capacity(9);
    for label in 0..9 {
        graph.add_label(label.to_string());
    }

    let edges = [
        ("0", "1", 4.0),
        ("0", "7", 8.0),
        ("1", "2", 8.0),
        ("1", "7", 11.0),
        ("2", "8", 2.0),
        ("7", "8", 7.0),
        ("6", "8", 6.0),
        ("6", "7", 1.0),
        ("2", "3", 7.0),
        ("2", "5", 4.0),
        ("6", "5", 2.0),
        ("3", "5", 14.0),
        ("3", "4", 9.0),
        ("4", "5", 10.0),
    ];
    for (a, b, weight) in edges {
        graph.connect(&a.to_string(), &b.to_string(), weight);
    }

    graph
}

fn print_tree(name: &str, graph: &AdjacencyList<String, f64>, tree: &SpanningTree<f64>) {
    println!("{} ({} edges, total weight {}):", name, tree.len(), tree.total_weight());
    for edge in &tree.edges {
        let (a, b) = edge.vertices();
        let a = graph.label(a).map(String::as_str).unwrap_or("?");
        let b = graph.label(b).map(String::as_str).unwrap_or("?");
        println!("  {} <-> {} | {}", a, b, edge.weight());
    }
    if !tree.is_spanning() {
        println!("  (graph is disconnected: {:?})", tree.coverage());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = DemoConfig::from_args(&args)?;
    log::debug!("running with {:?}", config);

    let graph = sample_graph();
    let kruskal = Kruskal::new().compute_spanning_tree(&graph)?;
    let prim = Prim::new().compute_spanning_tree(&graph)?;

    match config.format {
        OutputFormat::Dot => {
            print!("{}", to_dot(&graph, &kruskal.edges, "kruskal")?);
            print!("{}", to_dot(&graph, &prim.edges, "prim")?);
        }
        OutputFormat::Json => {
            let document = GraphDocument::from_edges(&graph, &kruskal.edges, "kruskal")?;
            println!("{}", document.to_json_pretty()?);
        }
        OutputFormat::Text => {
            println!(
                "Graph has {} vertices and {} edges",
                graph.vertex_count(),
                graph.edge_count()
            );
            print_tree("Kruskal", &graph, &kruskal);
            print_tree("Prim", &graph, &prim);

            let paths = Dijkstra::new().compute_shortest_paths(&graph, &config.source)?;
            println!("Dijkstra from {}:", config.source);
            for (id, vertex) in graph.vertices() {
                match paths.distance(id) {
                    Some(distance) => {
                        let route: Vec<&str> = paths
                            .path_to(id)
                            .unwrap_or_default()
                            .into_iter()
                            .filter_map(|v| graph.label(v).map(String::as_str))
                            .collect();
                        println!(
                            "  {}: distance = {}, path = {}",
                            vertex.label(),
                            distance,
                            route.join(" -> ")
                        );
                    }
                    None => println!("  {}: unreachable", vertex.label()),
                }
            }
        }
    }

    Ok(())
}
