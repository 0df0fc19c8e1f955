use heap_paths::graph::adjacency::{AdjacencyList, DistanceReport};
use heap_paths::{Dijkstra, ShortestPathAlgorithm};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <graph.json> [source]", args[0]);
        std::process::exit(2);
    }
    let path = &args[1];
    let source = args.get(2).cloned().unwrap_or_else(|| "0".to_string());

    // Negative weights are rejected up front, even on edges the run would never reach
    let graph = AdjacencyList::from_path(path)?.into_validated_graph()?;
    log::info!("Loaded graph from {}", path);

    let result = Dijkstra::new().compute_shortest_paths(&graph, &source)?;
    log::info!(
        "{} of {} nodes reachable from {}",
        result.reachable_count(),
        result.distances.len(),
        source
    );

    let report = DistanceReport::from_result(&result);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
