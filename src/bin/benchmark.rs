use std::env;
use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use heap_paths::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use heap_paths::graph::{generators::generate_random, DirectedGraph, Graph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &DirectedGraph<usize, OrderedFloat<f64>>, source: usize) -> heap_paths::Result<Duration>
where
    A: ShortestPathAlgorithm<usize, OrderedFloat<f64>, DirectedGraph<usize, OrderedFloat<f64>>>
{
    println!("Running {} on graph with {} vertices...", name, graph.node_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, &source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments: [max vertices] [edge factor] [seed]
    let args: Vec<String> = env::args().collect();
    let max_vertices: usize = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(200_000);
    let edge_factor: f64 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(2.0);
    let seed: u64 = args.get(3).and_then(|a| a.parse().ok()).unwrap_or(42);

    let graph_sizes: Vec<usize> = [1_000, 10_000, 50_000, 100_000, 200_000, 500_000]
        .into_iter()
        .filter(|&size| size <= max_vertices)
        .collect();

    println!("=====================================================");
    println!("Benchmark: Dijkstra (lazy deletion)");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, edge_factor, seed);
        println!("Graph has {} vertices and {} edges", graph.node_count(), graph.edge_count());

        let duration = benchmark_algorithm("Dijkstra", &dijkstra, &graph, 0)?;
        results.push((size, graph.edge_count(), duration));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Vertices", "Edges", "Dijkstra (ms)");
    println!("-----------------------------------------------------");
    for (size, edges, duration) in &results {
        println!("{:<10} | {:<10} | {:<15.2}", size, edges, duration.as_secs_f64() * 1000.0);
    }

    Ok(())
}
