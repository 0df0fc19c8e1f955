//! Heap Paths - priority-queue driven graph algorithms
//!
//! This library provides a comparator-driven binary min-heap
//! ([`PriorityContainer`]) and the graph algorithms that are built on it:
//! Dijkstra's single-source shortest paths and Prim's minimum spanning tree.
//!
//! Node identifiers are an opaque type parameter (integers, strings, ...) and
//! edge weights are non-negative floats with a total order, usually
//! `ordered_float::OrderedFloat<f64>`.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{shortest_paths, Dijkstra},
    prim::{Prim, SpanningTree},
    CancellationToken, NegativeWeightPolicy, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::PriorityContainer;
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Priority container is empty")]
    EmptyContainer,

    #[error("Source node not found in graph: {0}")]
    UnknownSource(String),

    #[error("Target node not found in graph: {0}")]
    UnknownTarget(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Computation cancelled")]
    Cancelled,

    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
