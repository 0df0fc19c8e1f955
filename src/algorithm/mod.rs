pub mod traits;
pub mod dijkstra;
pub mod prim;

pub use traits::{CancellationToken, NegativeWeightPolicy, ShortestPathAlgorithm, ShortestPathResult};
