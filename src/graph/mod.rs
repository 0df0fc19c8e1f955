pub mod adjacency;
pub mod directed;
pub mod generators;
pub mod traits;

pub use adjacency::AdjacencyList;
pub use directed::DirectedGraph;
pub use traits::{Graph, MutableGraph};
