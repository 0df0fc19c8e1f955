use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph keyed by arbitrary node identifiers
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every node identifier
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges from a node, in insertion order
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the first edge between two nodes if it exists
    fn get_edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node with no edges, returning false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge, creating missing endpoints.
    /// Returns false and leaves the graph untouched for negative weights.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;

    /// Removes every edge from `from` to `to`
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;
}
