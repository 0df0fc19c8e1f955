use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to every node of the graph.
    /// Unreachable nodes map to `W::infinity()`.
    pub distances: HashMap<N, W>,

    /// Predecessor of each reached node in the shortest path tree
    pub predecessors: HashMap<N, N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `node`, or `None` if the node is not part of the graph
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// Returns true if a finite path from the source reaches `node`
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).map_or(false, |d| d.is_finite())
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Rebuilds the source-to-target node sequence from the predecessor tree
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());

            // A well-formed tree never revisits a node
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// What to do when an edge with a negative weight is relaxed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NegativeWeightPolicy {
    /// Abort with [`Error::NegativeWeight`]
    #[default]
    Reject,
    /// Relax the edge anyway; distances may be wrong
    Ignore,
}

/// Shared flag that asks a running computation to stop.
/// Algorithms poll it once per frontier extraction.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; every clone of this token observes it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub(crate) fn check(token: Option<&CancellationToken>) -> Result<()> {
        match token {
            Some(token) if token.is_cancelled() => {
                log::warn!("Computation cancelled, discarding partial results");
                Err(Error::Cancelled)
            }
            _ => Ok(()),
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
