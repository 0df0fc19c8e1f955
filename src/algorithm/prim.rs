use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::algorithm::CancellationToken;
use crate::data_structures::PriorityContainer;
use crate::graph::Graph;
use crate::{Error, Result};

/// Minimum spanning tree of the component containing the start node
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<N, W> {
    /// Sum of the chosen edge weights
    pub total_weight: W,
    /// Chosen `(parent, child, weight)` edges in the order they joined the tree
    pub edges: Vec<(N, N, W)>,
}

impl<N, W> SpanningTree<N, W> {
    /// Number of nodes spanned, the start node included
    pub fn node_count(&self) -> usize {
        self.edges.len() + 1
    }
}

/// Prim's algorithm over an undirected graph stored with edges in both directions
///
/// The frontier holds candidate `(weight, node, parent)` entries. A node that
/// is already in the tree when popped is skipped, so superseded entries never
/// need to be removed. Negative weights are fine here.
#[derive(Debug, Clone, Default)]
pub struct Prim {
    cancellation: Option<CancellationToken>,
}

impl Prim {
    pub fn new() -> Self {
        Prim::default()
    }

    /// Attach a cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn minimum_spanning_tree<N, W, G>(&self, graph: &G, start: &N) -> Result<SpanningTree<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        if !graph.has_node(start) {
            return Err(Error::UnknownSource(format!("{:?}", start)));
        }

        let mut in_tree: HashSet<N> = HashSet::with_capacity(graph.node_count());
        let mut tree = SpanningTree {
            total_weight: W::zero(),
            edges: Vec::new(),
        };

        let mut frontier =
            PriorityContainer::with_comparator(|a: &(W, N, Option<N>), b: &(W, N, Option<N>)| a.0.cmp(&b.0));
        frontier.insert((W::zero(), start.clone(), None));

        while !frontier.is_empty() {
            CancellationToken::check(self.cancellation.as_ref())?;

            let (weight, node, parent) = frontier.extract_min()?;
            if !in_tree.insert(node.clone()) {
                continue;
            }

            if let Some(parent) = parent {
                tree.total_weight = tree.total_weight + weight;
                tree.edges.push((parent, node.clone(), weight));
            }

            for (neighbor, edge_weight) in graph.outgoing_edges(&node) {
                if !in_tree.contains(neighbor) {
                    frontier.insert((edge_weight, neighbor.clone(), Some(node.clone())));
                }
            }
        }

        log::debug!(
            "Prim spanned {} of {} nodes with total weight {:?}",
            tree.node_count(),
            graph.node_count(),
            tree.total_weight
        );

        Ok(tree)
    }
}
