use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists keyed by node identifier
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing_edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from raw adjacency lists.
    ///
    /// Edge lists are taken as given: parallel edges and negative weights are
    /// kept so the algorithms can report them. Neighbors that never appear as
    /// a key become nodes without outgoing edges.
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (node, edges) in adjacency {
            let edges: Vec<(N, W)> = edges.into_iter().collect();
            for (target, _) in &edges {
                graph.outgoing_edges.entry(target.clone()).or_default();
            }
            graph.outgoing_edges.entry(node).or_default().extend(edges);
        }
        graph
    }

    /// Adds an edge in both directions, for algorithms over undirected graphs.
    /// Unlike `add_edge`, negative weights are accepted.
    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: W) {
        self.upsert_edge(a.clone(), b.clone(), weight);
        self.upsert_edge(b, a, weight);
    }

    /// Fails with the first negative weight found, if any
    pub fn validate_non_negative(&self) -> Result<()> {
        match self
            .outgoing_edges
            .values()
            .flatten()
            .find(|(_, weight)| *weight < W::zero())
        {
            Some((_, weight)) => Err(Error::NegativeWeight(
                num_traits::cast::<W, f64>(*weight).unwrap_or(f64::NAN),
            )),
            None => Ok(()),
        }
    }

    fn upsert_edge(&mut self, from: N, to: N, weight: W) {
        self.outgoing_edges.entry(to.clone()).or_default();
        let outgoing = self.outgoing_edges.entry(from).or_default();

        // Check if edge already exists and update it if it does
        match outgoing.iter().position(|(target, _)| *target == to) {
            Some(idx) => outgoing[idx].1 = weight,
            None => outgoing.push((to, weight)),
        }
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(node) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }
        self.upsert_edge(from, to, weight);
        true
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }
}
