use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{CancellationToken, NegativeWeightPolicy, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::PriorityContainer;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion of stale frontier entries
///
/// Superseded `(distance, node)` entries stay in the priority container and
/// are discarded when popped with a distance above the node's recorded one.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    /// How edges with a negative weight are handled
    negative_weights: NegativeWeightPolicy,
    /// Optional flag polled once per frontier extraction
    cancellation: Option<CancellationToken>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance that rejects negative weights
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Set the negative weight policy
    pub fn with_negative_weights(mut self, policy: NegativeWeightPolicy) -> Self {
        self.negative_weights = policy;
        self
    }

    /// Attach a cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Shortest distance and path from `source` to `target`.
    ///
    /// Stops as soon as `target` is finalized. Returns `Ok(None)` when the
    /// target cannot be reached.
    pub fn shortest_path<N, W, G>(&self, graph: &G, source: &N, target: &N) -> Result<Option<(W, Vec<N>)>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        if !graph.has_node(source) {
            return Err(Error::UnknownSource(format!("{:?}", source)));
        }
        if !graph.has_node(target) {
            return Err(Error::UnknownTarget(format!("{:?}", target)));
        }

        let result = self.run(graph, source, Some(target))?;
        Ok(result
            .path_to(target)
            .and_then(|path| result.distance(target).map(|dist| (dist, path))))
    }

    fn run<N, W, G>(&self, graph: &G, source: &N, target: Option<&N>) -> Result<ShortestPathResult<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<N, W>,
    {
        if !graph.has_node(source) {
            return Err(Error::UnknownSource(format!("{:?}", source)));
        }

        log::debug!(
            "Dijkstra from {:?} over {} nodes and {} edges",
            source,
            graph.node_count(),
            graph.edge_count()
        );

        // Every node starts unvisited at infinity, except the source
        let mut distances: HashMap<N, W> = graph.nodes().map(|node| (node.clone(), W::infinity())).collect();
        let mut predecessors: HashMap<N, N> = HashMap::new();
        let mut finalized: HashSet<N> = HashSet::with_capacity(distances.len());
        distances.insert(source.clone(), W::zero());

        let mut frontier = PriorityContainer::with_comparator(|a: &(W, N), b: &(W, N)| a.0.cmp(&b.0));
        frontier.insert((W::zero(), source.clone()));

        let mut stale = 0usize;
        while !frontier.is_empty() {
            CancellationToken::check(self.cancellation.as_ref())?;

            let (dist_u, u) = frontier.extract_min()?;
            let recorded = distances.get(&u).copied().unwrap_or_else(W::infinity);
            if dist_u > recorded || finalized.contains(&u) {
                log::trace!("Skipping stale entry {:?} at {:?}", u, dist_u);
                stale += 1;
                continue;
            }
            finalized.insert(u.clone());

            if target == Some(&u) {
                break;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                if weight < W::zero() && self.negative_weights == NegativeWeightPolicy::Reject {
                    return Err(Error::NegativeWeight(num_traits::cast::<W, f64>(weight).unwrap_or(f64::NAN)));
                }
                if finalized.contains(v) {
                    continue;
                }

                let candidate = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);
                if candidate < current {
                    log::trace!("Relaxed {:?} -> {:?}: {:?}", u, v, candidate);
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), u.clone());
                    frontier.insert((candidate, v.clone()));
                }
            }
        }

        log::debug!(
            "Dijkstra finalized {} nodes, skipped {} stale entries",
            finalized.len(),
            stale
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        self.run(graph, source, None)
    }
}

/// Distances from `source` to every node of `graph` using the default
/// [`Dijkstra`] settings. Unreachable nodes map to infinity.
pub fn shortest_paths<N, W, G>(graph: &G, source: &N) -> Result<HashMap<N, W>>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    Dijkstra::new()
        .run(graph, source, None)
        .map(|result| result.distances)
}
