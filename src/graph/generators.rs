use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` nodes and roughly `edge_factor * n` edges.
/// Weights are drawn uniformly from `1.0..100.0`; self-loops are skipped.
/// The same seed always produces the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid where node `y * width + x` links to its
/// neighbors in both directions. Straight moves cost 1.0; with `diagonal` set,
/// diagonal moves are added at cost 1.4.
pub fn generate_grid(width: usize, height: usize, diagonal: bool) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let straight = [(0, -1), (1, 0), (0, 1), (-1, 0)];
    let diagonals = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

    for y in 0..height {
        for x in 0..width {
            let node = y * width + x;
            graph.add_node(node);

            let moves = straight
                .iter()
                .map(|&step| (step, 1.0))
                .chain(diagonals.iter().filter(|_| diagonal).map(|&step| (step, 1.4)));

            for ((dx, dy), cost) in moves {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(node, neighbor, OrderedFloat(cost));
                }
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random(50, 3.0, 7);
        let b = generate_random(50, 3.0, 7);
        assert_eq!(a.node_count(), 50);
        assert_eq!(a.edge_count(), b.edge_count());
        for v in 0..50 {
            let ea: Vec<_> = a.outgoing_edges(&v).collect();
            let eb: Vec<_> = b.outgoing_edges(&v).collect();
            assert_eq!(ea, eb);
        }
    }

    #[test]
    fn grid_edge_counts() {
        let grid = generate_grid(3, 2, false);
        assert_eq!(grid.node_count(), 6);
        // 4 horizontal and 3 vertical links, each in both directions
        assert_eq!(grid.edge_count(), 2 * (2 * 2 + 3));

        let diagonal = generate_grid(2, 2, true);
        assert_eq!(diagonal.edge_count(), 12);
    }
}
