use heap_paths::graph::{Graph, MutableGraph};
use heap_paths::{CancellationToken, DirectedGraph, Error, Prim};
use ordered_float::OrderedFloat;
use std::collections::HashSet;

fn undirected(edges: &[(u32, u32, f64)]) -> DirectedGraph<u32, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();
    for &(a, b, w) in edges {
        graph.add_undirected_edge(a, b, OrderedFloat(w));
    }
    graph
}

fn five_vertex_graph() -> DirectedGraph<u32, OrderedFloat<f64>> {
    undirected(&[
        (0, 1, 2.0),
        (0, 3, 6.0),
        (1, 2, 3.0),
        (1, 3, 8.0),
        (1, 4, 5.0),
        (2, 4, 7.0),
        (3, 4, 9.0),
    ])
}

#[test]
fn test_spanning_tree_total_weight() {
    let graph = five_vertex_graph();
    let tree = Prim::new().minimum_spanning_tree(&graph, &0).unwrap();

    assert_eq!(tree.total_weight, OrderedFloat(16.0));
    assert_eq!(tree.edges.len(), 4);
    assert_eq!(tree.node_count(), graph.node_count());

    let chosen: HashSet<(u32, u32)> = tree.edges.iter().map(|&(a, b, _)| (a.min(b), a.max(b))).collect();
    let expected = HashSet::from([(0, 1), (1, 2), (1, 4), (0, 3)]);
    assert_eq!(chosen, expected);
}

#[test]
fn test_start_node_does_not_change_weight() {
    let graph = five_vertex_graph();
    for start in 0..5 {
        let tree = Prim::new().minimum_spanning_tree(&graph, &start).unwrap();
        assert_eq!(tree.total_weight, OrderedFloat(16.0), "start {}", start);
        for (parent, child, weight) in &tree.edges {
            assert_eq!(graph.get_edge_weight(parent, child), Some(*weight));
        }
    }
}

#[test]
fn test_spans_only_start_component() {
    let mut graph = undirected(&[(0, 1, 1.0), (1, 2, 2.0), (10, 11, 5.0)]);
    graph.add_node(20);

    let tree = Prim::new().minimum_spanning_tree(&graph, &0).unwrap();
    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.total_weight, OrderedFloat(3.0));

    let isolated = Prim::new().minimum_spanning_tree(&graph, &20).unwrap();
    assert_eq!(isolated.node_count(), 1);
    assert!(isolated.edges.is_empty());
}

#[test]
fn test_negative_weights_are_spanned() {
    let graph = undirected(&[(0, 1, -2.0), (1, 2, 3.0), (0, 2, 1.0)]);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.get_edge_weight(&1, &0), Some(OrderedFloat(-2.0)));

    let tree = Prim::new().minimum_spanning_tree(&graph, &0).unwrap();
    assert_eq!(tree.total_weight, OrderedFloat(-1.0));
    assert_eq!(tree.node_count(), 3);

    let chosen: HashSet<(u32, u32)> = tree.edges.iter().map(|&(a, b, _)| (a.min(b), a.max(b))).collect();
    assert_eq!(chosen, HashSet::from([(0, 1), (0, 2)]));
}

#[test]
fn test_unknown_start_and_cancellation() {
    let graph = five_vertex_graph();
    let err = Prim::new().minimum_spanning_tree(&graph, &9).unwrap_err();
    assert!(matches!(err, Error::UnknownSource(_)));

    let token = CancellationToken::new();
    token.cancel();
    let err = Prim::new()
        .with_cancellation(token)
        .minimum_spanning_tree(&graph, &0)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}
