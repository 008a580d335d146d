//! Node filtering

use crate::common::chained_graph;
use std::cell::RefCell;
use toposort::TopoSort;

#[test]
fn filtered_node_and_its_edges_disappear() {
    let (nodes, adjacency) = chained_graph();

    let order = TopoSort::new(nodes)
        .edges(adjacency)
        .filter(|n| *n == "c")
        .sort()
        .unwrap();

    assert_eq!(order, ["a", "b", "d"]);
}

#[test]
fn filtering_equals_removing_the_node_up_front() {
    let (nodes, adjacency) = chained_graph();

    let filtered = TopoSort::new(nodes.clone())
        .edges(adjacency.clone())
        .filter(|n| *n == "c")
        .sort()
        .unwrap();

    // Same graph with c and every edge touching c removed by hand
    let pruned_nodes: Vec<&str> = nodes.into_iter().filter(|n| *n != "c").collect();
    let pruned_adjacency: Vec<Vec<&str>> = vec![vec!["b"], vec!["d"], vec![]];
    let pruned = TopoSort::new(pruned_nodes)
        .edges(pruned_adjacency)
        .sort()
        .unwrap();

    assert_eq!(filtered, pruned);
}

#[test]
fn filtering_every_node_yields_an_empty_order() {
    let (nodes, adjacency) = chained_graph();

    let order = TopoSort::new(nodes)
        .edges(adjacency)
        .filter(|_| true)
        .sort()
        .unwrap();

    assert!(order.is_empty());
}

#[test]
fn filtered_nodes_do_not_count_toward_cycle_detection() {
    // The only cycle runs through "c"; excluding it leaves an acyclic rest
    let nodes = vec!["a", "b", "c"];
    let adjacency = vec![vec!["b"], vec!["c"], vec!["a"]];

    let order = TopoSort::new(nodes)
        .edges(adjacency)
        .filter(|n| *n == "c")
        .sort()
        .unwrap();

    assert_eq!(order, ["a", "b"]);
}

#[test]
fn cycles_among_kept_nodes_still_fail() {
    let nodes = vec!["a", "b", "c"];
    let adjacency = vec![vec!["b"], vec!["a"], vec![]];

    let result = TopoSort::new(nodes)
        .edges(adjacency)
        .filter(|n| *n == "c")
        .sort();

    assert!(result.is_err());
}

#[test]
fn edge_callback_is_never_consulted_for_filtered_nodes() {
    let (nodes, adjacency) = chained_graph();
    let consulted = RefCell::new(Vec::new());

    let order = TopoSort::new(nodes.clone())
        .edges_with(|n: &&str| {
            consulted.borrow_mut().push(*n);
            let index = nodes.iter().position(|m| m == n).unwrap();
            adjacency[index].clone()
        })
        .filter(|n| *n == "c")
        .sort()
        .unwrap();

    assert_eq!(order, ["a", "b", "d"]);
    assert_eq!(*consulted.borrow(), ["a", "b", "d"]);
}

#[test]
fn filter_applies_to_flipped_sorts_too() {
    let (nodes, adjacency) = chained_graph();

    let order = TopoSort::new(nodes)
        .edges(adjacency)
        .flip_edges(true)
        .filter(|n| *n == "c")
        .sort()
        .unwrap();

    assert_eq!(order, ["d", "b", "a"]);
}
