//! Fan-out benchmarks: one root pointing at every other node

use criterion::Criterion;
use std::hint::black_box;
use toposort::topo_sort;

fn fanout(width: usize) -> (Vec<usize>, Vec<Vec<usize>>) {
    let nodes: Vec<usize> = (0..=width).collect();
    let mut adjacency = vec![(1..=width).collect::<Vec<usize>>()];
    adjacency.resize(width + 1, Vec::new());
    (nodes, adjacency)
}

pub fn bench_fanout(c: &mut Criterion) {
    c.bench_function("fanout_100", |b| {
        b.iter(|| {
            let (nodes, adjacency) = fanout(100);
            black_box(topo_sort(nodes, adjacency).unwrap())
        });
    });

    c.bench_function("fanout_1000", |b| {
        b.iter(|| {
            let (nodes, adjacency) = fanout(1000);
            black_box(topo_sort(nodes, adjacency).unwrap())
        });
    });
}
