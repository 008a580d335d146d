//! Node-count scaling benchmarks

use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;
use toposort::TopoSort;

// Deterministic layered DAG: each node points at a few later nodes
fn layered(len: usize) -> (Vec<usize>, Vec<Vec<usize>>) {
    let nodes: Vec<usize> = (0..len).collect();
    let adjacency: Vec<Vec<usize>> = (0..len)
        .map(|i| (i + 1..len).take(3).collect())
        .collect();
    (nodes, adjacency)
}

pub fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let (nodes, adjacency) = layered(size);
                black_box(
                    TopoSort::new(nodes)
                        .edges(adjacency)
                        .sort()
                        .unwrap(),
                )
            });
        });
    }

    group.finish();
}
