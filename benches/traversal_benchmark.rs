use adjwalk::fixture::sample_graph;
use adjwalk::graph::traversal::{bfs, dfs, dfs_recursive};
use adjwalk::AdjacencyList;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Complete binary tree with edges in both directions.
fn binary_tree(size: usize) -> AdjacencyList {
    let mut adj = vec![Vec::new(); size];
    for child in 1..size {
        let parent = (child - 1) / 2;
        adj[parent].push(child);
        adj[child].push(parent);
    }
    AdjacencyList::from_adjacency(adj)
}

fn bench_fixture(c: &mut Criterion) {
    let graph = sample_graph();

    c.bench_function("fixture_bfs", |b| b.iter(|| black_box(bfs(&graph, 0))));
    c.bench_function("fixture_dfs", |b| b.iter(|| black_box(dfs(&graph, 0))));
    c.bench_function("fixture_dfs_recursive", |b| {
        b.iter(|| black_box(dfs_recursive(&graph, 0)));
    });
}

fn bench_tree(c: &mut Criterion) {
    let size = 10_000;
    let graph = binary_tree(size);

    c.bench_function("tree_bfs", |b| b.iter(|| black_box(bfs(&graph, 0))));
    c.bench_function("tree_dfs", |b| b.iter(|| black_box(dfs(&graph, 0))));
    // Depth is log2(size), safe for recursion.
    c.bench_function("tree_dfs_recursive", |b| {
        b.iter(|| black_box(dfs_recursive(&graph, 0)));
    });
}

criterion_group!(benches, bench_fixture, bench_tree);
criterion_main!(benches);
