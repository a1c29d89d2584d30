use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skyroute::{GraphKind, RouteGraph};

fn ring(size: usize, kind: GraphKind) -> RouteGraph {
    let mut graph = RouteGraph::new(size, kind).unwrap();
    for i in 0..size {
        graph.add_airport(i as i32, "XXX", "", "", "", 0).unwrap();
    }
    for i in 0..size {
        graph
            .add_weighted_edge(i as i32, ((i + 1) % size) as i32, 1.0)
            .unwrap();
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build_ring");

    for size in [16usize, 128, 512] {
        group.bench_with_input(BenchmarkId::new("route_graph", size), &size, |b, &size| {
            b.iter(|| black_box(ring(size, GraphKind::Undirected)));
        });

        group.bench_with_input(BenchmarkId::new("petgraph", size), &size, |b, &size| {
            b.iter(|| {
                let mut graph =
                    petgraph::Graph::<i32, f32, petgraph::Undirected>::with_capacity(size, size);
                let nodes: Vec<_> = (0..size).map(|i| graph.add_node(i as i32)).collect();
                for i in 0..size {
                    graph.update_edge(nodes[i], nodes[(i + 1) % size], 1.0);
                }
                black_box(graph)
            });
        });
    }

    group.finish();
}

fn bench_graph_queries(c: &mut Criterion) {
    let size = 512;
    let graph = ring(size, GraphKind::Directed);

    c.bench_function("route_graph_is_neighbor_of", |b| {
        b.iter(|| {
            black_box(graph.is_neighbor_of(black_box(0), black_box(size as i32 - 1)))
        });
    });

    c.bench_function("route_graph_find_index_by_key", |b| {
        b.iter(|| black_box(graph.find_index_by_key(black_box(size as i32 - 1))));
    });
}

criterion_group!(benches, bench_graph_build, bench_graph_queries);
criterion_main!(benches);
