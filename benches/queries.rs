//! 查询性能基准

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roadgraph::{Edge, Graph, Vertex, VertexId};

fn build_graph(n: u64, density: f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(1);
    let vertices = (0..n)
        .map(|i| Vertex::new(VertexId::new(i), format!("City{i}")))
        .collect();
    let mut edges = Vec::new();
    for o in 0..n {
        for d in 0..n {
            if o != d && rng.gen_bool(density) {
                edges.push(Edge::new(
                    VertexId::new(o),
                    VertexId::new(d),
                    rng.gen_range(1..500),
                ));
            }
        }
    }
    Graph::new(vertices, edges).expect("valid graph")
}

fn bench_queries(c: &mut Criterion) {
    let sparse = build_graph(200, 0.02);
    let dense = build_graph(9, 0.6);

    c.bench_function("is_connected/200", |b| {
        b.iter(|| black_box(sparse.is_connected()))
    });

    c.bench_function("shortest_paths/200", |b| {
        b.iter(|| black_box(sparse.shortest_paths_from_source(VertexId::new(0))))
    });

    c.bench_function("routes/9-dense", |b| {
        b.iter(|| black_box(dense.visit_all_roads_and_cities(VertexId::new(0))))
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
