//! 图查询的整体性质测试

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roadgraph::{Edge, Error, Graph, RoadNetwork, Vertex, VertexId};
use std::collections::{HashSet, VecDeque};

fn id(i: u64) -> VertexId {
    VertexId::new(i)
}

fn random_graph(rng: &mut StdRng, n: u64, density: f64) -> Graph {
    let vertices = (1..=n).map(|i| Vertex::new(id(i), format!("City{i}"))).collect();
    let mut edges = Vec::new();
    for o in 1..=n {
        for d in 1..=n {
            if rng.gen_bool(density) {
                edges.push(Edge::new(id(o), id(d), rng.gen_range(0..100)));
            }
        }
    }
    Graph::new(vertices, edges).unwrap()
}

/// 直接在边表上做 BFS 的参考实现
fn bfs_count(graph: &Graph, root: VertexId) -> usize {
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        for edge in graph.edges().iter().filter(|e| e.origin() == current) {
            if visited.insert(edge.destination()) {
                queue.push_back(edge.destination());
            }
        }
    }
    visited.len()
}

/// Bellman-Ford 作为最终距离的参考
fn reference_distances(graph: &Graph, source: VertexId) -> Vec<Option<u64>> {
    let ids: Vec<VertexId> = graph.vertices().map(Vertex::id).collect();
    let index = |v: VertexId| ids.iter().position(|&x| x == v).unwrap();
    let mut dist = vec![None; ids.len()];
    dist[index(source)] = Some(0u64);
    for _ in 0..ids.len() {
        for e in graph.edges() {
            if let Some(d) = dist[index(e.origin())] {
                let candidate = d + e.distance();
                let slot = &mut dist[index(e.destination())];
                if slot.map_or(true, |cur| candidate < cur) {
                    *slot = Some(candidate);
                }
            }
        }
    }
    dist
}

#[test]
fn test_round_trip_example() {
    let graph = Graph::new(
        vec![
            Vertex::new(id(1), "A"),
            Vertex::new(id(2), "B"),
            Vertex::new(id(3), "C"),
        ],
        vec![
            Edge::new(id(1), id(2), 10),
            Edge::new(id(2), id(3), 5),
            Edge::new(id(1), id(3), 20),
        ],
    )
    .unwrap();

    assert!(!graph.is_connected());

    let reachable: Vec<VertexId> = graph
        .reachable_vertices(id(1))
        .unwrap()
        .into_iter()
        .map(Vertex::id)
        .collect();
    assert_eq!(reachable, vec![id(2), id(3)]);

    let paths = graph.shortest_paths_from_source(id(1)).unwrap();
    let finals = paths.final_distances();
    assert_eq!(finals[&id(2)], 10);
    assert_eq!(finals[&id(3)], 15);

    let to_c: Vec<u64> = paths
        .records()
        .iter()
        .filter(|r| r.destination == id(3))
        .map(|r| r.distance)
        .collect();
    assert_eq!(to_c, vec![20, 15]);
}

#[test]
fn test_isolated_vertex() {
    let graph = Graph::new(
        vec![
            Vertex::new(id(1), "A"),
            Vertex::new(id(2), "B"),
            Vertex::new(id(3), "C"),
            Vertex::new(id(4), "D"),
        ],
        vec![
            Edge::new(id(1), id(2), 1),
            Edge::new(id(2), id(3), 1),
            Edge::new(id(3), id(1), 1),
        ],
    )
    .unwrap();

    assert!(!graph.is_connected());
    for v in 1..=3 {
        let unreachable = graph.unreachable_vertices(id(v)).unwrap();
        assert!(unreachable.iter().any(|x| x.id() == id(4)));
    }
}

#[test]
fn test_empty_edge_set() {
    for n in 0..4u64 {
        let vertices = (1..=n).map(|i| Vertex::new(id(i), format!("C{i}"))).collect();
        let graph = Graph::new(vertices, vec![]).unwrap();

        assert_eq!(graph.is_connected(), n <= 1);
        for v in 1..=n {
            assert!(graph.reachable_vertices(id(v)).unwrap().is_empty());
            assert!(graph
                .shortest_paths_from_source(id(v))
                .unwrap()
                .records()
                .is_empty());
        }
    }
}

#[test]
fn test_unknown_vertex_is_reported() {
    let graph = Graph::new(vec![Vertex::new(id(1), "A")], vec![]).unwrap();

    assert!(matches!(
        graph.unreachable_vertices(id(2)),
        Err(Error::VertexNotFound(_))
    ));
    assert!(matches!(
        graph.visit_all_roads_and_cities(id(2)),
        Err(Error::VertexNotFound(_))
    ));
    assert!(matches!(
        graph.shortest_paths_from_source(id(2)),
        Err(Error::VertexNotFound(_))
    ));
}

#[test]
fn test_random_connectivity_matches_bfs() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..40 {
        let n = 1 + round % 7;
        let graph = random_graph(&mut rng, n, 0.35);
        let expected = (1..=n).all(|v| bfs_count(&graph, id(v)) == n as usize);
        assert_eq!(graph.is_connected(), expected, "round {round}");
    }
}

#[test]
fn test_random_reachability_partition() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, 6, 0.3);
        for v in 1..=6 {
            let reachable = graph.reachable_vertices(id(v)).unwrap();
            let unreachable = graph.unreachable_vertices(id(v)).unwrap();

            let mut all: HashSet<VertexId> = reachable.iter().map(|x| x.id()).collect();
            for x in &unreachable {
                assert!(all.insert(x.id()), "overlap at {}", x.id());
            }
            assert!(all.insert(id(v)));
            assert_eq!(all.len(), graph.vertex_count());
        }
    }
}

#[test]
fn test_random_routes_are_simple_and_maximal() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, 5, 0.4);
        for v in 1..=5 {
            let routes = graph.visit_all_roads_and_cities(id(v)).unwrap();
            assert!(!routes.is_empty());

            for route in &routes {
                assert_eq!(route.source(), id(v));
                let unique: HashSet<_> = route.vertices().iter().collect();
                assert_eq!(unique.len(), route.len());

                // 终点的所有邻居都已在路线上
                let last = route.destination();
                for next in graph.neighbors(last).unwrap() {
                    assert!(route.contains(next));
                }
            }

            let distinct: HashSet<Vec<VertexId>> =
                routes.iter().map(|r| r.vertices().to_vec()).collect();
            assert_eq!(distinct.len(), routes.len());
        }
    }
}

#[test]
fn test_random_shortest_paths_match_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..30 {
        let graph = random_graph(&mut rng, 6, 0.35);
        let ids: Vec<VertexId> = graph.vertices().map(Vertex::id).collect();

        for &source in &ids {
            let paths = graph.shortest_paths_from_source(source).unwrap();
            let expected = reference_distances(&graph, source);

            assert!(paths.records().iter().all(|r| r.destination != source));
            for (i, &target) in ids.iter().enumerate() {
                assert_eq!(paths.distance_to(target), expected[i]);
            }

            // 同一终点的记录严格递减
            for &target in &ids {
                let trail: Vec<u64> = paths
                    .records()
                    .iter()
                    .filter(|r| r.destination == target)
                    .map(|r| r.distance)
                    .collect();
                assert!(trail.windows(2).all(|w| w[1] < w[0]));
            }
        }
    }
}

#[test]
fn test_import_then_query() {
    let cities = "id,name\n1,São Paulo\n2,Rio de Janeiro\n3,Belo Horizonte\n";
    let roads = "origin,destination,distance,bidirectional\n\
                 1,2,430,true\n\
                 2,3,440,true\n\
                 1,3,586,false\n";
    let (network, _) = RoadNetwork::from_csv_readers(cities.as_bytes(), roads.as_bytes()).unwrap();
    let graph = network.into_graph().unwrap();

    assert!(graph.is_connected());
    let sp = graph.vertex_by_name("São Paulo").unwrap().id();
    let bh = graph.vertex_by_name("Belo Horizonte").unwrap().id();
    assert_eq!(graph.shortest_paths_from_source(sp).unwrap().distance_to(bh), Some(586));
    assert_eq!(graph.shortest_paths_from_source(bh).unwrap().distance_to(sp), Some(870));
}
