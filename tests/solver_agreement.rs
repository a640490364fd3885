use parallel_sssp::algorithm::dijkstra::Dijkstra;
use parallel_sssp::algorithm::parallel::ParallelDijkstra;
use parallel_sssp::graph::{random_connected_graph, Distance, Graph, NodeId, INFINITY};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Reference distances by repeated edge relaxation
fn bellman_ford(graph: &Graph, start: NodeId) -> Vec<Distance> {
    let mut dist = vec![INFINITY; graph.node_count()];
    dist[start.index()] = 0;
    loop {
        let mut changed = false;
        for u in graph.node_ids() {
            if dist[u.index()] == INFINITY {
                continue;
            }
            for edge in graph.outgoing_edges(u).unwrap() {
                let candidate = dist[u.index()] + Distance::from(edge.weight);
                if candidate < dist[edge.to.index()] {
                    dist[edge.to.index()] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

fn assert_triangle_inequality(graph: &Graph, dist: &[Distance]) {
    for u in graph.node_ids() {
        for edge in graph.outgoing_edges(u).unwrap() {
            let through_u = dist[u.index()].saturating_add(Distance::from(edge.weight));
            assert!(
                dist[edge.to.index()] <= through_u,
                "edge {} -> {} ({}) is not relaxed",
                u,
                edge.to,
                edge.weight
            );
        }
    }
}

#[test]
fn test_random_graphs_match_reference() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);
    let dijkstra = Dijkstra::new();
    let parallel = ParallelDijkstra::new().with_workers(4);

    for _ in 0..10 {
        let mut graph = random_connected_graph(&mut rng, 300, 900, 50).unwrap();
        let start = NodeId(rng.gen_range(0..graph.node_count()));
        let destination = NodeId(rng.gen_range(0..graph.node_count()));
        let expected = bellman_ford(&graph, start);

        graph.reset_distances();
        let seq = dijkstra.run(&mut graph, start, destination).unwrap();
        let par = parallel.run(&graph, start, destination).unwrap();

        assert_eq!(seq, expected[destination.index()]);
        assert_eq!(par, expected[destination.index()]);
        assert_eq!(graph.distances(), expected);
        assert_eq!(graph.atomic_distances(), expected);
        assert_triangle_inequality(&graph, &graph.distances());
        assert_triangle_inequality(&graph, &graph.atomic_distances());
    }
}

#[test]
fn test_rerun_after_reset_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut graph = random_connected_graph(&mut rng, 500, 2_000, 100).unwrap();
    let start = NodeId(3);
    let destination = NodeId(250);
    let parallel = ParallelDijkstra::new();

    let first_seq = Dijkstra::new().run(&mut graph, start, destination).unwrap();
    let first_par = parallel.run(&graph, start, destination).unwrap();
    let first_all = graph.atomic_distances();

    for _ in 0..3 {
        graph.reset_distances();
        assert_eq!(Dijkstra::new().run(&mut graph, start, destination).unwrap(), first_seq);
        assert_eq!(parallel.run(&graph, start, destination).unwrap(), first_par);
        assert_eq!(graph.atomic_distances(), first_all);
    }
    assert_eq!(first_seq, first_par);
}

#[test]
fn test_every_destination_matches() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut graph = random_connected_graph(&mut rng, 60, 150, 20).unwrap();
    let start = NodeId(0);

    for destination in graph.node_ids().collect::<Vec<_>>() {
        graph.reset_distances();
        let seq = Dijkstra::new().run(&mut graph, start, destination).unwrap();
        let par = ParallelDijkstra::new().with_workers(8).run(&graph, start, destination).unwrap();
        assert_eq!(seq, par, "destination {}", destination);
    }
}

#[test]
fn test_stress_large_graph() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut graph = random_connected_graph(&mut rng, 10_000, 50_000, 100).unwrap();
    let parallel = ParallelDijkstra::new();

    for _ in 0..20 {
        let start = NodeId(rng.gen_range(0..graph.node_count()));
        let destination = NodeId(rng.gen_range(0..graph.node_count()));

        graph.reset_distances();
        let seq = Dijkstra::new().run(&mut graph, start, destination).unwrap();
        let par = parallel.run(&graph, start, destination).unwrap();

        assert_eq!(seq, par, "{} -> {}", start, destination);
        assert_eq!(graph.distances(), graph.atomic_distances());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_solvers_agree(
        seed in any::<u64>(),
        nodes in 1usize..40,
        extra in 0usize..60,
        max_weight in 1u32..1_000,
        workers in 1usize..6,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let free_pairs = nodes * (nodes - 1) / 2 - (nodes - 1);
        let edges = nodes - 1 + extra.min(free_pairs);
        let mut graph = random_connected_graph(&mut rng, nodes, edges, max_weight).unwrap();
        let start = NodeId(rng.gen_range(0..nodes));
        let destination = NodeId(rng.gen_range(0..nodes));

        let seq = Dijkstra::new().run(&mut graph, start, destination).unwrap();
        let par = ParallelDijkstra::new()
            .with_workers(workers)
            .run(&graph, start, destination)
            .unwrap();

        prop_assert_eq!(seq, par);
        prop_assert_eq!(graph.distances(), bellman_ford(&graph, start));
        prop_assert_eq!(graph.atomic_distances(), graph.distances());
    }
}

#[test]
fn test_dense_graph_under_contention() {
    let mut rng = StdRng::seed_from_u64(150);
    let nodes = 150;
    let mut graph = Graph::with_capacity(nodes);
    for u in 0..nodes {
        for v in 0..nodes {
            if u != v {
                graph.add_edge(NodeId(u), NodeId(v), rng.gen_range(0..4)).unwrap();
            }
        }
    }
    let parallel = ParallelDijkstra::new().with_workers(16);

    for _ in 0..20 {
        let start = NodeId(rng.gen_range(0..nodes));
        graph.reset_distances();
        let seq = Dijkstra::new().run(&mut graph, start, NodeId(0)).unwrap();
        let par = parallel.run(&graph, start, NodeId(0)).unwrap();

        assert_eq!(seq, par);
        assert_eq!(graph.distances(), graph.atomic_distances());
    }
}
