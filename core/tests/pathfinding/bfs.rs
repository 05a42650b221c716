use crate::fixtures::{assert_path_is_valid, graph_from_edges, oracle_hops, sample_dataset};
use degrees_core::{
    Algorithm, PathfindingConfig, bfs_shortest_path, find_path, shortest_path,
};

#[test]
fn test_bfs_find_direct_path() {
    let graph = graph_from_edges(&["A", "B"], &[("A", "m1", "B")]);

    let (path, visited_count, _) = bfs_shortest_path(&graph, "A", "B");

    assert_eq!(path, Some(vec![("m1".to_string(), "B".to_string())]));
    assert_eq!(visited_count, 2);
}

#[test]
fn test_bfs_no_path() {
    let graph = graph_from_edges(&["A", "B", "isolated"], &[("A", "m1", "B")]);

    let (path, visited_count, _) = bfs_shortest_path(&graph, "A", "isolated");

    assert!(path.is_none());
    assert_eq!(visited_count, 2); // Visited A and B
}

#[test]
fn test_bfs_same_person() {
    let graph = graph_from_edges(&["A"], &[]);

    let (path, _, _) = bfs_shortest_path(&graph, "A", "A");

    assert_eq!(path, Some(vec![]));
}

#[test]
fn test_bfs_agrees_with_uniform_cost_on_hop_count() {
    let dataset = sample_dataset();
    let graph = dataset.build_graph();
    let people: Vec<&str> = graph.nodes().iter().map(|node| node.person_id()).collect();

    for &source in &people {
        for &target in &people {
            let (bfs_path, _, _) = bfs_shortest_path(&graph, source, target);
            let ucs_path = shortest_path(&graph, source, target);

            assert_eq!(
                bfs_path.as_ref().map(Vec::len),
                ucs_path.as_ref().map(Vec::len),
                "{} -> {}",
                source,
                target
            );
            assert_eq!(
                bfs_path.as_ref().map(Vec::len),
                oracle_hops(&graph, source, target)
            );
            if let Some(path) = bfs_path {
                assert_path_is_valid(&dataset, source, &path);
            }
        }
    }
}

#[test]
fn test_find_path_dispatches_on_config() {
    let graph = graph_from_edges(&["A", "B", "C"], &[("A", "m1", "B"), ("B", "m2", "C")]);

    let ucs = find_path(&graph, "A", "C", &PathfindingConfig::default());
    let bfs = find_path(&graph, "A", "C", &PathfindingConfig::new(Algorithm::Bfs));

    assert_eq!(ucs.0, bfs.0);
    assert_eq!(ucs.0.map(|p| p.len()), Some(2));
    // BFS counts discovered people, uniform-cost counts expanded ones.
    assert_eq!(bfs.1, 3);
    assert_eq!(ucs.1, 2);
}
