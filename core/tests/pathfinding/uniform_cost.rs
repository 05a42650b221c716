use crate::fixtures::{assert_path_is_valid, graph_from_edges, oracle_hops, sample_dataset};
use degrees_core::pathfinding::INFINITE_COST;
use degrees_core::{PathFinder, shortest_path};

fn steps(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(movie, person)| (movie.to_string(), person.to_string()))
        .collect()
}

#[test]
fn test_direct_edge_beats_two_hop_route() {
    let graph = graph_from_edges(
        &["A", "B", "C"],
        &[("A", "m1", "B"), ("B", "m2", "C"), ("A", "m3", "C")],
    );

    let path = shortest_path(&graph, "A", "C");

    assert_eq!(path, Some(steps(&[("m3", "C")])));
}

#[test]
fn test_two_hop_chain() {
    let graph = graph_from_edges(&["A", "B", "C"], &[("A", "m1", "B"), ("B", "m2", "C")]);

    let path = shortest_path(&graph, "A", "C");

    assert_eq!(path, Some(steps(&[("m1", "B"), ("m2", "C")])));
}

#[test]
fn test_same_person_is_zero_degrees() {
    let graph = graph_from_edges(&["A", "B"], &[("A", "m1", "B")]);

    assert_eq!(shortest_path(&graph, "A", "A"), Some(vec![]));
}

#[test]
fn test_unreachable_is_none_not_empty() {
    let graph = graph_from_edges(&["A", "B", "C"], &[("A", "m1", "B")]);

    assert_eq!(shortest_path(&graph, "A", "C"), None);
}

#[test]
fn test_unknown_people_are_none() {
    let graph = graph_from_edges(&["A", "B"], &[("A", "m1", "B")]);

    assert_eq!(shortest_path(&graph, "A", "Z"), None);
    assert_eq!(shortest_path(&graph, "Z", "A"), None);

    let (path, explored, _) = PathFinder::new(&graph).find_path("Z", "A");
    assert!(path.is_none());
    assert_eq!(explored, 0);
}

#[test]
fn test_edges_to_people_outside_the_graph_are_ignored() {
    // "ghost" has credits but is not a known person, so cannot bridge A and C.
    let graph = graph_from_edges(
        &["A", "C"],
        &[("A", "m1", "ghost"), ("ghost", "m2", "C")],
    );

    assert_eq!(shortest_path(&graph, "A", "C"), None);
}

#[test]
fn test_sample_paths_match_oracle_and_are_valid() {
    let dataset = sample_dataset();
    let graph = dataset.build_graph();

    let pairs = [
        ("102", "129"),
        ("163", "1597"),
        ("1597", "163"),
        ("197", "705"),
        ("420", "398"),
        ("200", "641"),
        ("102", "9999"),
    ];

    for (source, target) in pairs {
        let path = shortest_path(&graph, source, target);
        let expected = oracle_hops(&graph, source, target);

        assert_eq!(path.as_ref().map(Vec::len), expected, "{} -> {}", source, target);
        if let Some(path) = path {
            assert_path_is_valid(&dataset, source, &path);
            assert_eq!(path.last().map(|(_, person)| person.as_str()), Some(target));
        }
    }
}

#[test]
fn test_hoffman_to_patinkin_is_five_degrees() {
    let dataset = sample_dataset();
    let graph = dataset.build_graph();

    let path = shortest_path(&graph, "163", "1597").unwrap();

    assert_eq!(path.len(), 5);
    assert_eq!(path[0], ("95953".to_string(), "129".to_string()));
    assert_eq!(path[1], ("104257".to_string(), "102".to_string()));
    assert_eq!(path[4], ("93779".to_string(), "1597".to_string()));
}

#[test]
fn test_reused_finder_matches_fresh_graph() {
    let dataset = sample_dataset();
    let graph = dataset.build_graph();
    let mut finder = PathFinder::new(&graph);

    let first = finder.find_path("163", "1597").0;
    let unrelated = finder.find_path("705", "197").0;
    let missing = finder.find_path("102", "9999").0;
    let again = finder.find_path("163", "1597").0;

    let fresh_graph = sample_dataset().build_graph();
    let fresh = shortest_path(&fresh_graph, "163", "1597");

    assert!(unrelated.is_some());
    assert!(missing.is_none());
    assert_eq!(first, again);
    assert_eq!(first.map(|p| p.len()), fresh.map(|p| p.len()));
}

#[test]
fn test_state_costs_are_hop_counts_from_source() {
    let graph = graph_from_edges(
        &["A", "B", "C", "D"],
        &[("A", "m1", "B"), ("B", "m2", "C"), ("A", "m3", "C")],
    );
    let mut finder = PathFinder::new(&graph);
    finder.find_path("A", "D");

    let state = finder.state();
    let cost_of = |id: &str| state.cost(graph.resolve(id).unwrap());
    assert_eq!(cost_of("A"), 0);
    assert_eq!(cost_of("B"), 1);
    assert_eq!(cost_of("C"), 1);
    assert_eq!(cost_of("D"), INFINITE_COST);

    // The next query starts from scratch.
    finder.find_path("D", "D");
    let state = finder.state();
    assert_eq!(state.cost(graph.resolve("B").unwrap()), INFINITE_COST);
    assert_eq!(state.node(graph.resolve("C").unwrap()).predecessor, None);
}

#[test]
fn test_explored_count_reports_expanded_nodes() {
    let graph = graph_from_edges(&["A", "B", "C"], &[("A", "m1", "B"), ("B", "m2", "C")]);

    let (path, explored, elapsed) = PathFinder::new(&graph).find_path("A", "C");

    assert!(path.is_some());
    assert_eq!(explored, 2); // A and B expanded; C reached
    assert!(elapsed >= 0.0);
}
