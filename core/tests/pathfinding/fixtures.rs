use degrees_core::{Dataset, Graph, build_graph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Builds a graph from undirected `(person, movie, person)` credits.
pub fn graph_from_edges(people: &[&str], edges: &[(&str, &str, &str)]) -> Graph {
    let mut adjacency: FxHashMap<&str, FxHashSet<(String, String)>> = FxHashMap::default();
    for &(a, movie, b) in edges {
        adjacency
            .entry(a)
            .or_default()
            .insert((movie.to_string(), b.to_string()));
        adjacency
            .entry(b)
            .or_default()
            .insert((movie.to_string(), a.to_string()));
    }

    build_graph(people.iter().copied(), |person_id| {
        adjacency.get(person_id).cloned().unwrap_or_default()
    })
}

/// Kevin Bacon style sample: two movie clusters bridged by one actor.
pub fn sample_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    for (id, name, birth) in [
        ("102", "Kevin Bacon", 1958),
        ("129", "Tom Cruise", 1962),
        ("158", "Tom Hanks", 1956),
        ("163", "Dustin Hoffman", 1937),
        ("197", "Jack Nicholson", 1937),
        ("200", "Bill Paxton", 1955),
        ("398", "Sally Field", 1946),
        ("420", "Valeria Golino", 1965),
        ("641", "Gary Sinise", 1955),
        ("705", "Robin Wright", 1966),
        ("1597", "Mandy Patinkin", 1952),
        ("9999", "Nobody Special", 1980),
    ] {
        dataset.add_person(id, name, Some(birth));
    }

    for (id, title, year) in [
        ("104257", "A Few Good Men", 1992),
        ("112384", "Apollo 13", 1995),
        ("109830", "Forrest Gump", 1994),
        ("93779", "The Princess Bride", 1987),
        ("95953", "Rain Man", 1988),
    ] {
        dataset.add_movie(id, title, Some(year));
    }

    for (person_id, movie_id) in [
        ("102", "104257"),
        ("129", "104257"),
        ("197", "104257"),
        ("102", "112384"),
        ("158", "112384"),
        ("200", "112384"),
        ("641", "112384"),
        ("158", "109830"),
        ("398", "109830"),
        ("641", "109830"),
        ("705", "109830"),
        ("705", "93779"),
        ("1597", "93779"),
        ("129", "95953"),
        ("163", "95953"),
        ("420", "95953"),
    ] {
        dataset.add_star(person_id, movie_id);
    }

    dataset
}

/// Hop count by plain BFS over the node indices, independent of the crate's
/// searches.
pub fn oracle_hops(graph: &Graph, source_id: &str, target_id: &str) -> Option<usize> {
    let source = graph.resolve(source_id)?;
    let target = graph.resolve(target_id)?;

    let mut distance = vec![usize::MAX; graph.node_count()];
    let mut queue = VecDeque::new();
    distance[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return Some(distance[current]);
        }
        for connection in graph.node(current).connections() {
            if distance[connection.destination] == usize::MAX {
                distance[connection.destination] = distance[current] + 1;
                queue.push_back(connection.destination);
            }
        }
    }

    None
}

/// Checks that each step's person genuinely co-stars with the previous one
/// in the stated movie.
pub fn assert_path_is_valid(dataset: &Dataset, source_id: &str, path: &[(String, String)]) {
    let mut previous = source_id.to_string();
    for (movie_id, person_id) in path {
        let movie = dataset.movie(movie_id).expect("path names a known movie");
        assert!(movie.stars.contains(&previous), "{} not in {}", previous, movie_id);
        assert!(movie.stars.contains(person_id), "{} not in {}", person_id, movie_id);
        assert_ne!(&previous, person_id);
        previous = person_id.clone();
    }
}
