use crate::dataset::{MovieId, PersonId};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Slot of a person's node in the graph arena.
pub type NodeIndex = usize;

/// Interned movie identifier (avoids storing the id string on every edge).
pub type MovieIndex = u32;

/// A directed co-starring edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub source: NodeIndex,
    pub movie: MovieIndex,
    pub destination: NodeIndex,
}

/// Static adjacency for one person.
#[derive(Debug, Clone)]
pub struct PathNode {
    index: NodeIndex,
    person_id: PersonId,
    connections: Vec<Connection>,
    existing: FxHashSet<(MovieIndex, NodeIndex)>,
}

impl PathNode {
    pub fn new(index: NodeIndex, person_id: impl Into<PersonId>) -> Self {
        Self {
            index,
            person_id: person_id.into(),
            connections: Vec::new(),
            existing: FxHashSet::default(),
        }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn person_id(&self) -> &str {
        &self.person_id
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Adds an edge to `destination` via `movie`.
    ///
    /// Returns `false` for a repeated `(movie, destination)` pair or an edge
    /// back to this node.
    pub fn add_connection(&mut self, movie: MovieIndex, destination: NodeIndex) -> bool {
        if destination == self.index || !self.existing.insert((movie, destination)) {
            return false;
        }

        self.connections.push(Connection {
            source: self.index,
            movie,
            destination,
        });
        true
    }
}

/// Co-starring graph: one node per person, edges labelled by movie.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<PathNode>,
    node_index: FxHashMap<PersonId, NodeIndex>,
    movies: Vec<MovieId>,
    movie_index: FxHashMap<MovieId, MovieIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            node_index: FxHashMap::with_capacity_and_hasher(node_count, Default::default()),
            movies: Vec::new(),
            movie_index: FxHashMap::default(),
        }
    }

    /// Returns the node for `person_id`, creating it if needed.
    pub fn add_node(&mut self, person_id: &str) -> NodeIndex {
        if let Some(&index) = self.node_index.get(person_id) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(PathNode::new(index, person_id));
        self.node_index.insert(person_id.to_string(), index);
        index
    }

    pub fn intern_movie(&mut self, movie_id: &str) -> MovieIndex {
        if let Some(&index) = self.movie_index.get(movie_id) {
            return index;
        }

        let index = self.movies.len() as MovieIndex;
        self.movies.push(movie_id.to_string());
        self.movie_index.insert(movie_id.to_string(), index);
        index
    }

    pub fn add_connection(
        &mut self,
        source: NodeIndex,
        movie_id: &str,
        destination: NodeIndex,
    ) -> bool {
        let movie = self.intern_movie(movie_id);
        self.nodes[source].add_connection(movie, destination)
    }

    pub fn resolve(&self, person_id: &str) -> Option<NodeIndex> {
        self.node_index.get(person_id).copied()
    }

    pub fn node(&self, index: NodeIndex) -> &PathNode {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn movie_id(&self, movie: MovieIndex) -> &str {
        &self.movies[movie as usize]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.connections.len()).sum()
    }
}

/// Builds the co-starring graph.
///
/// Every id in `people` gets a node first; then each person is linked to the
/// co-stars `neighbor_fn` reports for them. Co-stars outside `people` are
/// ignored, as are duplicate credits and the person's own credit.
pub fn build_graph<'a, P, F, N>(people: P, mut neighbor_fn: F) -> Graph
where
    P: IntoIterator<Item = &'a str>,
    F: FnMut(&str) -> N,
    N: IntoIterator<Item = (MovieId, PersonId)>,
{
    let people: Vec<&str> = people.into_iter().collect();
    let mut graph = Graph::with_capacity(people.len());

    for &person_id in &people {
        graph.add_node(person_id);
    }

    for &person_id in &people {
        let source = graph.add_node(person_id);
        for (movie_id, neighbor_id) in neighbor_fn(person_id) {
            if let Some(destination) = graph.resolve(&neighbor_id) {
                graph.add_connection(source, &movie_id, destination);
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        movies = graph.movies.len(),
        "built co-starring graph"
    );

    graph
}
