use crate::dataset::{MovieId, PersonId};
use crate::graph::{Graph, MovieIndex, NodeIndex};
use rustc_hash::FxHashMap;

/// One hop of a path: the movie shared with the previous person, and the
/// person reached.
pub type PathStep = (MovieId, PersonId);

/// `(path, nodes explored, elapsed seconds)`. `path` is `None` when the two
/// people are unknown or not connected.
pub type PathResult = (Option<Vec<PathStep>>, usize, f64);

pub fn reconstruct_path(
    graph: &Graph,
    parent_map: &FxHashMap<NodeIndex, (NodeIndex, MovieIndex)>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current_node = target;

    while current_node != start {
        let (parent_node, movie) = parent_map[&current_node];
        path.push((
            graph.movie_id(movie).to_string(),
            graph.node(current_node).person_id().to_string(),
        ));
        current_node = parent_node;
    }

    path.reverse();
    path
}
