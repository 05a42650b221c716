use super::utils::{PathResult, reconstruct_path};
use crate::graph::{Graph, MovieIndex, NodeIndex};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};
use tracing::debug;

struct BfsState {
    queue: VecDeque<NodeIndex>,
    visited: FxHashSet<NodeIndex>,
    parent_map: FxHashMap<NodeIndex, (NodeIndex, MovieIndex)>,
}

impl BfsState {
    fn new(start: NodeIndex) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: NodeIndex, current: NodeIndex, movie: MovieIndex) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, (current, movie));
            self.queue.push_back(neighbor);
        }
    }
}

pub fn bfs_shortest_path(graph: &Graph, source_id: &str, target_id: &str) -> PathResult {
    let search_timer = Instant::now();

    let (Some(start), Some(target)) = (graph.resolve(source_id), graph.resolve(target_id)) else {
        return (None, 0, search_timer.elapsed().as_secs_f64());
    };

    let mut bfs_state = BfsState::new(start);

    while let Some(current) = bfs_state.queue.pop_front() {
        if current == target {
            let path = reconstruct_path(graph, &bfs_state.parent_map, start, target);
            debug!(
                source_id,
                target_id,
                degrees = path.len(),
                visited = bfs_state.visited.len(),
                "bfs found path"
            );
            return (
                Some(path),
                bfs_state.visited.len(),
                search_timer.elapsed().as_secs_f64(),
            );
        }

        for connection in graph.node(current).connections() {
            bfs_state.visit_neighbor(connection.destination, current, connection.movie);
        }
    }

    debug!(source_id, target_id, visited = bfs_state.visited.len(), "bfs exhausted");
    (None, bfs_state.visited.len(), search_timer.elapsed().as_secs_f64())
}
