use super::state::{EDGE_COST, SearchState};
use super::utils::{PathResult, PathStep};
use crate::graph::{Connection, Graph, NodeIndex};
use crate::heap::{HeapEntry, IndexedMinHeap};
use std::time::Instant;
use tracing::debug;

/// Uniform-cost search over a shared graph.
///
/// Owns its search state and frontier, so repeated queries reuse the same
/// allocations and several finders can search one graph side by side.
pub struct PathFinder<'g> {
    graph: &'g Graph,
    state: SearchState,
    frontier: IndexedMinHeap<NodeIndex, u32>,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            state: SearchState::new(graph.node_count()),
            frontier: IndexedMinHeap::new(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// State left behind by the most recent query.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn find_path(&mut self, source_id: &str, target_id: &str) -> PathResult {
        let search_timer = Instant::now();

        let (Some(source), Some(target)) =
            (self.graph.resolve(source_id), self.graph.resolve(target_id))
        else {
            debug!(source_id, target_id, "unknown person, skipping search");
            return (None, 0, search_timer.elapsed().as_secs_f64());
        };

        let path = self.search(source, target);
        let explored = self.state.explored_count();

        debug!(
            source_id,
            target_id,
            found = path.is_some(),
            degrees = path.as_ref().map(Vec::len),
            explored,
            "uniform-cost search finished"
        );

        (path, explored, search_timer.elapsed().as_secs_f64())
    }

    fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Option<Vec<PathStep>> {
        let graph = self.graph;

        self.state.reset();
        self.frontier.clear();

        self.state.start(source);
        self.state.mark_open(source);
        self.frontier.insert(source, 0);

        while let Some(HeapEntry { key: current, .. }) = self.frontier.pop_min() {
            if current == target {
                return Some(self.state.path_to(graph, target));
            }

            self.state.close(current);

            let current_cost = self.state.cost(current);
            for connection in graph.node(current).connections() {
                self.visit_neighbor(connection, current_cost);
            }
        }

        None
    }

    fn visit_neighbor(&mut self, connection: &Connection, current_cost: u32) {
        let destination = connection.destination;
        if self.state.is_closed(destination) {
            return;
        }

        self.state.relax(
            destination,
            current_cost + EDGE_COST,
            connection.source,
            connection.movie,
        );

        // Re-seat an open node so the heap sees its possibly lowered cost.
        if self.state.is_open(destination) {
            self.frontier.remove(&destination);
        } else {
            self.state.mark_open(destination);
        }
        self.frontier.insert(destination, self.state.cost(destination));
    }
}

/// Fewest-hop chain of `(movie_id, person_id)` steps from `source_id` to
/// `target_id`, or `None` if either is unknown or they are not connected.
pub fn shortest_path(graph: &Graph, source_id: &str, target_id: &str) -> Option<Vec<PathStep>> {
    PathFinder::new(graph).find_path(source_id, target_id).0
}
