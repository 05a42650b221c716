pub mod bfs;
pub mod state;
pub mod uniform_cost;
pub mod utils;

pub use bfs::bfs_shortest_path;
pub use state::{EDGE_COST, INFINITE_COST, NodeState, SearchState};
pub use uniform_cost::{PathFinder, shortest_path};
pub use utils::{PathResult, PathStep};

use crate::graph::Graph;
use crate::pathfinding_config::{Algorithm, PathfindingConfig};

/// Runs the search selected by `config`.
pub fn find_path(
    graph: &Graph,
    source_id: &str,
    target_id: &str,
    config: &PathfindingConfig,
) -> PathResult {
    match config.algorithm {
        Algorithm::UniformCost => PathFinder::new(graph).find_path(source_id, target_id),
        Algorithm::Bfs => bfs_shortest_path(graph, source_id, target_id),
    }
}
