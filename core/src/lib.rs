pub mod dataset;
pub mod error;
pub mod graph;
pub mod heap;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod string_normalization;

// Re-export commonly used items
pub use dataset::{Dataset, Movie, MovieId, Person, PersonId};
pub use error::{Error, Result};
pub use graph::{Connection, Graph, MovieIndex, NodeIndex, PathNode, build_graph};
pub use heap::{HeapEntry, IndexedMinHeap};
pub use pathfinding::{
    PathFinder, PathResult, PathStep, bfs_shortest_path, find_path, shortest_path,
};
pub use pathfinding_config::{Algorithm, PathfindingConfig};
