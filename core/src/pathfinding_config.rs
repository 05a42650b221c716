use serde::{Deserialize, Serialize};

/// Search strategy used to connect two people.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Uniform-cost search over the indexed heap
    #[default]
    UniformCost,
    /// Plain breadth-first search
    Bfs,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::UniformCost => "uniform-cost",
            Algorithm::Bfs => "bfs",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "uniform-cost" | "ucs" | "dijkstra" => Algorithm::UniformCost,
            "bfs" => Algorithm::Bfs,
            _ => Algorithm::default(),
        }
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        Algorithm::from(s.as_str())
    }
}

/// Configuration for pathfinding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathfindingConfig {
    #[serde(default)]
    pub algorithm: Algorithm,
}

impl PathfindingConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}
