use super::utils::PathStep;
use crate::graph::{Graph, MovieIndex, NodeIndex};
use rustc_hash::FxHashSet;

/// Cost of a node the current search has not reached.
pub const INFINITE_COST: u32 = u32::MAX;

/// Every co-starring edge weighs the same.
pub const EDGE_COST: u32 = 1;

/// Search-local fields of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    pub cost: u32,
    pub predecessor: Option<NodeIndex>,
    pub via_movie: Option<MovieIndex>,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            cost: INFINITE_COST,
            predecessor: None,
            via_movie: None,
        }
    }
}

/// Per-query state, keyed by node index so the graph itself stays immutable.
///
/// `reset` only revisits nodes the previous query reached.
#[derive(Debug)]
pub struct SearchState {
    nodes: Vec<NodeState>,
    touched: Vec<NodeIndex>,
    open: FxHashSet<NodeIndex>,
    closed: FxHashSet<NodeIndex>,
}

impl SearchState {
    pub fn new(node_count: usize) -> Self {
        Self {
            nodes: vec![NodeState::default(); node_count],
            touched: Vec::new(),
            open: FxHashSet::default(),
            closed: FxHashSet::default(),
        }
    }

    pub fn reset(&mut self) {
        for &index in &self.touched {
            self.nodes[index] = NodeState::default();
        }
        self.touched.clear();
        self.open.clear();
        self.closed.clear();
    }

    pub fn node(&self, index: NodeIndex) -> &NodeState {
        &self.nodes[index]
    }

    pub fn cost(&self, index: NodeIndex) -> u32 {
        self.nodes[index].cost
    }

    /// Makes `source` the zero-cost root of the search tree.
    pub fn start(&mut self, source: NodeIndex) {
        self.touch(source);
        self.nodes[source] = NodeState {
            cost: 0,
            predecessor: None,
            via_movie: None,
        };
    }

    /// Records a cheaper route to `destination`. Returns whether it improved.
    pub fn relax(
        &mut self,
        destination: NodeIndex,
        cost: u32,
        predecessor: NodeIndex,
        via_movie: MovieIndex,
    ) -> bool {
        if cost >= self.nodes[destination].cost {
            return false;
        }

        self.touch(destination);
        self.nodes[destination] = NodeState {
            cost,
            predecessor: Some(predecessor),
            via_movie: Some(via_movie),
        };
        true
    }

    /// Returns `false` if `index` was already open.
    pub fn mark_open(&mut self, index: NodeIndex) -> bool {
        self.open.insert(index)
    }

    pub fn is_open(&self, index: NodeIndex) -> bool {
        self.open.contains(&index)
    }

    pub fn close(&mut self, index: NodeIndex) {
        self.open.remove(&index);
        self.closed.insert(index);
    }

    pub fn is_closed(&self, index: NodeIndex) -> bool {
        self.closed.contains(&index)
    }

    /// Nodes expanded so far.
    pub fn explored_count(&self) -> usize {
        self.closed.len()
    }

    /// Walks predecessors back from `target`. The root has no `via_movie` and
    /// is not part of the result.
    pub fn path_to(&self, graph: &Graph, target: NodeIndex) -> Vec<PathStep> {
        let mut path = Vec::new();
        let mut current = Some(target);

        while let Some(index) = current {
            let node_state = &self.nodes[index];
            let Some(movie) = node_state.via_movie else {
                break;
            };
            path.push((
                graph.movie_id(movie).to_string(),
                graph.node(index).person_id().to_string(),
            ));
            current = node_state.predecessor;
        }

        path.reverse();
        path
    }

    fn touch(&mut self, index: NodeIndex) {
        if self.nodes[index].cost == INFINITE_COST {
            self.touched.push(index);
        }
    }
}
