//! Graph configuration options.

use serde::Serialize;

/// Edge-symmetry mode of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Every edge is stored in both directions.
    Undirected,
    /// Edges are stored only from source to destination.
    #[default]
    Directed,
}

impl GraphKind {
    /// Returns true if the graph is directed.
    pub fn is_directed(self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}

/// Construction parameters for a [`RouteGraph`](super::RouteGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Maximum number of vertices; must be greater than zero.
    pub capacity: usize,
    /// Edge-symmetry mode.
    pub kind: GraphKind,
}

impl GraphOptions {
    /// Vertex capacity used when none is given.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Options for a graph of `capacity` vertices of the given kind.
    pub fn new(capacity: usize, kind: GraphKind) -> Self {
        Self { capacity, kind }
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            kind: GraphKind::Directed,
        }
    }
}
