//! Error type shared by the cursor lists and the route graph.

use thiserror::Error;

/// Contract violations reported by lists and graphs.
///
/// Expected outcomes such as an unknown airport id are returned as `bool` or
/// `Option` by the core; only consumers that need a hard failure turn them
/// into [`GraphError::KeyNotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A constructor argument was out of its valid domain (e.g. zero capacity).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A vertex was inserted into a graph that is already full.
    #[error("graph capacity of {capacity} vertices exceeded")]
    CapacityExceeded {
        /// Declared vertex capacity of the graph.
        capacity: usize,
    },
    /// An edge operation was attempted on a graph without vertices.
    #[error("graph has no vertices")]
    EmptyGraph,
    /// An element was removed from an empty list.
    #[error("container is empty")]
    EmptyContainer,
    /// The cursor was read or moved while not positioned on an element.
    #[error("cursor does not point to an element")]
    InvalidCursor,
    /// A vertex slot outside `[0, len)` was requested.
    #[error("vertex index {index} out of range for graph of length {len}")]
    IndexOutOfRange {
        /// Requested slot.
        index: usize,
        /// Number of occupied slots.
        len: usize,
    },
    /// No vertex carries the requested id.
    #[error("no airport with id {0}")]
    KeyNotFound(i32),
}

/// Result alias for list and graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
