//! Airport route graphs built on cursor lists.
//!
//! - `options`: graph kind and construction parameters
//! - `neighbor_list`: adjacency entries and the per-vertex list
//! - `vertex`: airport records and their neighbor cursors
//! - `route_graph`: the fixed-capacity graph itself

pub mod neighbor_list;
pub mod options;
pub mod route_graph;
pub mod vertex;

pub use neighbor_list::{Entry, NeighborList};
pub use options::{GraphKind, GraphOptions};
pub use route_graph::RouteGraph;
pub use vertex::{Airport, Vertex, FIELD_LEN, IATA_LEN};
