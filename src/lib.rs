//! # `skyroute` - Cursor Lists and Airport Route Graphs
//!
//! A small graph toolkit for route networks: airports are vertices stored in
//! a fixed-capacity array, and each vertex keeps its outgoing routes in a
//! doubly linked list traversed through a cursor.
//!
//! ## Memory Model
//!
//! - **Arena-backed lists**: list nodes live in an indexed store with
//!   explicit `prev`/`next` indices. Unlinking a node frees its slot onto a
//!   free list; no sibling can be left pointing at released storage.
//! - **Exclusive ownership**: the graph owns its vertices, each vertex owns
//!   its neighbor list, each list owns its nodes. There are no back
//!   references, so dropping the graph releases everything deterministically.
//! - **Lazy adjacency**: a vertex's list is an `Option` that is created by
//!   the first edge leaving it.
//!
//! ## Keys and Slots
//!
//! Callers name airports by id (the *key*). The graph resolves a key to the
//! vertex's array position (the *slot*) by linear search, first match wins,
//! and stores only slots in neighbor entries. Slots never move once assigned.
//!
//! ## Cursors
//!
//! Every [`CursorList`] carries one embedded cursor, moved with
//! `cursor_front`/`cursor_next`/`cursor_end`/`cursor_get`. It is not
//! reentrant: starting a second traversal resets the first. For nested or
//! read-only walks use a detached [`Cursor`] from [`CursorList::walk_front`],
//! which owns only its own position.
//!
//! ## Errors
//!
//! Contract violations (zero capacity, full graph, empty list, dangling
//! cursor, bad slot) are reported as [`GraphError`]. Expected outcomes, such
//! as an unknown airport id, come back as `bool` or `Option`.
//!
//! ## Example
//!
//! ```rust
//! use skyroute::{GraphKind, RouteGraph};
//!
//! let mut g = RouteGraph::new(3, GraphKind::Directed)?;
//! g.add_airport(100, "MEX", "Mexico", "Mexico City", "Benito Juarez", -6)?;
//! g.add_airport(200, "CDG", "France", "Paris", "Charles de Gaulle", 1)?;
//! assert!(g.add_weighted_edge(100, 200, 9.0)?);
//!
//! assert!(g.is_neighbor_of(200, 100));
//! assert!(!g.is_neighbor_of(100, 200));
//! # Ok::<(), skyroute::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod collections;
pub mod error;
pub mod graph;
pub mod report;

pub use collections::{Cursor, CursorList, FixedString, Keyed};
pub use error::{GraphError, Result};
pub use graph::{Airport, Entry, GraphKind, GraphOptions, NeighborList, RouteGraph, Vertex};
pub use report::GraphReport;
