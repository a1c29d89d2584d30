//! General-purpose containers used by the graph.
//!
//! - `cursor_list`: arena-backed doubly linked list with an embedded cursor
//! - `fixed_string`: inline strings with a compile-time capacity

pub mod cursor_list;
pub mod fixed_string;

pub use cursor_list::{Cursor, CursorList, IntoIter, Iter, Keyed};
pub use fixed_string::FixedString;
