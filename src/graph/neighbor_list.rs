//! Adjacency entries and the per-vertex neighbor list.

use crate::collections::{CursorList, Keyed};
use serde::Serialize;

/// One adjacency record: the neighbor's vertex slot and the edge weight.
///
/// Identity is `neighbor_index`; the weight plays no part in lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Entry {
    /// Slot of the neighbor vertex in the owning graph.
    pub neighbor_index: usize,
    /// Edge weight (`0.0` for unweighted edges).
    pub weight: f32,
}

impl Entry {
    /// Creates an entry.
    pub fn new(neighbor_index: usize, weight: f32) -> Self {
        Self {
            neighbor_index,
            weight,
        }
    }
}

impl Keyed for Entry {
    type Key = usize;

    #[inline]
    fn key(&self) -> usize {
        self.neighbor_index
    }
}

/// A vertex's neighbors, in insertion order.
pub type NeighborList = CursorList<Entry>;

impl CursorList<Entry> {
    /// Appends `(key, weight)` at the tail without a duplicate check.
    pub fn push_entry(&mut self, key: usize, weight: f32) {
        self.push_back(Entry::new(key, weight));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_matches_on_index_not_weight() {
        let mut list = NeighborList::new();
        list.push_entry(4, 1.5);
        list.push_entry(2, 1.5);

        assert!(list.find(2));
        assert_eq!(list.cursor_get(), Ok(Entry::new(2, 1.5)));
        assert!(!list.contains(1));
    }
}
