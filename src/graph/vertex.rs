//! Vertices: an airport record plus its lazily created neighbor list.

use super::neighbor_list::{Entry, NeighborList};
use crate::collections::{Cursor, FixedString};
use crate::error::{GraphError, Result};
use serde::Serialize;

/// Length of an IATA airport code.
pub const IATA_LEN: usize = 3;
/// Byte capacity of the country, city and name fields.
pub const FIELD_LEN: usize = 64;

/// Descriptive record of one airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Airport {
    /// User-facing key; resolved to a slot by linear search.
    pub id: i32,
    /// Offset from UTC in hours.
    pub utc_offset: i32,
    /// Three-letter IATA code.
    #[serde(rename = "iata")]
    pub iata_code: FixedString<IATA_LEN>,
    /// Country name.
    pub country: FixedString<FIELD_LEN>,
    /// City name.
    pub city: FixedString<FIELD_LEN>,
    /// Airport name.
    pub name: FixedString<FIELD_LEN>,
}

impl Airport {
    /// Builds a record, bounding every text field by its capacity.
    pub fn new(
        id: i32,
        iata: &str,
        country: &str,
        city: &str,
        name: &str,
        utc_offset: i32,
    ) -> Self {
        Self {
            id,
            utc_offset,
            iata_code: iata.into(),
            country: country.into(),
            city: city.into(),
            name: name.into(),
        }
    }
}

/// A graph vertex.
///
/// `neighbors` stays `None` until the first edge leaves this vertex.
#[derive(Debug, Clone)]
pub struct Vertex {
    airport: Airport,
    neighbors: Option<NeighborList>,
}

impl Vertex {
    pub(crate) fn new(airport: Airport) -> Self {
        Self {
            airport,
            neighbors: None,
        }
    }

    /// The airport stored in this vertex.
    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    /// The airport id.
    pub fn id(&self) -> i32 {
        self.airport.id
    }

    /// Returns `true` once at least one edge leaves this vertex.
    pub fn has_neighbors(&self) -> bool {
        self.neighbors.is_some()
    }

    /// The neighbor list, if one has been created.
    pub fn neighbors(&self) -> Option<&NeighborList> {
        self.neighbors.as_ref()
    }

    /// Number of outgoing entries.
    pub fn degree(&self) -> usize {
        self.neighbors.as_ref().map_or(0, NeighborList::len)
    }

    /// Inserts `(index, weight)` unless an entry for `index` already exists.
    ///
    /// Creates the list on first use. Returns whether an entry was added.
    pub(crate) fn insert_neighbor(&mut self, index: usize, weight: f32) -> bool {
        let neighbors = self.neighbors.get_or_insert_with(NeighborList::new);
        if neighbors.find(index) {
            return false;
        }
        neighbors.push_entry(index, weight);
        true
    }

    /// Points the neighbor cursor at the first neighbor.
    ///
    /// Call before every traversal. Without neighbors this is a no-op and
    /// [`at_end`](Self::at_end) reports `true`.
    pub fn start_traversal(&mut self) {
        if let Some(neighbors) = self.neighbors.as_mut() {
            neighbors.cursor_front();
        }
    }

    /// Moves the neighbor cursor forward.
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if the cursor is past the end or the
    /// vertex has no neighbors.
    pub fn advance(&mut self) -> Result<bool> {
        self.neighbors
            .as_mut()
            .ok_or(GraphError::InvalidCursor)?
            .cursor_next()
    }

    /// Returns `true` when the traversal has passed the last neighbor.
    pub fn at_end(&self) -> bool {
        self.neighbors.as_ref().map_or(true, NeighborList::cursor_end)
    }

    /// The entry under the neighbor cursor.
    ///
    /// ```rust
    /// use skyroute::{GraphKind, RouteGraph};
    ///
    /// let mut g = RouteGraph::new(2, GraphKind::Directed).unwrap();
    /// g.add_airport(100, "MEX", "Mexico", "Mexico City", "Benito Juarez", -6).unwrap();
    /// g.add_airport(150, "CDG", "France", "Paris", "Charles de Gaulle", 1).unwrap();
    /// g.add_weighted_edge(100, 150, 9.0).unwrap();
    ///
    /// let v = g.get_vertex_mut(0).unwrap();
    /// let mut targets = Vec::new();
    /// v.start_traversal();
    /// while !v.at_end() {
    ///     targets.push(v.current_neighbor().unwrap().neighbor_index);
    ///     v.advance().unwrap();
    /// }
    /// assert_eq!(targets, [1]);
    /// ```
    ///
    /// # Errors
    /// [`GraphError::InvalidCursor`] if the cursor is past the end or the
    /// vertex has no neighbors.
    pub fn current_neighbor(&self) -> Result<Entry> {
        self.neighbors
            .as_ref()
            .ok_or(GraphError::InvalidCursor)?
            .cursor_get()
    }

    /// A detached walker over the neighbors, positioned at the first one.
    pub fn neighbor_walker(&self) -> Option<Cursor<'_, Entry>> {
        self.neighbors.as_ref().map(NeighborList::walk_front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mex() -> Vertex {
        Vertex::new(Airport::new(100, "MEX", "Mexico", "Mexico City", "Benito Juarez", -6))
    }

    #[test]
    fn test_traversal_without_neighbors() {
        let mut v = mex();
        assert!(!v.has_neighbors());
        v.start_traversal();
        assert!(v.at_end());
        assert_eq!(v.advance(), Err(GraphError::InvalidCursor));
        assert_eq!(v.current_neighbor(), Err(GraphError::InvalidCursor));
        assert!(v.neighbor_walker().is_none());
        assert_eq!(v.degree(), 0);
    }

    #[test]
    fn test_insert_neighbor_suppresses_duplicates() {
        let mut v = mex();
        assert!(v.insert_neighbor(3, 2.0));
        assert!(v.insert_neighbor(1, 4.0));
        assert!(!v.insert_neighbor(3, 7.0));
        assert_eq!(v.degree(), 2);

        let mut seen = Vec::new();
        v.start_traversal();
        while !v.at_end() {
            seen.push(v.current_neighbor().unwrap());
            v.advance().unwrap();
        }
        assert_eq!(seen, vec![Entry::new(3, 2.0), Entry::new(1, 4.0)]);
    }

    #[test]
    fn test_airport_fields_are_bounded() {
        let a = Airport::new(1, "ABCD", "C", "Ci", "N", 0);
        assert_eq!(a.iata_code, "ABC");
        assert_eq!(a.city, "Ci");
    }
}
